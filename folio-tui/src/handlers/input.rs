//! Keyboard Input Handling

use crossterm::event::KeyCode;

use crate::app::{App, Screen};

/// Action to take after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// Handle a key press.
pub fn handle_key(app: &mut App, key: KeyCode) -> Action {
    // Global keys
    match key {
        KeyCode::Char('q') if app.screen == Screen::Help => {
            app.go_back();
            return Action::Continue;
        }
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Char('?') => {
            app.goto(Screen::Help);
            return Action::Continue;
        }
        KeyCode::Esc => {
            app.go_back();
            return Action::Continue;
        }
        _ => {}
    }

    // Screen-specific keys
    if app.screen == Screen::Home {
        handle_home_keys(app, key);
    }

    Action::Continue
}

fn handle_home_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.select_previous_link(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.select_next_link(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate_selected_link();
        }
        KeyCode::Char('a') => app.activate_action(),
        _ => {}
    }
}
