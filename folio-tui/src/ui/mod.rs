//! UI Rendering

mod about;
mod help;
mod home;
pub mod links;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use folio_core::theme::Accent;

use crate::app::{App, Screen};

/// Draw the application.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer/status
        ])
        .split(f.area());

    // Header
    draw_header(f, chunks[0], app);

    // Content
    match app.screen {
        Screen::Home => home::draw(f, chunks[1], app),
        Screen::About => about::draw(f, chunks[1], app),
        Screen::Help => help::draw(f, chunks[1], app),
    }

    // Footer
    draw_footer(f, chunks[2], app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let title = match app.screen {
        Screen::Home => "Folio",
        Screen::About => "Folio / about",
        Screen::Help => "Help",
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::BOTTOM));

    f.render_widget(header, area);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let help_text = match app.screen {
        Screen::Home => "[←/→] select  [enter] open  [a]bout  [?]help  [q]uit",
        Screen::About => "[esc] back  [?]help  [q]uit",
        Screen::Help => "[esc/q] close",
    };

    let status = if let Some(msg) = &app.status_message {
        format!("{} | {}", msg, help_text)
    } else {
        help_text.to_string()
    };

    let footer = Paragraph::new(status)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(footer, area);
}

pub(crate) fn rgb(accent: Accent) -> Color {
    Color::Rgb(accent.r, accent.g, accent.b)
}
