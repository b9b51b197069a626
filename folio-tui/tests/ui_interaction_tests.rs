//! TUI Interaction Tests
//!
//! Drives the application through its public state and key handler and
//! renders screens into ratatui's `TestBackend`.

use std::fs;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tempfile::TempDir;

use folio_core::{Locale, SiteConfig};
use folio_tui::app::{App, Screen};
use folio_tui::backend::RecordingOpener;
use folio_tui::handlers::{handle_key, Action};
use folio_tui::ui;

fn app_with(config: SiteConfig) -> (App, Rc<RecordingOpener>) {
    let opener = Rc::new(RecordingOpener::new());
    let app = App::with_opener(&config, Box::new(opener.clone())).unwrap();
    (app, opener)
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    let mut text = String::new();
    for row in buffer.content().chunks(width) {
        for cell in row {
            text.push_str(cell.symbol());
        }
        text.push('\n');
    }
    text
}

// ============================================================================
// Screen Enum Tests
// ============================================================================

/// Test: All screen variants exist
#[test]
fn test_screen_variants_exist() {
    let screens = [Screen::Home, Screen::About, Screen::Help];
    assert_eq!(screens.len(), 3);
}

// ============================================================================
// Rendering
// ============================================================================

/// Test: nothing of the hero is drawn before the first reveal delay
#[test]
fn test_hero_hidden_at_mount() {
    let (mut app, _) = app_with(SiteConfig::default().with_locale(Locale::English));
    app.mount_home(Instant::now());

    let screen = render(&app);

    assert!(!screen.contains("Hello! I am"));
    assert!(!screen.contains("GitHub"));
}

/// Test: once settled, all four blocks and the visible links are drawn
#[test]
fn test_hero_visible_after_reveal() {
    let (mut app, _) = app_with(SiteConfig::default().with_locale(Locale::English));
    let start = Instant::now();
    app.mount_home(start);
    app.tick(start + Duration::from_secs(3));

    let screen = render(&app);

    assert!(screen.contains("Hello! I am"));
    assert!(screen.contains("GitHub"));
    assert!(screen.contains("About me"));
    // Entries without a destination are not rendered
    assert!(!screen.contains("Twitter"));
}

/// Test: the selected link's hover label shows its destination
#[test]
fn test_selected_link_tooltip() {
    let (mut app, _) = app_with(SiteConfig::default().without_motion());

    let screen = render(&app);

    assert!(screen.contains("GitHub (https://github.com/your-name)"));
}

/// Test: toggling WeChat shows the image panel, toggling again hides it
#[test]
fn test_qr_panel_toggles() {
    let (mut app, opener) = app_with(
        SiteConfig::default()
            .with_locale(Locale::English)
            .without_motion(),
    );
    handle_key(&mut app, KeyCode::Right);
    handle_key(&mut app, KeyCode::Right);

    handle_key(&mut app, KeyCode::Enter);
    let shown = render(&app);
    assert!(shown.contains("img/mywx.png"));

    handle_key(&mut app, KeyCode::Enter);
    let hidden = render(&app);
    assert!(!hidden.contains("img/mywx.png"));

    assert!(opener.opened().is_empty());
}

/// Test: every revealed QR link gets its own panel
#[test]
fn test_each_revealed_qr_link_is_drawn() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("social.json");
    fs::write(
        &path,
        r##"[{"key":"wx","href":"#","title":"WeChat","type":"wx"},
             {"key":"work","href":"#","title":"WeCom","type":"wx"}]"##,
    )
    .unwrap();
    let (mut app, opener) = app_with(
        SiteConfig::default()
            .with_locale(Locale::English)
            .with_social_file(&path)
            .without_motion(),
    );

    handle_key(&mut app, KeyCode::Enter);
    handle_key(&mut app, KeyCode::Right);
    handle_key(&mut app, KeyCode::Enter);
    let screen = render(&app);

    assert!(screen.contains("Scan to add me on WeChat"));
    assert!(screen.contains("Scan to add me on WeCom"));
    assert!(opener.opened().is_empty());
}

// ============================================================================
// Navigation
// ============================================================================

/// Test: the action control leads to the About screen
#[test]
fn test_about_navigation() {
    let (mut app, _) = app_with(
        SiteConfig::default()
            .with_locale(Locale::English)
            .without_motion(),
    );

    assert_eq!(handle_key(&mut app, KeyCode::Char('a')), Action::Continue);
    assert_eq!(app.screen, Screen::About);
    assert!(render(&app).contains("About"));

    handle_key(&mut app, KeyCode::Esc);
    assert_eq!(app.screen, Screen::Home);
}

/// Test: Enter on an anchor opens it in the browser
#[test]
fn test_enter_opens_anchor() {
    let (mut app, opener) = app_with(SiteConfig::default().without_motion());
    handle_key(&mut app, KeyCode::Enter);
    assert_eq!(opener.opened(), vec!["https://github.com/your-name".to_string()]);
}
