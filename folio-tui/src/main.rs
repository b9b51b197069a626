//! Folio Terminal UI
//!
//! Animated landing page for a personal site, rendered with Ratatui.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use folio_core::SiteConfig;
use folio_tui::app::App;
use folio_tui::handlers;
use folio_tui::logging;
use folio_tui::ui;

/// Poll timeout while a reveal is playing (~60 fps).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Poll timeout once everything has settled.
const IDLE_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    // Initialize logging
    logging::init(&logging::default_log_path())?;

    // Load configuration before touching the terminal so errors stay readable
    let config = SiteConfig::from_env()?;
    info!(
        locale = config.locale.code(),
        reduced_motion = config.reduced_motion,
        "Starting Folio TUI v{}",
        env!("CARGO_PKG_VERSION")
    );
    let mut app = App::new(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = if app.is_animating() {
            FRAME_INTERVAL
        } else {
            IDLE_INTERVAL
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match handlers::handle_key(app, key.code) {
                        handlers::Action::Quit => return Ok(()),
                        handlers::Action::Continue => {}
                    }
                }
            }
        }
    }
}
