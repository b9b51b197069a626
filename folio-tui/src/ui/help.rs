//! Help Screen

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, _app: &App) {
    let help_text = r#"
Folio TUI Help
==============

Home Screen
-----------
  h/←     Select previous link
  l/→     Select next link
  Tab     Select next link
  Enter   Open link (or show/hide the QR code)
  a       About me

General
-------
  Esc     Go back
  ?       Show this help
  q       Quit

Press Esc or q to close this help screen.
"#;

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::White))
        .block(Block::default().title("Help").borders(Borders::ALL));

    f.render_widget(help, area);
}
