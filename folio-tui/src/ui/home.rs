//! Home Screen

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use folio_core::hero::HeroBlock;
use folio_core::reveal::RevealFrame;
use folio_core::theme::{Accent, Palette};

use super::{links, rgb};
use crate::app::App;

/// Rows a block travels over the full reveal distance.
const MAX_SHIFT_ROWS: f64 = 2.0;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let palette = Palette::dark();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Greeting
            Constraint::Length(5), // Intro
            Constraint::Length(3), // Social links
            Constraint::Length(3), // Action
            Constraint::Min(0),    // QR panel
        ])
        .split(area);

    for (i, slot) in app.hero.slots().iter().enumerate() {
        let frame = app
            .frames()
            .get(i)
            .copied()
            .unwrap_or_else(RevealFrame::resting);
        let Some(target) = revealed_area(chunks[i], frame, slot.reveal.distance) else {
            continue;
        };
        let fade = |color: Accent| rgb(palette.background.mix(color, frame.opacity));

        match &slot.block {
            HeroBlock::Greeting { greet, name, wave } => {
                let line = Line::from(vec![
                    Span::styled(greet.as_str(), Style::default().fg(fade(palette.text))),
                    Span::raw(" "),
                    Span::styled(
                        name.as_str(),
                        Style::default()
                            .fg(fade(palette.highlight))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::raw(wave.as_str()),
                ]);
                f.render_widget(Paragraph::new(line), target);
            }
            HeroBlock::Intro { text } => {
                let intro = Paragraph::new(text.as_str())
                    .style(Style::default().fg(fade(palette.muted)))
                    .wrap(Wrap { trim: true });
                f.render_widget(intro, target);
            }
            HeroBlock::SocialBar => links::draw_bar(f, target, app, frame.opacity),
            HeroBlock::Action { label, .. } => {
                let line = Line::from(format!(" {} → ", label));
                let width = (line.width() as u16 + 2).min(target.width);
                let button = Paragraph::new(line)
                    .style(
                        Style::default()
                            .fg(fade(palette.text))
                            .add_modifier(Modifier::BOLD),
                    )
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_type(BorderType::Rounded)
                            .border_style(Style::default().fg(fade(palette.highlight))),
                    );
                f.render_widget(button, Rect { width, ..target });
            }
        }
    }

    links::draw_qr_panel(f, chunks[4], app);
}

/// Area a block occupies for `frame`, or `None` while it is invisible.
///
/// The vertical offset is scaled from `distance` to at most
/// `MAX_SHIFT_ROWS` rows and clipped at the bottom of `area`.
pub fn revealed_area(area: Rect, frame: RevealFrame, distance: f64) -> Option<Rect> {
    if !frame.is_visible() {
        return None;
    }

    let rows = if distance > 0.0 {
        (frame.offset_y / distance * MAX_SHIFT_ROWS).round().max(0.0) as u16
    } else {
        0
    };
    let rows = rows.min(area.height);
    let height = area.height - rows;
    if height == 0 {
        return None;
    }

    Some(Rect {
        y: area.y + rows,
        height,
        ..area
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invisible_frame_has_no_area() {
        let area = Rect::new(0, 0, 40, 3);
        assert_eq!(revealed_area(area, RevealFrame::hidden(50.0), 50.0), None);
    }

    #[test]
    fn test_resting_frame_fills_area() {
        let area = Rect::new(0, 5, 40, 3);
        assert_eq!(revealed_area(area, RevealFrame::resting(), 50.0), Some(area));
    }

    #[test]
    fn test_moving_frame_is_shifted_down() {
        let area = Rect::new(0, 5, 40, 3);
        let frame = RevealFrame {
            offset_y: 50.0,
            opacity: 0.1,
        };
        assert_eq!(
            revealed_area(area, frame, 50.0),
            Some(Rect::new(0, 7, 40, 1))
        );
    }
}
