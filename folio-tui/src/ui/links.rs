//! Social Links Bar

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use folio_core::i18n::translate_with_args;
use folio_core::social::{Icon, RenderedLink};
use folio_core::theme::Palette;

use super::rgb;
use crate::app::App;

/// Glyph shown in front of a link title.
///
/// Icon-set names cannot be drawn in a terminal, so they share one marker.
/// Empty icons leave an empty slot.
pub fn icon_glyph(icon: &Icon) -> &str {
    match icon {
        Icon::Named(name) if !name.is_empty() => "◆",
        Icon::Named(_) => " ",
        Icon::Inline(text) if !text.is_empty() => text,
        Icon::Inline(_) => " ",
    }
}

pub fn draw_bar(f: &mut Frame, area: Rect, app: &App, opacity: f64) {
    let palette = Palette::dark();
    let links = app.links();

    let mut spans = Vec::with_capacity(links.len() * 2);
    for (i, link) in links.iter().enumerate() {
        let accent = link.accent().unwrap_or(palette.text);
        let mut style = Style::default().fg(rgb(palette.background.mix(accent, opacity)));
        if i == app.selected_link {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        spans.push(Span::styled(
            format!(" {} {} ", icon_glyph(link.icon()), link.title()),
            style,
        ));
        spans.push(Span::raw(" "));
    }

    let title = links
        .get(app.selected_link)
        .map(RenderedLink::tooltip)
        .unwrap_or_default();

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title),
    );
    f.render_widget(bar, area);
}

/// Shows the image of every revealed QR link, side by side.
pub fn draw_qr_panel(f: &mut Frame, area: Rect, app: &App) {
    let revealed: Vec<_> = app
        .links()
        .into_iter()
        .filter_map(|link| match link {
            RenderedLink::QrReveal {
                title,
                image,
                revealed: true,
                ..
            } => Some((title, image)),
            _ => None,
        })
        .collect();
    if revealed.is_empty() {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, revealed.len() as u32); revealed.len()])
        .split(area);

    for ((title, image), chunk) in revealed.iter().zip(chunks.iter()) {
        let hint = translate_with_args(
            app.locale,
            "social.qr.hint",
            "扫码添加{title}",
            &[("title", title.as_str())],
        );
        let body = image
            .render_ascii()
            .unwrap_or_else(|| image.alt().to_string());

        let panel = Paragraph::new(body)
            .style(Style::default().fg(Color::White))
            .block(Block::default().title(hint).borders(Borders::ALL));
        f.render_widget(panel, *chunk);
    }
}
