//! About Screen

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use folio_core::i18n::translate;

use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let title = translate(app.locale, "about.title", "关于我");
    let body = translate(
        app.locale,
        "about.body",
        "一名热爱开源的前端开发者，喜欢折腾各种技术栈，也在这里记录学习与踩坑的过程。",
    );

    let about = Paragraph::new(body)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title).borders(Borders::ALL));

    f.render_widget(about, area);
}
