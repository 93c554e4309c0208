use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::theme::AmberNight;

/// Overlay panel listing the sections, the terminal rendition of the
/// mobile menu. Digits jump, Esc closes.
pub struct MenuWidget;

impl MenuWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let width = 30.min(area.width);
        let height = (app.sections.len() as u16 + 4).min(area.height);
        let popup = Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        );

        let active = app.active_section();
        let mut lines = vec![Line::default()];
        for (idx, section) in app.sections.iter().enumerate() {
            let style = if idx == active {
                Style::default()
                    .fg(AmberNight::GOLD)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(AmberNight::FG0)
            };
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{}  {}", idx + 1, section.title), style),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "  Esc to close",
            Style::default().fg(AmberNight::GREY),
        )));

        let block = Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(AmberNight::GOLD))
            .style(Style::default().bg(AmberNight::BG1));

        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }
}
