use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use crate::theme::AmberNight;

pub struct NavbarWidget;

impl NavbarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        // Compact raised treatment once the page has scrolled
        let scrolled = app.navbar_scrolled();
        let bg = if scrolled {
            AmberNight::BG1
        } else {
            AmberNight::BG0
        };

        let active = app.active_section();
        let mut spans = vec![
            Span::styled(
                " VITRINA ",
                Style::default()
                    .fg(AmberNight::GOLD)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];
        for (idx, section) in app.sections.iter().enumerate() {
            let style = if idx == active {
                Style::default()
                    .fg(AmberNight::GOLD)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(AmberNight::FG1)
            };
            spans.push(Span::styled(format!(" {} ", section.title), style));
        }

        let toggle = if app.menu_open { "[≡ close]" } else { "[≡ menu]" };
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let pad = (area.width as usize)
            .saturating_sub(used + toggle.chars().count() + 1);
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(toggle, Style::default().fg(AmberNight::FG1)));

        let mut lines = Vec::new();
        if !scrolled {
            lines.push(Line::default());
        }
        lines.push(Line::from(spans));

        let paragraph = Paragraph::new(lines).block(Block::default().style(Style::default().bg(bg)));
        frame.render_widget(paragraph, area);
    }
}
