use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    Frame,
};

use crate::app::{App, Focus};
use crate::theme::AmberNight;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let focus = match app.focus {
            Focus::Page => "page",
            Focus::Carousel => "team",
            Focus::Form => "contact",
        };
        let autoplay = if app.carousel.autoplay_active() {
            "autoplay on"
        } else {
            "autoplay paused"
        };

        let left = if let Some(ref message) = app.status_message {
            message.clone()
        } else {
            format!(" focus: {} · {} ", focus, autoplay)
        };

        let right = format!(
            "card {}/{} ",
            app.carousel.current() + 1,
            app.carousel.len().max(1)
        );
        let pad = (area.width as usize)
            .saturating_sub(left.chars().count() + right.chars().count());

        let line = Line::from(vec![
            Span::styled(left, Style::default().fg(AmberNight::FG1)),
            Span::raw(" ".repeat(pad)),
            Span::styled(right, Style::default().fg(AmberNight::GREY)),
        ]);

        frame.render_widget(
            ratatui::widgets::Paragraph::new(line)
                .style(Style::default().bg(AmberNight::BG1)),
            area,
        );
    }
}
