//! Scrollable page body.
//!
//! The page is composed as a full column of styled lines in page
//! coordinates, then the window `[scroll, scroll + height)` is rendered.
//! The carousel track is composited per row from the card boxes and the
//! current track offset, and the widget writes the hit areas (track,
//! prev/next, dots) back onto the `App` for pointer routing.

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{App, FormState, Focus};
use crate::theme::AmberNight;

/// Left/right page margin in columns
const MARGIN: u16 = 2;
/// Rows occupied by a card box on the track
const CARD_ROWS: u16 = 5;
/// Track position inside the team section
const TRACK_TOP: u16 = 2;
const DOTS_ROW: u16 = TRACK_TOP + CARD_ROWS;

pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App, now: Instant) {
        app.body_height = area.height;
        app.carousel.set_viewport_width(area.width.saturating_sub(2 * MARGIN));

        let scroll = app.page_scroll.offset();
        let mut lines: Vec<Line> = vec![Line::default(); app.page_height as usize];

        Self::place(&mut lines, app.sections[0].top, Self::hero_lines(app));
        Self::place(&mut lines, app.sections[1].top, Self::about_lines(app, now));
        Self::place(&mut lines, app.sections[2].top, Self::stats_lines(app, now));
        Self::place(&mut lines, app.sections[3].top, Self::team_lines(app, area, now));
        Self::place(&mut lines, app.sections[4].top, Self::contact_lines(app, now));

        Self::update_hit_areas(app, area, scroll);

        let visible: Vec<Line> = lines
            .into_iter()
            .skip(scroll as usize)
            .take(area.height as usize)
            .collect();

        let paragraph = Paragraph::new(visible)
            .block(Block::default().style(Style::default().bg(AmberNight::BG0)));
        frame.render_widget(paragraph, area);
    }

    fn place(lines: &mut [Line<'static>], top: u16, content: Vec<Line<'static>>) {
        for (i, line) in content.into_iter().enumerate() {
            if let Some(slot) = lines.get_mut(top as usize + i) {
                *slot = line;
            }
        }
    }

    fn margin() -> Span<'static> {
        Span::raw(" ".repeat(MARGIN as usize))
    }

    fn header_line(title: &str, progress: f64) -> Line<'static> {
        Line::from(vec![
            Self::margin(),
            Span::styled(
                format!("── {} ", title.to_uppercase()),
                Style::default()
                    .fg(AmberNight::reveal_accent(progress))
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    }

    fn text_line(text: impl Into<String>, fg: ratatui::style::Color) -> Line<'static> {
        Line::from(vec![
            Self::margin(),
            Span::styled(text.into(), Style::default().fg(fg)),
        ])
    }

    fn hero_lines(app: &App) -> Vec<Line<'static>> {
        let gold = Style::default()
            .fg(AmberNight::GOLD)
            .add_modifier(Modifier::BOLD);
        vec![
            Line::default(),
            Line::default(),
            Line::from(vec![Self::margin(), Span::styled("VITRINA", gold)]),
            Line::from(vec![
                Self::margin(),
                Span::styled(
                    "Talent that transforms teams",
                    Style::default().fg(AmberNight::FG0),
                ),
            ]),
            Line::default(),
            Self::text_line(
                "We connect exceptional specialists with ambitious companies.",
                AmberNight::FG1,
            ),
            Self::text_line(
                "Scroll down to meet the team and see what we have built.",
                AmberNight::FG1,
            ),
            Line::default(),
            Self::text_line(
                format!(
                    "j/k scroll · 1-{} sections · m menu · Tab focus · q quit",
                    app.sections.len()
                ),
                AmberNight::GREY,
            ),
        ]
    }

    fn about_lines(app: &App, now: Instant) -> Vec<Line<'static>> {
        let progress = app.reveal.reveal_progress(app.header_reveals[1], now);
        let fg = AmberNight::reveal_fg(progress);
        vec![
            Self::header_line("About", progress),
            Line::default(),
            Self::text_line(
                "Vitrina is a boutique talent studio. We embed with our",
                fg,
            ),
            Self::text_line(
                "clients, learn how their teams actually work, and bring in",
                fg,
            ),
            Self::text_line("the specialists who fit.", fg),
            Line::default(),
            Self::text_line(
                "A decade in, most of our placements still work where we",
                fg,
            ),
            Self::text_line("placed them.", fg),
        ]
    }

    fn stats_lines(app: &App, now: Instant) -> Vec<Line<'static>> {
        let header_progress = app.reveal.reveal_progress(app.header_reveals[2], now);
        let mut lines = vec![Self::header_line("Impact", header_progress), Line::default()];

        for stat in &app.stats {
            let progress = app.reveal.reveal_progress(stat.element, now);
            let value = app
                .reveal
                .counter_display(stat.element)
                .unwrap_or_else(|| "0".to_string());
            lines.push(Line::from(vec![
                Self::margin(),
                Span::styled(
                    format!("{:>8}  ", value),
                    Style::default()
                        .fg(AmberNight::reveal_accent(progress))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(stat.label, Style::default().fg(AmberNight::reveal_fg(progress))),
            ]));
            lines.push(Line::default());
        }
        lines
    }

    fn team_lines(app: &App, area: Rect, now: Instant) -> Vec<Line<'static>> {
        let header_progress = app.reveal.reveal_progress(app.header_reveals[3], now);
        let mut lines = vec![Self::header_line("Team", header_progress), Line::default()];

        if app.carousel.disabled() {
            lines.push(Self::text_line("(no team members yet)", AmberNight::GREY));
            return lines;
        }

        let track_width = area.width.saturating_sub(2 * MARGIN) as usize;
        for row in 0..CARD_ROWS {
            lines.push(Self::track_line(app, row, track_width, now));
        }

        // Dot indicators, one per card
        let mut dot_spans = vec![Self::margin()];
        let dots_width = app.carousel.len() * 2 - 1;
        let pad = track_width.saturating_sub(dots_width) / 2;
        dot_spans.push(Span::raw(" ".repeat(pad)));
        for (i, active) in app.carousel.dot_states().iter().enumerate() {
            if i > 0 {
                dot_spans.push(Span::raw(" "));
            }
            let (glyph, color) = if *active {
                ("●", AmberNight::GOLD)
            } else {
                ("○", AmberNight::GREY)
            };
            dot_spans.push(Span::styled(glyph, Style::default().fg(color)));
        }
        lines.push(Line::from(dot_spans));

        let hint = if app.focus == Focus::Carousel {
            "←/→ browse · drag to scroll · hover pauses autoplay"
        } else {
            "drag to scroll · hover pauses autoplay"
        };
        lines.push(Self::text_line(hint, AmberNight::GREY));
        lines
    }

    /// Composite one track row from the visible slices of each card box
    fn track_line(app: &App, row: u16, track_width: usize, now: Instant) -> Line<'static> {
        let offset = app.carousel.offset() as i64;
        let card_width = app.config.carousel.card_width as usize;
        let mut spans = Vec::new();

        // Prev affordance in the left margin, on the middle row
        let prev_style = if app.carousel.prev_enabled() {
            Style::default().fg(AmberNight::GOLD)
        } else {
            Style::default().fg(AmberNight::DIM)
        };
        if row == CARD_ROWS / 2 {
            spans.push(Span::styled("‹ ", prev_style));
        } else {
            spans.push(Span::raw("  "));
        }

        let mut cursor = 0usize;
        for (i, &card_offset) in app.carousel.card_offsets().iter().enumerate() {
            let rel = card_offset as i64 - offset;
            let start = rel.max(0);
            let end = (rel + card_width as i64).min(track_width as i64);
            if end <= start || start >= track_width as i64 {
                continue;
            }

            if start as usize > cursor {
                spans.push(Span::raw(" ".repeat(start as usize - cursor)));
            }

            let skip = (start - rel) as usize;
            let take = (end - start) as usize;
            let text: String = Self::card_row_text(app, i, row)
                .chars()
                .skip(skip)
                .take(take)
                .collect();

            let progress = app.reveal.reveal_progress(app.card_reveals[i], now);
            let color = if i == app.carousel.current() {
                AmberNight::reveal_accent(progress)
            } else {
                AmberNight::reveal_fg(progress)
            };
            spans.push(Span::styled(text, Style::default().fg(color)));
            cursor = end as usize;
        }
        if cursor < track_width {
            spans.push(Span::raw(" ".repeat(track_width - cursor)));
        }

        // Next affordance in the right margin
        let next_style = if app.carousel.next_enabled() {
            Style::default().fg(AmberNight::GOLD)
        } else {
            Style::default().fg(AmberNight::DIM)
        };
        if row == CARD_ROWS / 2 {
            spans.push(Span::styled(" ›", next_style));
        } else {
            spans.push(Span::raw("  "));
        }

        Line::from(spans)
    }

    fn card_row_text(app: &App, index: usize, row: u16) -> String {
        let w = app.config.carousel.card_width as usize;
        let inner = w.saturating_sub(2);
        let card = &app.team[index];
        let center = |s: &str| {
            let len = s.chars().count().min(inner);
            let left = (inner - len) / 2;
            let text: String = s.chars().take(len).collect();
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(inner - len - left))
        };
        match row {
            0 => format!("┌{}┐", "─".repeat(inner)),
            1 => format!("│{}│", center(card.name)),
            2 => format!("│{}│", center(card.role)),
            3 => format!("│{}│", " ".repeat(inner)),
            _ => format!("└{}┘", "─".repeat(inner)),
        }
    }

    fn contact_lines(app: &App, now: Instant) -> Vec<Line<'static>> {
        let progress = app.reveal.reveal_progress(app.header_reveals[4], now);
        let fg = AmberNight::reveal_fg(progress);

        let (label, color) = match app.form {
            FormState::Idle => ("[ Send message ]", AmberNight::GOLD),
            FormState::Submitting => ("[ Sending… ]", AmberNight::GREY),
            FormState::Sent { .. } => ("[ ✓ Message sent ]", AmberNight::GREEN),
        };
        let mut button = Style::default().fg(color).add_modifier(Modifier::BOLD);
        if app.focus == Focus::Form {
            button = button.add_modifier(Modifier::REVERSED);
        }

        vec![
            Self::header_line("Contact", progress),
            Line::default(),
            Self::text_line("Name     ______________________", fg),
            Self::text_line("Email    ______________________", fg),
            Self::text_line("Message  ______________________", fg),
            Line::default(),
            Line::from(vec![Self::margin(), Span::styled(label, button)]),
            Line::default(),
            Self::text_line(
                "Nothing is transmitted: submission is a local simulation.",
                AmberNight::GREY,
            ),
        ]
    }

    /// Write the carousel hit areas for this frame, in screen coordinates
    fn update_hit_areas(app: &mut App, area: Rect, scroll: u16) {
        let team_top = app.sections[3].top;
        let track_width = area.width.saturating_sub(2 * MARGIN);

        let screen_row = |page_row: u16| -> Option<u16> {
            if page_row >= scroll && page_row < scroll + area.height {
                Some(area.y + (page_row - scroll))
            } else {
                None
            }
        };

        app.carousel_track_area = None;
        app.carousel_prev_area = None;
        app.carousel_next_area = None;
        app.carousel_dots_area = None;
        app.carousel_area = None;

        if app.carousel.disabled() {
            return;
        }

        // Track rows (clipped to the visible window)
        let first = team_top + TRACK_TOP;
        let visible_rows: Vec<u16> = (first..first + CARD_ROWS)
            .filter_map(screen_row)
            .collect();
        if let (Some(&top), Some(&bottom)) = (visible_rows.first(), visible_rows.last()) {
            let height = bottom - top + 1;
            app.carousel_track_area =
                Some(Rect::new(area.x + MARGIN, top, track_width, height));
            app.carousel_prev_area = Some(Rect::new(area.x, top, MARGIN, height));
            app.carousel_next_area =
                Some(Rect::new(area.x + MARGIN + track_width, top, MARGIN, height));
        }

        if let Some(row) = screen_row(team_top + DOTS_ROW) {
            let dots_width = (app.carousel.len() * 2 - 1) as u16;
            let pad = track_width.saturating_sub(dots_width) / 2;
            app.carousel_dots_area =
                Some(Rect::new(area.x + MARGIN + pad, row, dots_width, 1));
        }

        // The hover region covers the whole visible team section
        let section_rows: Vec<u16> = (team_top..team_top + app.sections[3].height)
            .filter_map(screen_row)
            .collect();
        if let (Some(&top), Some(&bottom)) = (section_rows.first(), section_rows.last()) {
            app.carousel_area = Some(Rect::new(area.x, top, area.width, bottom - top + 1));
        }
    }
}
