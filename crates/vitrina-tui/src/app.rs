//! Page state for the showcase.
//!
//! The page is a virtual column of rows: a navbar pinned on top, the
//! scrollable body with the content sections, and a status bar. `App`
//! owns the vertical scroll animator, the section table, the carousel,
//! the reveal engine, and the cosmetic contact form, and advances all of
//! them from a single `tick`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use vitrina_core::AppConfig;

use crate::carousel::Carousel;
use crate::reveal::{ElementId, RevealEngine};
use crate::scroll::ScrollAnimator;

/// Navbar height in rows for the two treatments
pub const NAVBAR_HEIGHT: u16 = 3;
pub const NAVBAR_HEIGHT_SCROLLED: u16 = 2;

/// A content section of the page
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    /// Top row in page coordinates
    pub top: u16,
    pub height: u16,
}

/// One animated statistic
pub struct StatItem {
    pub label: &'static str,
    pub element: ElementId,
}

/// One carousel card
pub struct TeamCard {
    pub name: &'static str,
    pub role: &'static str,
}

/// Which part of the page receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Page,
    Carousel,
    Form,
}

/// Cosmetic contact-form submission flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    /// Waiting for the simulated send to complete
    Submitting,
    /// Success shown until `reset_at`
    Sent { reset_at: Instant },
}

pub struct App {
    pub config: Arc<AppConfig>,
    pub page_scroll: ScrollAnimator,
    pub sections: Vec<Section>,
    pub page_height: u16,
    /// Rows available for the body, updated every frame
    pub body_height: u16,
    pub focus: Focus,
    pub menu_open: bool,
    pub form: FormState,
    pub carousel: Carousel,
    pub team: Vec<TeamCard>,
    pub stats: Vec<StatItem>,
    pub reveal: RevealEngine,
    /// Reveal handle per section header, parallel with `sections`
    pub header_reveals: Vec<ElementId>,
    /// Reveal handle per team card
    pub card_reveals: Vec<ElementId>,
    /// Screen areas written back by the widgets each frame, used for
    /// pointer hit-testing
    pub carousel_area: Option<Rect>,
    pub carousel_track_area: Option<Rect>,
    pub carousel_dots_area: Option<Rect>,
    pub carousel_prev_area: Option<Rect>,
    pub carousel_next_area: Option<Rect>,
    hovering_carousel: bool,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

const SECTION_GAP: u16 = 2;

/// Section content heights in rows
const HERO_HEIGHT: u16 = 12;
const ABOUT_HEIGHT: u16 = 10;
const STATS_HEIGHT: u16 = 8;
const TEAM_HEIGHT: u16 = 12;
const CONTACT_HEIGHT: u16 = 11;

fn demo_team() -> Vec<TeamCard> {
    vec![
        TeamCard { name: "Elena Fuentes", role: "Managing Partner" },
        TeamCard { name: "Marco Leiva", role: "Head of Talent" },
        TeamCard { name: "Sofia Reyes", role: "Engineering Lead" },
        TeamCard { name: "Diego Aravena", role: "Client Strategy" },
        TeamCard { name: "Paula Contreras", role: "People Operations" },
    ]
}

const DEMO_STATS: &[(&str, u64)] = &[
    ("Talent placements", 1200),
    ("Partner companies", 350),
    ("Specialist teams", 45),
];

impl App {
    pub fn new(config: Arc<AppConfig>, viewport: (u16, u16), now: Instant) -> Self {
        let (width, height) = viewport;

        // Lay the sections out top to bottom
        let mut top = 0;
        let mut sections = Vec::new();
        for (id, title, h) in [
            ("home", "Home", HERO_HEIGHT),
            ("about", "About", ABOUT_HEIGHT),
            ("impact", "Impact", STATS_HEIGHT),
            ("team", "Team", TEAM_HEIGHT),
            ("contact", "Contact", CONTACT_HEIGHT),
        ] {
            sections.push(Section { id, title, top, height: h });
            top += h + SECTION_GAP;
        }
        let page_height = top.saturating_sub(SECTION_GAP);

        let mut reveal = RevealEngine::new(config.reveal.clone());
        let header_reveals = sections
            .iter()
            .map(|s| reveal.register(s.top, 2.max(s.height / 4), config.reveal.header_threshold))
            .collect();

        let stats_section = &sections[2];
        let stats = DEMO_STATS
            .iter()
            .map(|(label, target)| StatItem {
                label,
                element: reveal.register_counter(
                    stats_section.top + 2,
                    stats_section.height.saturating_sub(2),
                    config.reveal.stat_threshold,
                    Some(*target),
                ),
            })
            .collect();

        let team = demo_team();
        let team_section = &sections[3];
        let card_reveals = team
            .iter()
            .map(|_| {
                reveal.register(
                    team_section.top + 2,
                    team_section.height.saturating_sub(4),
                    config.reveal.card_threshold,
                )
            })
            .collect();

        let carousel = Carousel::new(
            team.len(),
            width.saturating_sub(4),
            config.carousel.clone(),
            config.ui.scroll.clone(),
            now,
        );

        let body_height = height.saturating_sub(NAVBAR_HEIGHT + 1);

        Self {
            page_scroll: ScrollAnimator::new(config.ui.scroll.clone()),
            config,
            sections,
            page_height,
            body_height,
            focus: Focus::Page,
            menu_open: false,
            form: FormState::Idle,
            carousel,
            team,
            stats,
            reveal,
            header_reveals,
            card_reveals,
            carousel_area: None,
            carousel_track_area: None,
            carousel_dots_area: None,
            carousel_prev_area: None,
            carousel_next_area: None,
            hovering_carousel: false,
            should_quit: false,
            status_message: None,
        }
    }

    /// Navbar switches to the compact treatment once the page has moved
    /// past the configured threshold, in both directions
    pub fn navbar_scrolled(&self) -> bool {
        self.page_scroll.offset() > self.config.ui.navbar_scroll_threshold
    }

    pub fn navbar_height(&self) -> u16 {
        if self.navbar_scrolled() {
            NAVBAR_HEIGHT_SCROLLED
        } else {
            NAVBAR_HEIGHT
        }
    }

    fn max_page_scroll(&self) -> u16 {
        self.page_height.saturating_sub(self.body_height)
    }

    /// Index of the section whose link is highlighted: the last section
    /// whose top is within the look-ahead of the current offset
    pub fn active_section(&self) -> usize {
        let lead = self.config.ui.active_section_lead;
        let position = self.page_scroll.offset().saturating_add(lead);
        let mut active = 0;
        for (idx, section) in self.sections.iter().enumerate() {
            if section.top <= position {
                active = idx;
            }
        }
        active
    }

    /// Smooth-scroll a section under the navbar, leaving the configured
    /// gap. The offset is dynamic: it follows the navbar's current height.
    pub fn jump_to_section(&mut self, index: usize, now: Instant) {
        let Some(section) = self.sections.get(index) else {
            return;
        };
        let offset = self.navbar_height() + self.config.ui.section_gap;
        let target = section.top.saturating_sub(offset);
        let max = self.max_page_scroll();
        self.page_scroll.scroll_to(target.min(max), max, now);
        self.menu_open = false;
    }

    pub fn scroll_page_by(&mut self, delta: i32) {
        self.page_scroll.scroll_by(delta, self.max_page_scroll());
    }

    pub fn jump_to_top(&mut self, now: Instant) {
        self.page_scroll.scroll_to(0, self.max_page_scroll(), now);
    }

    pub fn jump_to_bottom(&mut self, now: Instant) {
        let max = self.max_page_scroll();
        self.page_scroll.scroll_to(max, max, now);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Page => Focus::Carousel,
            Focus::Carousel => Focus::Form,
            Focus::Form => Focus::Page,
        };
    }

    /// Begin the simulated submission. Returns true when a send task
    /// should be spawned; ignored while a submission is in flight.
    pub fn submit_form(&mut self) -> bool {
        if self.form == FormState::Idle {
            self.form = FormState::Submitting;
            true
        } else {
            false
        }
    }

    /// The simulated send completed
    pub fn form_submitted(&mut self, now: Instant) {
        if self.form == FormState::Submitting {
            self.form = FormState::Sent {
                reset_at: now + Duration::from_millis(self.config.form.reset_after_ms),
            };
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Advance every animated part of the page
    pub fn tick(&mut self, now: Instant) {
        let max = self.max_page_scroll();
        let offset = self.page_scroll.update(now, max);

        self.reveal.observe(offset, self.body_height, now);
        self.reveal.tick(now);
        self.carousel.tick(now);

        if let FormState::Sent { reset_at } = self.form {
            if now >= reset_at {
                self.form = FormState::Idle;
            }
        }
    }

    /// Whether the next frame should run at the animation tick rate
    pub fn needs_update(&self) -> bool {
        self.page_scroll.needs_update()
            || self.carousel.needs_update()
            || self.reveal.needs_update()
    }

    /// Route a pointer event to the page or the carousel
    pub fn handle_mouse(&mut self, event: MouseEvent, now: Instant) {
        let at = (event.column, event.row);
        let over_carousel = self.carousel_area.map(|a| contains(a, at)).unwrap_or(false);

        match event.kind {
            MouseEventKind::Moved => self.set_carousel_hover(over_carousel, now),
            MouseEventKind::Down(MouseButton::Left) => {
                self.set_carousel_hover(over_carousel, now);
                if let Some(track) = self.carousel_track_area {
                    if contains(track, at) {
                        self.focus = Focus::Carousel;
                        self.carousel
                            .pointer_down(event.column.saturating_sub(track.x), now);
                        return;
                    }
                }
                if let Some(prev) = self.carousel_prev_area {
                    if contains(prev, at) && self.carousel.prev_enabled() {
                        self.carousel.previous(now);
                        return;
                    }
                }
                if let Some(next) = self.carousel_next_area {
                    if contains(next, at) && self.carousel.next_enabled() {
                        self.carousel.next(now);
                        return;
                    }
                }
                if let Some(dots) = self.carousel_dots_area {
                    if contains(dots, at) {
                        // Dots render as one glyph plus one space per card
                        let index = (event.column - dots.x) / 2;
                        self.carousel.navigate(index as isize, now);
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(track) = self.carousel_track_area {
                    self.carousel
                        .pointer_drag(event.column.saturating_sub(track.x), now);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.carousel.pointer_up(),
            MouseEventKind::ScrollDown => {
                if over_carousel {
                    self.carousel.wheel(self.wheel_step(), now);
                } else {
                    self.scroll_page_by(self.config.ui.scroll.scroll_lines as i32);
                }
            }
            MouseEventKind::ScrollUp => {
                if over_carousel {
                    self.carousel.wheel(-self.wheel_step(), now);
                } else {
                    self.scroll_page_by(-(self.config.ui.scroll.scroll_lines as i32));
                }
            }
            MouseEventKind::ScrollRight => {
                if over_carousel {
                    self.carousel.wheel(self.wheel_step(), now);
                }
            }
            MouseEventKind::ScrollLeft => {
                if over_carousel {
                    self.carousel.wheel(-self.wheel_step(), now);
                }
            }
            _ => {}
        }
    }

    fn wheel_step(&self) -> i32 {
        (self.config.carousel.card_width / 4).max(1) as i32
    }

    fn set_carousel_hover(&mut self, over: bool, now: Instant) {
        if over && !self.hovering_carousel {
            self.hovering_carousel = true;
            self.carousel.pointer_enter();
        } else if !over && self.hovering_carousel {
            self.hovering_carousel = false;
            self.carousel.pointer_leave(now);
        }
    }
}

fn contains(area: Rect, (col, row): (u16, u16)) -> bool {
    col >= area.x && col < area.x + area.width && row >= area.y && row < area.y + area.height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(
            Arc::new(AppConfig::default()),
            (80, 24),
            Instant::now(),
        )
    }

    #[test]
    fn test_navbar_scrolled_both_directions() {
        let mut app = app();
        let t0 = Instant::now();
        assert!(!app.navbar_scrolled());

        app.page_scroll.set_offset(10);
        assert!(app.navbar_scrolled());
        assert_eq!(app.navbar_height(), NAVBAR_HEIGHT_SCROLLED);

        app.jump_to_top(t0);
        app.tick(t0 + Duration::from_secs(1));
        assert!(!app.navbar_scrolled());
        assert_eq!(app.navbar_height(), NAVBAR_HEIGHT);
    }

    #[test]
    fn test_active_section_follows_offset() {
        let mut app = app();
        assert_eq!(app.active_section(), 0);

        let contact_top = app.sections[4].top;
        app.page_scroll.set_offset(contact_top);
        assert_eq!(app.active_section(), 4);
    }

    #[test]
    fn test_jump_to_section_uses_dynamic_offset() {
        let mut app = app();
        let t0 = Instant::now();

        // Offset captured at jump time, while the navbar is still tall
        let expected = app.sections[2].top - (app.navbar_height() + app.config.ui.section_gap);
        app.jump_to_section(2, t0);
        app.tick(t0 + Duration::from_secs(1));
        assert_eq!(app.page_scroll.offset(), expected);
    }

    #[test]
    fn test_jump_to_section_closes_menu() {
        let mut app = app();
        app.toggle_menu();
        assert!(app.menu_open);
        app.jump_to_section(1, Instant::now());
        assert!(!app.menu_open);
    }

    #[test]
    fn test_form_flow() {
        let mut app = app();
        let t0 = Instant::now();

        assert!(app.submit_form());
        assert_eq!(app.form, FormState::Submitting);
        // Double-submit while in flight is ignored
        assert!(!app.submit_form());

        app.form_submitted(t0);
        assert!(matches!(app.form, FormState::Sent { .. }));

        // Resets after the configured delay
        app.tick(t0 + Duration::from_millis(app.config.form.reset_after_ms));
        assert_eq!(app.form, FormState::Idle);
        assert!(app.submit_form());
    }

    #[test]
    fn test_stats_counters_trigger_when_scrolled_into_view() {
        let mut app = app();
        let t0 = Instant::now();

        // At the top of the page the stats are off-screen on a 24-row
        // terminal body
        app.tick(t0);
        assert_eq!(app.reveal.counter_display(app.stats[0].element), None);

        let impact_top = app.sections[2].top;
        app.page_scroll.set_offset(impact_top);
        app.tick(t0 + Duration::from_millis(10));
        app.tick(t0 + Duration::from_secs(5));
        assert_eq!(
            app.reveal.counter_display(app.stats[0].element).as_deref(),
            Some("1.200+")
        );
    }

    #[test]
    fn test_hover_transitions_drive_autoplay() {
        let mut app = app();
        let t0 = Instant::now();
        app.carousel_area = Some(Rect::new(0, 10, 60, 10));

        let inside = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 5,
            row: 12,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };
        let outside = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 5,
            row: 2,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };

        app.handle_mouse(inside, t0);
        assert!(!app.carousel.autoplay_active());
        app.handle_mouse(outside, t0);
        assert!(app.carousel.autoplay_active());
    }
}
