//! Carousel controller for the team section.
//!
//! One instance owns everything for one card track: the current index,
//! the autoplay deadline, the drag session, and the settle animator. All
//! navigation affordances (dots, prev/next, keyboard) go through
//! `navigate`, while user-driven scrolling (drag, wheel) moves the raw
//! offset and is reconciled back to an index after a quiet period.
//!
//! Timer discipline: the autoplay "timer" is a single `Option<Instant>`
//! deadline, so arming it overwrites any previous deadline and there is
//! never more than one outstanding tick.

use std::time::{Duration, Instant};

use vitrina_core::track::{card_offsets, clamp_index, max_scroll, nearest_index, track_width};
use vitrina_core::{CarouselConfig, ScrollConfig};

use crate::scroll::ScrollAnimator;

/// Interaction phase, derived from controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No drag, no programmatic scroll in flight
    Idle,
    /// Pointer captured, track follows the pointer
    Dragging,
    /// Programmatic smooth scroll toward a card is in flight
    Settling,
}

/// Active drag session, created on pointer-down and dropped on pointer-up
#[derive(Debug, Clone, Copy)]
struct DragSession {
    origin_col: u16,
    origin_offset: u16,
}

pub struct Carousel {
    count: usize,
    offsets: Vec<u16>,
    total_width: u16,
    viewport_width: u16,
    config: CarouselConfig,
    animator: ScrollAnimator,
    current: usize,
    /// Next autoplay advance; None while paused or disabled
    autoplay_due: Option<Instant>,
    /// Pointer is over the carousel, keep autoplay paused
    hovered: bool,
    drag: Option<DragSession>,
    /// Most recent user-driven offset change, pending reconciliation
    last_manual_scroll: Option<Instant>,
}

impl Carousel {
    pub fn new(
        count: usize,
        viewport_width: u16,
        config: CarouselConfig,
        scroll: ScrollConfig,
        now: Instant,
    ) -> Self {
        let offsets = card_offsets(count, config.card_width, config.card_gap);
        let total_width = track_width(count, config.card_width, config.card_gap);
        let mut carousel = Self {
            count,
            offsets,
            total_width,
            viewport_width,
            config,
            animator: ScrollAnimator::new(scroll),
            current: 0,
            autoplay_due: None,
            hovered: false,
            drag: None,
            last_manual_scroll: None,
        };
        if !carousel.disabled() {
            carousel.start_autoplay(now);
        }
        carousel
    }

    /// An empty card set disables the whole component
    #[inline]
    pub fn disabled(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Current track offset in columns
    #[inline]
    pub fn offset(&self) -> u16 {
        self.animator.offset()
    }

    /// Leading-edge offset of each card
    #[inline]
    pub fn card_offsets(&self) -> &[u16] {
        &self.offsets
    }

    pub fn phase(&self) -> Phase {
        if self.drag.is_some() {
            Phase::Dragging
        } else if self.animator.is_animating() {
            Phase::Settling
        } else {
            Phase::Idle
        }
    }

    pub fn prev_enabled(&self) -> bool {
        !self.disabled() && self.current > 0
    }

    pub fn next_enabled(&self) -> bool {
        !self.disabled() && self.current < self.count - 1
    }

    /// Active flag per position indicator
    pub fn dot_states(&self) -> Vec<bool> {
        (0..self.count).map(|i| i == self.current).collect()
    }

    pub fn autoplay_active(&self) -> bool {
        self.autoplay_due.is_some()
    }

    /// Update the visible track width (terminal resize)
    pub fn set_viewport_width(&mut self, width: u16) {
        self.viewport_width = width;
    }

    fn max_offset(&self) -> u16 {
        max_scroll(self.total_width, self.viewport_width)
    }

    fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.config.settle_delay_ms)
    }

    /// Navigate to card `index` (clamped), aligning its leading edge with
    /// the track's leading edge. Restarts autoplay so the next advance is
    /// a full interval away from this interaction.
    pub fn navigate(&mut self, index: isize, now: Instant) {
        if self.disabled() {
            return;
        }
        let index = clamp_index(index, self.count);
        let target = self.offsets[index].min(self.max_offset());
        self.animator.scroll_to(target, self.max_offset(), now);
        self.current = index;
        self.last_manual_scroll = None;
        if !self.hovered {
            self.start_autoplay(now);
        }
    }

    pub fn next(&mut self, now: Instant) {
        self.navigate(self.current as isize + 1, now);
    }

    pub fn previous(&mut self, now: Instant) {
        self.navigate(self.current as isize - 1, now);
    }

    /// Pointer pressed on the track at `col` (track-local column)
    pub fn pointer_down(&mut self, col: u16, now: Instant) {
        if self.disabled() {
            return;
        }
        self.animator.cancel();
        self.drag = Some(DragSession {
            origin_col: col,
            origin_offset: self.animator.offset(),
        });
        self.last_manual_scroll = Some(now);
    }

    /// Pointer moved while pressed; track follows with the drag gain
    pub fn pointer_drag(&mut self, col: u16, now: Instant) {
        let Some(drag) = self.drag else {
            return;
        };
        let walk = (col as f64 - drag.origin_col as f64) * self.config.drag_gain;
        let offset = (drag.origin_offset as f64 - walk)
            .clamp(0.0, self.max_offset() as f64)
            .round() as u16;
        self.animator.set_offset(offset);
        self.last_manual_scroll = Some(now);
    }

    /// Pointer released or left the track; index snap waits for the
    /// quiet-period reconciliation
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// Wheel/trackpad scroll over the track
    pub fn wheel(&mut self, delta: i32, now: Instant) {
        if self.disabled() {
            return;
        }
        self.animator.cancel();
        let offset =
            (self.animator.offset() as i32 + delta).clamp(0, self.max_offset() as i32) as u16;
        self.animator.set_offset(offset);
        self.last_manual_scroll = Some(now);
    }

    /// Pointer entered the carousel: pause autoplay
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        self.autoplay_due = None;
    }

    /// Pointer left the carousel: resume autoplay with a fresh interval
    pub fn pointer_leave(&mut self, now: Instant) {
        self.hovered = false;
        self.drag = None;
        if !self.disabled() {
            self.start_autoplay(now);
        }
    }

    /// Arm the autoplay deadline. Overwrites any previous deadline, so
    /// repeated enter/leave cycles can never accumulate timers.
    pub fn start_autoplay(&mut self, now: Instant) {
        self.autoplay_due = None;
        if self.config.autoplay_interval_ms > 0 {
            self.autoplay_due = Some(now + Duration::from_millis(self.config.autoplay_interval_ms));
        }
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay_due = None;
    }

    /// Advance timers and animations. Call once per frame.
    pub fn tick(&mut self, now: Instant) {
        if self.disabled() {
            return;
        }

        // Autoplay advance, wrapping past the last card
        if let Some(due) = self.autoplay_due {
            if now >= due {
                if self.current + 1 < self.count {
                    self.navigate(self.current as isize + 1, now);
                } else if self.config.autoplay_wrap {
                    self.navigate(0, now);
                } else {
                    self.stop_autoplay();
                }
            }
        }

        // Quiet-period reconciliation: once manual motion stops, adopt the
        // card nearest the track position without forcing a scroll
        if self.drag.is_none() {
            if let Some(last) = self.last_manual_scroll {
                if now.saturating_duration_since(last) >= self.settle_delay() {
                    self.last_manual_scroll = None;
                    let nearest = nearest_index(self.animator.offset(), &self.offsets);
                    if nearest != self.current {
                        tracing::debug!(from = self.current, to = nearest, "carousel settled");
                        self.current = nearest;
                    }
                }
            }
        }

        self.animator.update(now, self.max_offset());
    }

    /// Whether the next frame should run at the animation tick rate
    pub fn needs_update(&self) -> bool {
        self.animator.needs_update() || self.drag.is_some() || self.last_manual_scroll.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: u16 = 60;

    fn carousel(count: usize, now: Instant) -> Carousel {
        // stride 30 per card, instant scrolling for deterministic offsets
        let config = CarouselConfig {
            card_width: 28,
            card_gap: 2,
            ..Default::default()
        };
        let scroll = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        Carousel::new(count, VIEWPORT, config, scroll, now)
    }

    fn interval() -> Duration {
        Duration::from_millis(CarouselConfig::default().autoplay_interval_ms)
    }

    #[test]
    fn test_navigate_sets_current_and_offset() {
        let t0 = Instant::now();
        let mut c = carousel(5, t0);
        c.navigate(2, t0);
        assert_eq!(c.current(), 2);
        assert_eq!(c.offset(), 60);
    }

    #[test]
    fn test_navigate_clamps_out_of_range() {
        let t0 = Instant::now();
        let mut c = carousel(5, t0);
        c.navigate(17, t0);
        assert_eq!(c.current(), 4);
        c.navigate(-3, t0);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_prev_next_button_state() {
        let t0 = Instant::now();
        let mut c = carousel(3, t0);
        assert!(!c.prev_enabled());
        assert!(c.next_enabled());
        c.navigate(2, t0);
        assert!(c.prev_enabled());
        assert!(!c.next_enabled());
    }

    #[test]
    fn test_dot_states_mirror_current() {
        let t0 = Instant::now();
        let mut c = carousel(4, t0);
        c.navigate(1, t0);
        assert_eq!(c.dot_states(), vec![false, true, false, false]);
    }

    #[test]
    fn test_autoplay_advances_and_wraps() {
        let t0 = Instant::now();
        let mut c = carousel(5, t0);

        c.tick(t0 + interval());
        assert_eq!(c.current(), 1);

        // navigate(4) then one full interval must wrap to 0, never
        // out-of-bounds
        let t1 = t0 + interval();
        c.navigate(4, t1);
        c.tick(t1 + interval());
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_autoplay_halts_at_last_card_when_wrap_disabled() {
        let t0 = Instant::now();
        let config = CarouselConfig {
            autoplay_wrap: false,
            card_width: 28,
            card_gap: 2,
            ..Default::default()
        };
        let scroll = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut c = Carousel::new(3, VIEWPORT, config, scroll, t0);
        c.navigate(2, t0);
        c.tick(t0 + interval());
        assert_eq!(c.current(), 2);
        assert!(!c.autoplay_active());
    }

    #[test]
    fn test_navigation_restarts_autoplay_interval() {
        let t0 = Instant::now();
        let mut c = carousel(5, t0);

        // Interact just before the deadline; the advance must move out a
        // full interval from the interaction
        let t1 = t0 + interval() - Duration::from_millis(100);
        c.navigate(2, t1);
        c.tick(t0 + interval());
        assert_eq!(c.current(), 2);
        c.tick(t1 + interval());
        assert_eq!(c.current(), 3);
    }

    #[test]
    fn test_hover_pauses_and_leave_resumes_single_timer() {
        let t0 = Instant::now();
        let mut c = carousel(5, t0);

        c.pointer_enter();
        assert!(!c.autoplay_active());
        c.tick(t0 + interval() * 3);
        assert_eq!(c.current(), 0);

        // Enter immediately followed by leave: exactly one armed deadline
        c.pointer_enter();
        let t1 = t0 + interval() * 3;
        c.pointer_leave(t1);
        assert!(c.autoplay_active());
        c.tick(t1 + interval());
        assert_eq!(c.current(), 1);
        // A second advance needs a second full interval, proving a single
        // timer fired
        c.tick(t1 + interval() + Duration::from_millis(1));
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_drag_moves_track_with_gain() {
        let t0 = Instant::now();
        let mut c = carousel(5, t0);
        c.navigate(2, t0); // offset 60
        c.pointer_down(40, t0);
        assert_eq!(c.phase(), Phase::Dragging);

        // 10 columns right with gain 2 pulls the track 20 columns back
        c.pointer_drag(50, t0 + Duration::from_millis(20));
        assert_eq!(c.offset(), 40);

        // No snap while the quiet period has not elapsed
        c.pointer_up();
        assert_eq!(c.current(), 2);

        // After the quiet period the nearest card (40 -> index 1 at 30) wins
        c.tick(t0 + Duration::from_millis(20) + c.settle_delay());
        assert_eq!(c.current(), 1);
        assert_eq!(c.offset(), 40); // reconciliation never forces a scroll
    }

    #[test]
    fn test_wheel_scroll_settles_to_nearest() {
        let t0 = Instant::now();
        let mut c = carousel(5, t0);
        c.wheel(55, t0);
        assert_eq!(c.current(), 0);
        c.tick(t0 + c.settle_delay());
        assert_eq!(c.current(), 2); // 55 is nearest to offset 60
    }

    #[test]
    fn test_mid_scroll_events_defer_settling() {
        let t0 = Instant::now();
        let mut c = carousel(5, t0);
        c.wheel(30, t0);
        let t1 = t0 + Duration::from_millis(100);
        c.wheel(30, t1); // fresh motion restarts the quiet period
        c.tick(t0 + c.settle_delay());
        assert_eq!(c.current(), 0);
        c.tick(t1 + c.settle_delay());
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_empty_carousel_is_disabled() {
        let t0 = Instant::now();
        let mut c = carousel(0, t0);
        assert!(c.disabled());
        assert!(!c.autoplay_active());
        c.navigate(3, t0);
        c.tick(t0 + interval());
        assert_eq!(c.current(), 0);
        assert_eq!(c.offset(), 0);
        assert!(c.dot_states().is_empty());
    }

    #[test]
    fn test_keyboard_equivalents_clamp() {
        let t0 = Instant::now();
        let mut c = carousel(3, t0);
        c.previous(t0);
        assert_eq!(c.current(), 0);
        c.next(t0);
        c.next(t0);
        c.next(t0);
        assert_eq!(c.current(), 2);
    }
}
