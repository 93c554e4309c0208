//! Scroll animation controller.
//!
//! One animator owns one offset (the vertical page position or the
//! horizontal track position). Callers start animations with `scroll_to`
//! or queue relative motion with `scroll_by`, then call `update` every
//! frame. Starting a new animation replaces the previous one, so the
//! latest requested target always wins.

use std::time::{Duration, Instant};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp_u16, progress};

/// In-flight animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

/// Animates a single scroll offset toward requested targets
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    /// Current offset, updated every `update` call
    offset: u16,
    /// Relative motion queued between frames, applied on the next `update`
    pending_delta: i32,
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            offset: 0,
            pending_delta: 0,
        }
    }

    /// Whether an animation is in flight
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the next frame should run at the animation tick rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    /// Current interpolated offset
    #[inline]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Final offset once any in-flight animation completes
    pub fn target(&self) -> u16 {
        self.animation.as_ref().map(|a| a.to).unwrap_or(self.offset)
    }

    /// Jump to an offset immediately, cancelling any animation
    pub fn set_offset(&mut self, offset: u16) {
        self.animation = None;
        self.pending_delta = 0;
        self.offset = offset;
    }

    /// Animate toward `target`, clamped to `max`
    pub fn scroll_to(&mut self, target: u16, max: u16, now: Instant) {
        let target = target.min(max);

        if !self.config.is_smooth() {
            self.offset = target;
            self.animation = None;
            return;
        }

        if self.offset == target {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.offset,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Queue relative motion (positive = forward). Multiple calls within
    /// one frame are batched and applied on the next `update`.
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        if !self.config.is_smooth() {
            self.offset = (self.offset as i32 + delta).clamp(0, max as i32) as u16;
            self.animation = None;
            return;
        }
        self.pending_delta += delta;
    }

    /// Advance the animation and return the current offset
    pub fn update(&mut self, now: Instant, max: u16) -> u16 {
        if self.pending_delta != 0 {
            let target = (self.target() as i32 + self.pending_delta).clamp(0, max as i32) as u16;
            self.pending_delta = 0;

            if target != self.offset {
                self.animation = Some(ActiveAnimation {
                    start: now,
                    from: self.offset,
                    to: target,
                    duration: self.config.animation_duration(),
                    easing: self.config.easing,
                });
            }
        }

        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, now, anim.duration) {
                self.offset = anim.to.min(max);
                self.animation = None;
            } else {
                let t = progress(anim.start, now, anim.duration);
                let eased = anim.easing.apply(t);
                self.offset = lerp_u16(anim.from, anim.to, eased).min(max);
            }
        }

        self.offset
    }

    /// Stop at the current offset, dropping any queued motion
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth_config() -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: 100,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_jump_when_smooth_disabled() {
        let config = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut animator = ScrollAnimator::new(config);
        animator.scroll_to(100, 200, Instant::now());
        assert_eq!(animator.offset(), 100);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut animator = ScrollAnimator::new(smooth_config());
        let t0 = Instant::now();

        animator.scroll_to(100, 200, t0);
        assert!(animator.is_animating());
        assert_eq!(animator.target(), 100);

        animator.update(t0 + Duration::from_millis(50), 200);
        assert!(animator.offset() > 0);
        assert!(animator.offset() < 100);

        animator.update(t0 + Duration::from_millis(100), 200);
        assert_eq!(animator.offset(), 100);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_scroll_by_batching() {
        let mut animator = ScrollAnimator::new(smooth_config());
        let t0 = Instant::now();

        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);

        animator.update(t0, 200);
        assert_eq!(animator.target(), 30);
    }

    #[test]
    fn test_latest_target_wins() {
        let mut animator = ScrollAnimator::new(smooth_config());
        let t0 = Instant::now();

        animator.scroll_to(100, 200, t0);
        animator.scroll_to(40, 200, t0 + Duration::from_millis(10));
        assert_eq!(animator.target(), 40);

        animator.update(t0 + Duration::from_millis(200), 200);
        assert_eq!(animator.offset(), 40);
    }

    #[test]
    fn test_target_clamped_to_max() {
        let mut animator = ScrollAnimator::new(smooth_config());
        animator.set_offset(50);
        animator.scroll_to(300, 100, Instant::now());
        assert!(animator.target() <= 100);
    }

    #[test]
    fn test_set_offset_cancels_animation() {
        let mut animator = ScrollAnimator::new(smooth_config());
        let t0 = Instant::now();
        animator.scroll_to(100, 200, t0);
        animator.set_offset(7);
        assert!(!animator.is_animating());
        assert_eq!(animator.update(t0 + Duration::from_secs(1), 200), 7);
    }
}
