//! Progress and interpolation helpers for scroll animations.
//!
//! All functions take the observation time as a parameter instead of
//! reading the clock, so callers control time in tests.

use std::time::{Duration, Instant};

/// Animation progress in [0, 1] at time `now`
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Whether an animation started at `start` has run its full duration
#[inline]
pub fn is_complete(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Linear interpolation for u16 offsets (rows or columns)
#[inline]
pub fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    lerp(from as f64, to as f64, t).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0)).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_lerp_u16() {
        assert_eq!(lerp_u16(0, 100, 0.0), 0);
        assert_eq!(lerp_u16(0, 100, 0.5), 50);
        assert_eq!(lerp_u16(100, 0, 1.0), 0);
    }

    #[test]
    fn test_progress_at_deadline() {
        let start = Instant::now();
        let duration = Duration::from_millis(100);
        assert!((progress(start, start, duration)).abs() < 0.001);
        assert!((progress(start, start + duration, duration) - 1.0).abs() < 0.001);
        assert!(is_complete(start, start + duration, duration));
        assert!(!is_complete(start, start, duration));
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, start, Duration::ZERO) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_before_start_is_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        assert!((progress(start, Instant::now(), Duration::from_millis(100))).abs() < 0.001);
    }
}
