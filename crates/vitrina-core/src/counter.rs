//! Animated statistic counters.
//!
//! A counter steps from 0 toward a fixed target in equal increments on a
//! fixed tick interval, then clamps exactly to the target. The stepping is
//! pure: the caller owns the tick schedule, the counter only advances when
//! `step()` is called, which keeps the animation deterministic under test.

use crate::config::GroupingStyle;

/// One-shot counter animation from 0 to a non-negative integer target
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    current: f64,
    increment: f64,
    finished: bool,
}

impl CounterAnimation {
    /// Create a counter that reaches `target` after roughly
    /// `duration_ms / tick_ms` steps.
    pub fn new(target: u64, duration_ms: u64, tick_ms: u64) -> Self {
        let steps = if tick_ms == 0 {
            1
        } else {
            (duration_ms / tick_ms).max(1)
        };
        Self {
            target,
            current: 0.0,
            increment: target as f64 / steps as f64,
            finished: target == 0,
        }
    }

    /// Advance one tick. Returns true while the animation is still running.
    pub fn step(&mut self) -> bool {
        if self.finished {
            return false;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
        }
        !self.finished
    }

    /// Whether the counter has settled on its target
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Current displayed value (exactly the target once settled)
    pub fn value(&self) -> u64 {
        if self.finished {
            self.target
        } else {
            self.current.floor() as u64
        }
    }

    /// Final target value
    #[inline]
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Displayed text: grouped value plus suffix, e.g. `1.200+`
    pub fn display(&self, grouping: GroupingStyle, suffix: &str) -> String {
        format!("{}{}", format_grouped(self.value(), grouping), suffix)
    }
}

/// Format an integer with a thousands separator every three digits
pub fn format_grouped(value: u64, style: GroupingStyle) -> String {
    let digits = value.to_string();
    let separator = match style {
        GroupingStyle::Dot => '.',
        GroupingStyle::Comma => ',',
        GroupingStyle::None => return digits,
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0, GroupingStyle::Dot), "0");
        assert_eq!(format_grouped(999, GroupingStyle::Dot), "999");
        assert_eq!(format_grouped(1200, GroupingStyle::Dot), "1.200");
        assert_eq!(format_grouped(1200, GroupingStyle::Comma), "1,200");
        assert_eq!(format_grouped(1200, GroupingStyle::None), "1200");
        assert_eq!(format_grouped(1234567, GroupingStyle::Dot), "1.234.567");
        assert_eq!(format_grouped(100000, GroupingStyle::Dot), "100.000");
    }

    #[test]
    fn test_counter_settles_on_exact_target() {
        let mut counter = CounterAnimation::new(1200, 2000, 16);
        while counter.step() {}
        assert!(counter.is_finished());
        assert_eq!(counter.value(), 1200);
        assert_eq!(counter.display(GroupingStyle::Dot, "+"), "1.200+");
    }

    #[test]
    fn test_counter_monotonic() {
        let mut counter = CounterAnimation::new(500, 2000, 16);
        let mut prev = counter.value();
        while counter.step() {
            let v = counter.value();
            assert!(v >= prev);
            prev = v;
        }
        assert_eq!(counter.value(), 500);
    }

    #[test]
    fn test_counter_steps_after_finish_are_noops() {
        let mut counter = CounterAnimation::new(10, 100, 50);
        while counter.step() {}
        let settled = counter.value();
        assert!(!counter.step());
        assert!(!counter.step());
        assert_eq!(counter.value(), settled);
    }

    #[test]
    fn test_zero_target_is_immediately_finished() {
        let counter = CounterAnimation::new(0, 2000, 16);
        assert!(counter.is_finished());
        assert_eq!(counter.display(GroupingStyle::Dot, "+"), "0+");
    }

    #[test]
    fn test_small_target_never_overshoots() {
        let mut counter = CounterAnimation::new(3, 2000, 16);
        while counter.step() {
            assert!(counter.value() <= 3);
        }
        assert_eq!(counter.value(), 3);
    }
}
