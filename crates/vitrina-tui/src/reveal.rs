//! Visibility trigger engine.
//!
//! Watches registered page elements and fires a one-shot reveal (fade-in)
//! the first time enough of an element is inside the viewport. Elements
//! registered with a numeric target additionally run a counter animation,
//! armed exactly once: the transition to `Revealed` happens before the
//! counter starts, so repeated visibility events can never restart it.

use std::time::{Duration, Instant};

use vitrina_core::{CounterAnimation, RevealConfig};

use crate::scroll::easing::EasingTypeExt;
use crate::scroll::timing::progress;
use vitrina_core::EasingType;

/// Handle to a registered element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementId(usize);

#[derive(Debug, Clone)]
enum RevealState {
    Pending,
    Revealed { started: Instant },
}

#[derive(Debug)]
struct Trackable {
    /// Top row of the element in page coordinates
    top: u16,
    height: u16,
    /// Visible fraction required to trigger the reveal
    threshold: f64,
    state: RevealState,
    counter: Option<CounterAnimation>,
    /// Next counter step; None until revealed and after completion
    counter_due: Option<Instant>,
}

pub struct RevealEngine {
    elements: Vec<Trackable>,
    config: RevealConfig,
}

/// Fraction of an element currently inside the viewport
pub fn visible_fraction(top: u16, height: u16, scroll: u16, viewport_height: u16) -> f64 {
    if height == 0 {
        return 0.0;
    }
    let elem_top = top as i64;
    let elem_bottom = elem_top + height as i64;
    let view_top = scroll as i64;
    let view_bottom = view_top + viewport_height as i64;

    let overlap = elem_bottom.min(view_bottom) - elem_top.max(view_top);
    if overlap <= 0 {
        return 0.0;
    }
    overlap as f64 / height as f64
}

impl RevealEngine {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            elements: Vec::new(),
            config,
        }
    }

    /// Register an element for reveal only
    pub fn register(&mut self, top: u16, height: u16, threshold: f64) -> ElementId {
        self.register_counter(top, height, threshold, None)
    }

    /// Register an element with an optional counter target. A missing
    /// target means the element is revealed but never counted.
    pub fn register_counter(
        &mut self,
        top: u16,
        height: u16,
        threshold: f64,
        target: Option<u64>,
    ) -> ElementId {
        let counter = target.map(|t| {
            CounterAnimation::new(t, self.config.counter_duration_ms, self.config.counter_tick_ms)
        });
        self.elements.push(Trackable {
            top,
            height,
            threshold,
            state: RevealState::Pending,
            counter,
            counter_due: None,
        });
        ElementId(self.elements.len() - 1)
    }

    /// Evaluate visibility against the current page offset and trigger
    /// pending reveals. Already-revealed elements are untouched.
    pub fn observe(&mut self, scroll: u16, viewport_height: u16, now: Instant) {
        for elem in &mut self.elements {
            if !matches!(elem.state, RevealState::Pending) {
                continue;
            }
            let fraction = visible_fraction(elem.top, elem.height, scroll, viewport_height);
            if fraction >= elem.threshold {
                // One-shot marker set before the counter is armed
                elem.state = RevealState::Revealed { started: now };
                if elem.counter.is_some() {
                    elem.counter_due = Some(now);
                }
            }
        }
    }

    /// Step armed counters on their fixed tick interval
    pub fn tick(&mut self, now: Instant) {
        let tick = Duration::from_millis(self.config.counter_tick_ms.max(1));
        for elem in &mut self.elements {
            let Some(counter) = elem.counter.as_mut() else {
                continue;
            };
            while let Some(due) = elem.counter_due {
                if now < due {
                    break;
                }
                if counter.step() {
                    elem.counter_due = Some(due + tick);
                } else {
                    elem.counter_due = None;
                }
            }
        }
    }

    pub fn is_revealed(&self, id: ElementId) -> bool {
        matches!(
            self.elements.get(id.0).map(|e| &e.state),
            Some(RevealState::Revealed { .. })
        )
    }

    /// Eased fade-in progress in [0, 1]; 0 while pending
    pub fn reveal_progress(&self, id: ElementId, now: Instant) -> f64 {
        match self.elements.get(id.0).map(|e| &e.state) {
            Some(RevealState::Revealed { started }) => {
                let duration = Duration::from_millis(self.config.reveal_duration_ms);
                EasingType::Cubic.apply(progress(*started, now, duration))
            }
            _ => 0.0,
        }
    }

    /// Displayed counter text, None for elements without a counter or
    /// while still pending
    pub fn counter_display(&self, id: ElementId) -> Option<String> {
        let elem = self.elements.get(id.0)?;
        if matches!(elem.state, RevealState::Pending) {
            return None;
        }
        let counter = elem.counter.as_ref()?;
        Some(counter.display(self.config.grouping, &self.config.counter_suffix))
    }

    /// Whether any counter is still animating (drives the fast tick rate)
    pub fn needs_update(&self) -> bool {
        self.elements.iter().any(|e| e.counter_due.is_some())
    }
}
