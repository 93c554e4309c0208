//! Smooth scrolling system shared by the page and the carousel track.
//!
//! The same animator drives the vertical page offset and the horizontal
//! card track: a target offset, an easing curve, and a deadline. Every
//! time-dependent entry point takes an explicit `Instant` so animations
//! are deterministic under test.
//!
//! - `easing` - pure easing functions (cubic, quintic, exponential)
//! - `timing` - progress and interpolation helpers
//! - `config` - extension methods over the core `ScrollConfig`
//! - `animation` - the animator combining the above

pub mod animation;
pub mod config;
pub mod easing;
pub mod timing;

pub use animation::ScrollAnimator;
pub use config::ScrollConfigExt;
pub use easing::EasingTypeExt;
