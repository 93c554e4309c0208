pub mod config;
pub mod counter;
pub mod error;
pub mod track;

pub use config::{AppConfig, CarouselConfig, EasingType, FormConfig, GroupingStyle, RevealConfig, ScrollConfig};
pub use counter::{format_grouped, CounterAnimation};
pub use error::{Error, Result};
