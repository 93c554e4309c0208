use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub form: FormConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
            carousel: CarouselConfig::default(),
            reveal: RevealConfig::default(),
            form: FormConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while the page is idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Number of rows the page must scroll before the navbar switches
    /// to its compact "scrolled" treatment
    #[serde(default = "default_navbar_scroll_threshold")]
    pub navbar_scroll_threshold: u16,
    /// Extra gap (rows) left between the navbar and a section after a jump
    #[serde(default = "default_section_gap")]
    pub section_gap: u16,
    /// Look-ahead (rows) used when deciding which section link is active
    #[serde(default = "default_active_lead")]
    pub active_section_lead: u16,
    /// Smooth scrolling configuration
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            navbar_scroll_threshold: default_navbar_scroll_threshold(),
            section_gap: default_section_gap(),
            active_section_lead: default_active_lead(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Easing curve applied to smooth scroll animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// No interpolation, jump at the end
    None,
    Linear,
    Cubic,
    Quintic,
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable smooth scrolling animations
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing function
    #[serde(default = "default_easing")]
    pub easing: EasingType,
    /// Rows moved per wheel/key scroll step
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Frame rate while an animation is in flight
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: default_easing(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Auto-advance interval in milliseconds (0 = autoplay disabled)
    #[serde(default = "default_autoplay_interval")]
    pub autoplay_interval_ms: u64,
    /// Wrap to the first card after auto-advancing past the last one
    #[serde(default = "default_true")]
    pub autoplay_wrap: bool,
    /// Multiplier applied to pointer movement while dragging the track
    #[serde(default = "default_drag_gain")]
    pub drag_gain: f64,
    /// Quiet period (ms) after a manual scroll before the current card
    /// index is reconciled against the track position
    #[serde(default = "default_settle_delay")]
    pub settle_delay_ms: u64,
    /// Card width in columns
    #[serde(default = "default_card_width")]
    pub card_width: u16,
    /// Gap between cards in columns
    #[serde(default = "default_card_gap")]
    pub card_gap: u16,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: default_autoplay_interval(),
            autoplay_wrap: default_true(),
            drag_gain: default_drag_gain(),
            settle_delay_ms: default_settle_delay(),
            card_width: default_card_width(),
            card_gap: default_card_gap(),
        }
    }
}

/// Thousands-grouping convention for animated counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingStyle {
    /// `1.200` (es-CL style)
    Dot,
    /// `1,200`
    Comma,
    /// `1200`
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Visible fraction required to reveal a card
    #[serde(default = "default_card_threshold")]
    pub card_threshold: f64,
    /// Visible fraction required to start a stat counter
    #[serde(default = "default_stat_threshold")]
    pub stat_threshold: f64,
    /// Visible fraction required to reveal a section header
    #[serde(default = "default_header_threshold")]
    pub header_threshold: f64,
    /// Fade-in duration for revealed elements in milliseconds
    #[serde(default = "default_reveal_duration")]
    pub reveal_duration_ms: u64,
    /// Total duration of a counter animation in milliseconds
    #[serde(default = "default_counter_duration")]
    pub counter_duration_ms: u64,
    /// Counter step interval in milliseconds
    #[serde(default = "default_counter_tick")]
    pub counter_tick_ms: u64,
    /// Thousands grouping applied to displayed counter values
    #[serde(default = "default_grouping")]
    pub grouping: GroupingStyle,
    /// Suffix appended to a settled counter
    #[serde(default = "default_counter_suffix")]
    pub counter_suffix: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            card_threshold: default_card_threshold(),
            stat_threshold: default_stat_threshold(),
            header_threshold: default_header_threshold(),
            reveal_duration_ms: default_reveal_duration(),
            counter_duration_ms: default_counter_duration(),
            counter_tick_ms: default_counter_tick(),
            grouping: default_grouping(),
            counter_suffix: default_counter_suffix(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Simulated submit latency in milliseconds
    #[serde(default = "default_submit_latency")]
    pub submit_latency_ms: u64,
    /// Delay before the form resets after a successful "send"
    #[serde(default = "default_reset_after")]
    pub reset_after_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_latency_ms: default_submit_latency(),
            reset_after_ms: default_reset_after(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            tracing::debug!("no config file at {}, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/vitrina/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("vitrina")
            .join("config.toml")
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_navbar_scroll_threshold() -> u16 {
    3
}

fn default_section_gap() -> u16 {
    1
}

fn default_active_lead() -> u16 {
    10
}

fn default_true() -> bool {
    true
}

fn default_animation_duration() -> u64 {
    150
}

fn default_easing() -> EasingType {
    EasingType::Cubic
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u16 {
    60
}

fn default_autoplay_interval() -> u64 {
    5000
}

fn default_drag_gain() -> f64 {
    2.0
}

fn default_settle_delay() -> u64 {
    150
}

fn default_card_width() -> u16 {
    28
}

fn default_card_gap() -> u16 {
    2
}

fn default_card_threshold() -> f64 {
    0.10
}

fn default_stat_threshold() -> f64 {
    0.50
}

fn default_header_threshold() -> f64 {
    0.15
}

fn default_reveal_duration() -> u64 {
    600
}

fn default_counter_duration() -> u64 {
    2000
}

fn default_counter_tick() -> u64 {
    16
}

fn default_grouping() -> GroupingStyle {
    GroupingStyle::Dot
}

fn default_counter_suffix() -> String {
    "+".to_string()
}

fn default_submit_latency() -> u64 {
    1000
}

fn default_reset_after() -> u64 {
    3000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.carousel.autoplay_interval_ms, 5000);
        assert!(config.carousel.autoplay_wrap);
        assert_eq!(config.carousel.settle_delay_ms, 150);
        assert_eq!(config.reveal.counter_tick_ms, 16);
        assert_eq!(config.reveal.grouping, GroupingStyle::Dot);
        assert_eq!(config.reveal.counter_suffix, "+");
        assert_eq!(config.form.submit_latency_ms, 1000);
        assert_eq!(config.form.reset_after_ms, 3000);
    }

    #[test]
    fn test_partial_config_parses_with_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [carousel]
            autoplay_interval_ms = 4000
            autoplay_wrap = false
            "#,
        )
        .unwrap();
        assert_eq!(config.carousel.autoplay_interval_ms, 4000);
        assert!(!config.carousel.autoplay_wrap);
        // Untouched sections keep their defaults
        assert_eq!(config.carousel.drag_gain, 2.0);
        assert_eq!(config.reveal.counter_duration_ms, 2000);
    }

    #[test]
    fn test_scroll_config_defaults() {
        let config = ScrollConfig::default();
        assert!(config.smooth_enabled);
        assert_eq!(config.animation_duration_ms, 150);
        assert_eq!(config.easing, EasingType::Cubic);
        assert_eq!(config.scroll_lines, 1);
        assert_eq!(config.animation_fps, 60);
    }
}
