use ratatui::style::Color;

/// Amber-on-dark palette for the showcase page
pub struct AmberNight;

impl AmberNight {
    /// Primary background
    pub const BG0: Color = Color::Rgb(16, 16, 20);
    /// Raised surfaces (navbar scrolled, cards)
    pub const BG1: Color = Color::Rgb(28, 28, 34);
    /// Primary foreground
    pub const FG0: Color = Color::Rgb(235, 235, 230);
    /// Secondary foreground
    pub const FG1: Color = Color::Rgb(170, 170, 165);
    /// Brand accent
    pub const GOLD: Color = Color::Rgb(255, 215, 0);
    /// Success (form sent)
    pub const GREEN: Color = Color::Rgb(16, 185, 129);
    /// Muted chrome (borders, disabled affordances)
    pub const GREY: Color = Color::Rgb(90, 90, 96);
    /// Dimmed text for elements still fading in
    pub const DIM: Color = Color::Rgb(60, 60, 66);

    /// Foreground for a reveal animation at `progress` in [0, 1]
    pub fn reveal_fg(progress: f64) -> Color {
        Self::blend(Self::DIM, Self::FG0, progress)
    }

    /// Accent for a reveal animation at `progress` in [0, 1]
    pub fn reveal_accent(progress: f64) -> Color {
        Self::blend(Self::DIM, Self::GOLD, progress)
    }

    fn blend(from: Color, to: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) = (from, to) else {
            return to;
        };
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(AmberNight::reveal_fg(0.0), AmberNight::DIM);
        assert_eq!(AmberNight::reveal_fg(1.0), AmberNight::FG0);
        assert_eq!(AmberNight::reveal_accent(1.0), AmberNight::GOLD);
    }
}
