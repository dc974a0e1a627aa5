use crate::motion::spring::Spring;

/// Configuration constants for the theme switch
pub struct Config;

impl Config {
    /// Accessible name announced for the control in both states
    pub const ACCESSIBLE_NAME: &'static str = "Toggle dark mode";

    /// Track geometry in pixels (44 x 24, fully rounded)
    pub const TRACK_WIDTH_PX: u32 = 44;
    pub const TRACK_HEIGHT_PX: u32 = 24;

    pub const KNOB_SIZE_PX: u32 = 16;

    /// Knob translation for the light and dark end states
    pub const KNOB_OFFSET_LIGHT_PX: u32 = 4;
    pub const KNOB_OFFSET_DARK_PX: u32 = 24;

    pub const GLYPH_SIZE_PX: u32 = 12;

    /// Distance of each glyph from its end of the track
    pub const GLYPH_INSET_PX: u32 = 4;

    /// Knob slide: fast, slightly bouncy
    pub const KNOB_SPRING: Spring = Spring::from_parts(700.0, 30.0, 1.0);

    /// Number of points sampled into the CSS `linear()` easing
    pub const SPRING_SAMPLES: usize = 32;

    /// Color and opacity fades
    pub const TWEEN_DURATION_MS: u32 = 150;
    pub const TWEEN_EASING: &'static str = "cubic-bezier(0.4, 0, 0.2, 1)";

    /// Scale applied while the control is pressed
    pub const PRESS_SCALE: f64 = 0.95;
}
