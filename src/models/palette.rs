use serde::{Deserialize, Serialize};

use super::error::StyleError;
use super::theme::ThemeMode;

/// Color tokens supplied by the host's styling system.
///
/// Every field is a CSS color string. Missing fields fall back to the
/// default tokens when deserializing, so a host only has to override
/// the shades it cares about.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub track_light: String,
    pub track_dark: String,
    pub knob: String,
    pub sun: String,
    pub moon: String,
    pub focus_ring: String,
    /// Gap between the control and its focus ring, per theme
    pub ring_offset_light: String,
    pub ring_offset_dark: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            track_light: "#cbd5e1".to_string(),
            track_dark: "#475569".to_string(),
            knob: "#ffffff".to_string(),
            sun: "#eab308".to_string(),
            moon: "#93c5fd".to_string(),
            focus_ring: "#3b82f6".to_string(),
            ring_offset_light: "#ffffff".to_string(),
            ring_offset_dark: "#1e293b".to_string(),
        }
    }
}

impl Palette {
    /// Parses and validates a palette from JSON
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        let palette: Self = serde_json::from_str(json)?;
        palette.validate()?;
        Ok(palette)
    }

    /// Rejects blank tokens, reporting the first offending field
    pub fn validate(&self) -> Result<(), StyleError> {
        self.tokens()
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map_or(Ok(()), |(name, _)| Err(StyleError::EmptyToken(name)))
    }

    /// Track background for the given mode
    pub fn track(&self, mode: ThemeMode) -> &str {
        match mode {
            ThemeMode::Light => &self.track_light,
            ThemeMode::Dark => &self.track_dark,
        }
    }

    /// Focus ring offset for the given mode
    pub fn ring_offset(&self, mode: ThemeMode) -> &str {
        match mode {
            ThemeMode::Light => &self.ring_offset_light,
            ThemeMode::Dark => &self.ring_offset_dark,
        }
    }

    fn tokens(&self) -> [(&'static str, &str); 8] {
        [
            ("track_light", self.track_light.as_str()),
            ("track_dark", self.track_dark.as_str()),
            ("knob", self.knob.as_str()),
            ("sun", self.sun.as_str()),
            ("moon", self.moon.as_str()),
            ("focus_ring", self.focus_ring.as_str()),
            ("ring_offset_light", self.ring_offset_light.as_str()),
            ("ring_offset_dark", self.ring_offset_dark.as_str()),
        ]
    }
}
