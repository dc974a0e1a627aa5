use crate::config::Config;
use crate::models::error::StyleError;

use super::spring::Spring;

/// How a visual property moves between its two end states
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    Spring(Spring),
    Tween { duration_ms: u32, easing: String },
    /// Jump straight to the end state
    Instant,
}

impl Transition {
    pub fn tween(duration_ms: u32, easing: &str) -> Result<Self, StyleError> {
        if duration_ms == 0 {
            return Err(StyleError::InvalidTransition(
                "tween duration must be non-zero".to_string(),
            ));
        }
        if easing.trim().is_empty() {
            return Err(StyleError::InvalidTransition(
                "tween easing must not be empty".to_string(),
            ));
        }

        Ok(Self::Tween {
            duration_ms,
            easing: easing.to_string(),
        })
    }

    /// The color/opacity fade used across the control
    pub fn default_tween() -> Self {
        Self::Tween {
            duration_ms: Config::TWEEN_DURATION_MS,
            easing: Config::TWEEN_EASING.to_string(),
        }
    }

    /// Collapses to [`Transition::Instant`] when motion is reduced
    pub fn unless_reduced(self, reduced_motion: bool) -> Self {
        if reduced_motion { Self::Instant } else { self }
    }

    pub const fn is_instant(&self) -> bool {
        matches!(self, Self::Instant)
    }

    /// CSS `transition` value animating each of `properties`
    pub fn css(&self, properties: &[&str]) -> String {
        let (duration_ms, easing) = match self {
            Self::Instant => return "none".to_string(),
            Self::Spring(spring) => spring.css_timing(Config::SPRING_SAMPLES),
            Self::Tween {
                duration_ms,
                easing,
            } => (*duration_ms, easing.clone()),
        };

        if properties.is_empty() {
            return "none".to_string();
        }

        properties
            .iter()
            .map(|property| format!("{property} {duration_ms}ms {easing}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Joins per-property transitions into one `transition` value, skipping instant ones
pub fn transition_list(parts: &[(&Transition, &str)]) -> String {
    let declarations: Vec<String> = parts
        .iter()
        .filter(|(transition, _)| !transition.is_instant())
        .map(|(transition, property)| transition.css(&[*property]))
        .collect();

    if declarations.is_empty() {
        "none".to_string()
    } else {
        declarations.join(", ")
    }
}
