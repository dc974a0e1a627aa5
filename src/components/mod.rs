pub mod glyphs;
pub mod theme_toggle;

pub use theme_toggle::{ThemeToggle, ThemeToggleProps, ToggleView, forward_activation, stylesheet};
