use yew::prelude::*;

use super::glyphs::{MOON_PATH, SUN_PATH, VIEW_BOX};
use crate::config::Config;
use crate::models::palette::Palette;
use crate::models::theme::ThemeMode;
use crate::motion::{Transition, transition_list};

/// Visually hides text while keeping it in the accessibility tree
const SR_ONLY_STYLE: &str = "position: absolute; width: 1px; height: 1px; padding: 0; margin: -1px; overflow: hidden; clip: rect(0, 0, 0, 0); white-space: nowrap; border-width: 0;";

const KNOB_SHADOW: &str = "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1)";

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    /// Whether the dark theme is currently on
    pub is_active: bool,
    pub on_toggle: Callback<()>,
    #[prop_or_default]
    pub palette: Palette,
    #[prop_or_default]
    pub reduced_motion: bool,
}

/// Every per-state visual value of the switch, derived from props alone
#[derive(Clone, Debug, PartialEq)]
pub struct ToggleView {
    pub mode: ThemeMode,
    pub track_color: String,
    pub ring_offset_color: String,
    pub knob_color: String,
    pub knob_offset_px: u32,
    pub sun_color: String,
    pub sun_opacity: f64,
    pub moon_color: String,
    pub moon_opacity: f64,
    pub track_transition: String,
    pub knob_transition: String,
    pub glyph_transition: String,
}

impl ToggleView {
    pub fn project(is_active: bool, palette: &Palette, reduced_motion: bool) -> Self {
        let mode = ThemeMode::from_active(is_active);
        let slide = Transition::Spring(Config::KNOB_SPRING).unless_reduced(reduced_motion);
        let fade = Transition::default_tween().unless_reduced(reduced_motion);

        let (knob_offset_px, sun_opacity, moon_opacity) = match mode {
            ThemeMode::Light => (Config::KNOB_OFFSET_LIGHT_PX, 1.0, 0.0),
            ThemeMode::Dark => (Config::KNOB_OFFSET_DARK_PX, 0.0, 1.0),
        };

        Self {
            mode,
            track_color: palette.track(mode).to_string(),
            ring_offset_color: palette.ring_offset(mode).to_string(),
            knob_color: palette.knob.clone(),
            knob_offset_px,
            sun_color: palette.sun.clone(),
            sun_opacity,
            moon_color: palette.moon.clone(),
            moon_opacity,
            track_transition: fade.css(&["background-color", "transform"]),
            knob_transition: transition_list(&[
                (&slide, "transform"),
                (&fade, "background-color"),
            ]),
            glyph_transition: fade.css(&["opacity", "color"]),
        }
    }

    pub fn track_style(&self) -> String {
        format!(
            "position: relative; display: inline-flex; align-items: center; flex-shrink: 0; \
             width: {}px; height: {}px; padding: 0; border: none; border-radius: 9999px; \
             cursor: pointer; background-color: {}; transition: {}; \
             --theme-toggle-ring-offset: {};",
            Config::TRACK_WIDTH_PX,
            Config::TRACK_HEIGHT_PX,
            self.track_color,
            self.track_transition,
            self.ring_offset_color
        )
    }

    pub fn knob_style(&self) -> String {
        format!(
            "display: inline-block; width: {size}px; height: {size}px; border-radius: 9999px; \
             background-color: {}; box-shadow: {KNOB_SHADOW}; transform: translateX({}px); \
             transition: {};",
            self.knob_color,
            self.knob_offset_px,
            self.knob_transition,
            size = Config::KNOB_SIZE_PX,
        )
    }

    pub fn sun_style(&self) -> String {
        self.glyph_style("left", &self.sun_color, self.sun_opacity)
    }

    pub fn moon_style(&self) -> String {
        self.glyph_style("right", &self.moon_color, self.moon_opacity)
    }

    // Both glyphs stay mounted; only opacity changes, so toggling never shifts layout
    fn glyph_style(&self, side: &str, color: &str, opacity: f64) -> String {
        format!(
            "position: absolute; {side}: {}px; width: {size}px; height: {size}px; \
             pointer-events: none; color: {color}; opacity: {opacity}; transition: {};",
            Config::GLYPH_INSET_PX,
            self.glyph_transition,
            size = Config::GLYPH_SIZE_PX,
        )
    }
}

/// Turns any activation event into exactly one `on_toggle` emission
pub fn forward_activation<E: 'static>(on_toggle: &Callback<()>) -> Callback<E> {
    on_toggle.reform(|_: E| ())
}

/// Rules that inline styles cannot express: press feedback and the focus ring.
///
/// Hosts render this once in a `<style>` element next to their toggles. The
/// ring offset color comes from each toggle's inline `--theme-toggle-ring-offset`.
pub fn stylesheet(palette: &Palette, reduced_motion: bool) -> String {
    let press = if reduced_motion {
        String::new()
    } else {
        format!(
            ".theme-toggle:active {{ transform: scale({}); }}\n",
            Config::PRESS_SCALE
        )
    };

    format!(
        "{press}.theme-toggle:focus {{ outline: none; }}\n\
         .theme-toggle:focus-visible {{ box-shadow: 0 0 0 2px var(--theme-toggle-ring-offset), 0 0 0 4px {}; }}\n",
        palette.focus_ring
    )
}

/// Light/dark switch with a sliding knob and crossfading sun and moon.
///
/// Fully controlled: the caller owns the theme and re-renders with the new
/// `is_active` after handling `on_toggle`.
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let view = ToggleView::project(props.is_active, &props.palette, props.reduced_motion);
    let onclick = forward_activation::<MouseEvent>(&props.on_toggle);

    html! {
        <button
            type="button"
            class="theme-toggle"
            {onclick}
            aria-label={Config::ACCESSIBLE_NAME}
            style={view.track_style()}
        >
            <span class="theme-toggle-knob" style={view.knob_style()}></span>
            <span class="sr-only" style={SR_ONLY_STYLE}>{Config::ACCESSIBLE_NAME}</span>

            <svg
                class="theme-toggle-glyph theme-toggle-sun"
                style={view.sun_style()}
                fill="currentColor"
                viewBox={VIEW_BOX}
                aria-hidden="true"
            >
                <path fill-rule="evenodd" d={SUN_PATH} clip-rule="evenodd" />
            </svg>

            <svg
                class="theme-toggle-glyph theme-toggle-moon"
                style={view.moon_style()}
                fill="currentColor"
                viewBox={VIEW_BOX}
                aria-hidden="true"
            >
                <path d={MOON_PATH} />
            </svg>
        </button>
    }
}
