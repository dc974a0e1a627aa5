use yew::prelude::*;

use theme_switch::hooks::use_reduced_motion;
use theme_switch::models::palette::Palette;
use theme_switch::models::theme::ThemeMode;
use theme_switch::{ThemeToggle, stylesheet};

#[function_component(App)]
fn app() -> Html {
    let mode = use_state(ThemeMode::default);
    let reduced_motion = use_reduced_motion();
    let palette = Palette::default();

    // Effect: Apply theme to DOM
    use_effect_with(*mode, move |mode| {
        apply_theme_to_dom(*mode);
        || ()
    });

    // The host owns the theme; the toggle only reports activations
    let on_toggle = {
        let mode = mode.clone();
        Callback::from(move |()| {
            let next = mode.toggled();
            gloo::console::log!(format!("Theme switched to {}", next.as_str()));
            mode.set(next);
        })
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Theme switch"}</h1>
                <ThemeToggle
                    is_active={mode.is_dark()}
                    {on_toggle}
                    palette={palette.clone()}
                    {reduced_motion}
                />
            </header>

            <style>
                {stylesheet(&palette, reduced_motion)}
            </style>
        </div>
    }
}

/// Apply theme to DOM by setting data-theme attribute on <html>
fn apply_theme_to_dom(mode: ThemeMode) {
    if let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        if let Err(e) = html.set_attribute("data-theme", mode.as_str()) {
            gloo::console::warn!(format!("Failed to apply theme: {e:?}"));
        }
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
