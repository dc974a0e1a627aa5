use gloo::events::EventListener;
use web_sys::MediaQueryList;
use yew::prelude::*;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Custom hook tracking the user's reduced-motion preference
#[hook]
pub fn use_reduced_motion() -> bool {
    let reduced = use_state(detect_reduced_motion);

    // Effect: Follow preference changes while mounted
    {
        let reduced = reduced.clone();
        use_effect_with((), move |_| {
            let listener = setup_media_query_listener(reduced.setter());
            move || drop(listener)
        });
    }

    *reduced
}

fn reduced_motion_query() -> Option<MediaQueryList> {
    web_sys::window().and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
}

/// Detect whether the system asks for reduced motion
fn detect_reduced_motion() -> bool {
    match reduced_motion_query() {
        Some(mq) => mq.matches(),
        None => {
            gloo::console::warn!("matchMedia unavailable, assuming full motion");
            false
        }
    }
}

/// Setup MediaQueryList event listener for preference changes
fn setup_media_query_listener(setter: UseStateSetter<bool>) -> Option<EventListener> {
    reduced_motion_query().map(|mq| {
        let query = mq.clone();
        EventListener::new(&mq, "change", move |_event| {
            setter.set(query.matches());
        })
    })
}
