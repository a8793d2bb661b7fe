use crate::components::{FullscreenToggle, OrientationControls, StatusPanel};
use crate::platforms::start_when_ready;
use dioxus::prelude::*;

#[component]
pub fn DisplayMode() -> Element {
    // Status elements exist once the first render is mounted
    use_effect(start_when_ready);

    rsx! {
        div { class: "uk-container uk-container-small uk-margin-medium-top",
            h1 { class: "uk-heading-small", "Screen orientation & fullscreen" }
            p { class: "uk-text-meta",
                "Lock the screen to an orientation, switch fullscreen on and off, and watch the current state."
            }
            OrientationControls {}
            FullscreenToggle {}
            StatusPanel {}
        }
    }
}
