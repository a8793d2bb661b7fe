use crate::controller::OrientationLock;
use crate::platforms::page_controller;
use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaLock, Icon};

// One button per lockable orientation
#[component]
pub fn OrientationControls() -> Element {
    rsx! {
        div { class: "uk-card uk-card-default uk-card-body uk-margin",
            h3 { class: "uk-card-title", "Orientation lock" }
            div { class: "orientation-buttons",
                for lock in OrientationLock::ALL {
                    button {
                        key: "{lock}",
                        class: "uk-button uk-button-default uk-margin-small-right uk-margin-small-bottom",
                        onclick: move |_| {
                            spawn(async move {
                                if let Err(err) = page_controller().lock_orientation(lock).await {
                                    tracing::debug!("Orientation stays unlocked: {}", err);
                                }
                            });
                        },
                        Icon { icon: FaLock, width: 12, height: 12, class: "uk-margin-small-right" }
                        "{lock}"
                    }
                }
            }
        }
    }
}
