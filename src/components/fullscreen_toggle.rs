use crate::platforms::page_controller;
use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaExpand, Icon};

#[component]
pub fn FullscreenToggle() -> Element {
    rsx! {
        div { class: "uk-card uk-card-default uk-card-body uk-margin",
            h3 { class: "uk-card-title", "Display mode" }
            button {
                class: "uk-button uk-button-primary",
                onclick: move |_| {
                    spawn(async move {
                        if let Err(err) = page_controller().toggle_fullscreen().await {
                            tracing::debug!("Fullscreen unchanged: {}", err);
                        }
                    });
                },
                Icon { icon: FaExpand, width: 14, height: 14, class: "uk-margin-small-right" }
                "Toggle fullscreen"
            }
        }
    }
}
