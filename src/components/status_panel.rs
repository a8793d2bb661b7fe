use crate::common::{FULLSCREEN_SUPPORT_ELEMENT_ID, ORIENTATION_ELEMENT_ID};
use dioxus::prelude::*;

// The status reporter writes into these elements directly, so they carry no
// reactive content of their own
#[component]
pub fn StatusPanel() -> Element {
    rsx! {
        div { class: "uk-card uk-card-default uk-card-body uk-margin",
            h3 { class: "uk-card-title", "Status" }
            div { class: "uk-margin",
                label { class: "uk-form-label", "Active orientation" }
                div { class: "uk-form-controls",
                    input {
                        id: ORIENTATION_ELEMENT_ID,
                        class: "uk-input",
                        r#type: "text",
                        readonly: true,
                    }
                }
            }
            p { class: "status-line",
                "Fullscreen API: "
                span { id: FULLSCREEN_SUPPORT_ELEMENT_ID, class: "uk-text-bold" }
            }
        }
    }
}
