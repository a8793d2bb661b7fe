#[cfg(feature = "web")]
use dioxus::prelude::*;

#[cfg(feature = "web")]
use common::{UIKIT_CSS, UIKIT_JS};
#[cfg(feature = "web")]
use views::DisplayMode;

#[cfg(feature = "web")]
mod components;
mod controller;
mod platforms;
#[cfg(feature = "web")]
mod views;

// Add the common module to the root
pub mod common;

#[cfg(feature = "web")]
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    // Print feature flags for debugging
    println!("Starting application with features:");
    println!("  web: {}", cfg!(feature = "web"));

    #[cfg(feature = "web")]
    {
        LaunchBuilder::web().launch(App);
    }

    // Without a browser, run each action once against the headless platform
    #[cfg(not(feature = "web"))]
    {
        dioxus::logger::initialize_default();

        platforms::start_when_ready();

        let page = platforms::page_controller();
        futures::executor::block_on(async {
            let _ = page
                .lock_orientation(controller::OrientationLock::Portrait)
                .await;
            let _ = page.toggle_fullscreen().await;
        });
    }
}

#[cfg(feature = "web")]
#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: UIKIT_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: UIKIT_JS }

        DisplayMode {}
    }
}
