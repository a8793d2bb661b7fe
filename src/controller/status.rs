use super::capability::{FullscreenApi, OrientationApi, StatusDisplay};
use super::types::{ListenerState, StatusReport};
use crate::common::{fullscreen_support_label, orientation_label};

/// Renders the current orientation and fullscreen support, and keeps the
/// orientation live through a change listener for the rest of the page's life.
pub fn start_status<S, F, D>(screen: &S, document: &F, display: &D) -> StatusReport
where
    S: OrientationApi + Clone + 'static,
    F: FullscreenApi + ?Sized,
    D: StatusDisplay + Clone + 'static,
{
    tracing::info!("Started");

    let mut orientation = screen.current_type();

    let listener = {
        let screen = screen.clone();
        let display = display.clone();
        Box::new(move || {
            let current = screen.current_type();
            tracing::debug!("Orientation changed to {:?}", current);
            display.show_orientation(orientation_label(current.as_deref()));
        })
    };

    let listener_state = match screen.on_change(listener) {
        Ok(()) => ListenerState::Registered,
        Err(err) => {
            tracing::warn!("Could not watch orientation changes: {}", err);
            orientation = None;
            ListenerState::Unregistered
        }
    };

    let orientation = orientation_label(orientation.as_deref()).to_string();
    display.show_orientation(&orientation);

    let fullscreen_supported = document.enabled();
    display.show_fullscreen_support(fullscreen_support_label(fullscreen_supported));

    StatusReport {
        orientation,
        fullscreen_supported,
        listener: listener_state,
    }
}
