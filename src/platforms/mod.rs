// Platform-specific implementations
#[cfg(not(feature = "web"))]
mod common;
#[cfg(feature = "web")]
mod web;

use crate::controller::DisplayModeController;

// Export platform-specific collaborators under one set of names
#[cfg(not(feature = "web"))]
pub use common::{
    ready_gate, Headless as PageDocument, Headless as PageScreen, LogNotifier as PageNotifier,
    LogStatus as PageStatus,
};
#[cfg(feature = "web")]
pub use web::{
    ready_gate, BrowserDocument as PageDocument, BrowserScreen as PageScreen,
    PageStatus, Uikit as PageNotifier,
};

pub type PageController = DisplayModeController<PageScreen, PageDocument, PageNotifier>;

/// Controller wired to the current platform.
pub fn page_controller() -> PageController {
    DisplayModeController::new(
        PageScreen::default(),
        PageDocument::default(),
        PageNotifier::default(),
    )
}

/// Starts the status reporter once the toast library is ready.
pub fn start_when_ready() {
    let gate = ready_gate();
    if !gate.is_open() {
        tracing::debug!("Status reporter waiting for UIkit");
    }
    gate.run(|| {
        let report = page_controller().start_status(&PageStatus);
        tracing::info!(
            "Status reporter running: orientation={}, fullscreen_supported={}, listener={:?}",
            report.orientation,
            report.fullscreen_supported,
            report.listener
        );
    });
}
