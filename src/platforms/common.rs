// Headless fallbacks for builds without the `web` feature

use crate::common::{Status, Toaster};
use crate::controller::{
    FullscreenApi, FullscreenOptions, Notifier, OrientationApi, OrientationLock, Pending,
    ReadyGate, StatusDisplay,
};

// No screen object exists outside a browser, so every capability is absent
#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl OrientationApi for Headless {
    fn has_modern_lock(&self) -> Result<bool, String> {
        Ok(false)
    }

    fn has_legacy_lock(&self) -> Result<bool, String> {
        Ok(false)
    }

    fn modern_lock(&self, _orientation: OrientationLock) -> Result<Pending, String> {
        Err("screen.orientation is not available outside a browser".to_string())
    }

    fn legacy_lock(&self, _orientation: OrientationLock) -> Result<bool, String> {
        Err("screen.lockOrientation is not available outside a browser".to_string())
    }

    fn current_type(&self) -> Option<String> {
        None
    }

    fn on_change(&self, _listener: Box<dyn FnMut()>) -> Result<(), String> {
        Err("screen.orientation is not available outside a browser".to_string())
    }
}

impl FullscreenApi for Headless {
    fn is_active(&self) -> bool {
        false
    }

    fn request(&self, _options: &FullscreenOptions) -> Result<Pending, String> {
        Err("requestFullscreen is not available outside a browser".to_string())
    }

    fn exit(&self) -> Result<Pending, String> {
        Err("exitFullscreen is not available outside a browser".to_string())
    }

    fn enabled(&self) -> bool {
        false
    }
}

/// Routes toasts to the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: &Toaster) {
        match toast.status() {
            Status::Success => tracing::info!("[toast] {}", toast.message()),
            Status::Danger => tracing::warn!("[toast] {}", toast.message()),
        }
    }

    fn close_all(&self) {
        tracing::debug!("[toast] close all");
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LogStatus;

impl StatusDisplay for LogStatus {
    fn show_orientation(&self, text: &str) {
        tracing::info!("Active orientation: {}", text);
    }

    fn show_fullscreen_support(&self, text: &str) {
        tracing::info!("Fullscreen API: {}", text);
    }
}

// There is no toast library to wait for
pub fn ready_gate() -> ReadyGate {
    ReadyGate::new(true)
}
