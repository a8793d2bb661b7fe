use super::types::{FullscreenOptions, LockMethod, OrientationLock};
use crate::common::Toaster;
use futures::future::LocalBoxFuture;

// Browser-side operations resolve once, to success or an error text
pub type Pending = LocalBoxFuture<'static, Result<(), String>>;

/// `screen.orientation` and the vendor-prefixed `screen.lockOrientation` family.
///
/// Every call that can throw on the JavaScript side returns its error text
/// instead, so the controller decides how to surface it.
pub trait OrientationApi {
    fn has_modern_lock(&self) -> Result<bool, String>;
    fn has_legacy_lock(&self) -> Result<bool, String>;
    fn modern_lock(&self, orientation: OrientationLock) -> Result<Pending, String>;
    /// Truthy return from the legacy function maps to `true`, anything else to `false`.
    fn legacy_lock(&self, orientation: OrientationLock) -> Result<bool, String>;
    fn current_type(&self) -> Option<String>;
    fn on_change(&self, listener: Box<dyn FnMut()>) -> Result<(), String>;
}

/// Document-level Fullscreen API.
pub trait FullscreenApi {
    fn is_active(&self) -> bool;
    fn request(&self, options: &FullscreenOptions) -> Result<Pending, String>;
    fn exit(&self) -> Result<Pending, String>;
    fn enabled(&self) -> bool;
}

pub trait Notifier {
    fn notify(&self, toast: &Toaster);
    fn close_all(&self);
}

pub trait StatusDisplay {
    fn show_orientation(&self, text: &str);
    fn show_fullscreen_support(&self, text: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockCapability {
    Unsupported,
    Legacy,
    Modern,
}

impl LockCapability {
    /// Checks for both lock APIs once. A check that throws counts as absent.
    pub fn detect<S: OrientationApi + ?Sized>(screen: &S) -> Self {
        let modern = screen.has_modern_lock().unwrap_or_else(|err| {
            tracing::debug!("Checking screen.orientation.lock failed: {}", err);
            false
        });
        if modern {
            return LockCapability::Modern;
        }

        let legacy = screen.has_legacy_lock().unwrap_or_else(|err| {
            tracing::debug!("Checking screen.lockOrientation failed: {}", err);
            false
        });
        if legacy {
            LockCapability::Legacy
        } else {
            LockCapability::Unsupported
        }
    }

    pub fn method(&self) -> Option<LockMethod> {
        match self {
            LockCapability::Unsupported => None,
            LockCapability::Legacy => Some(LockMethod::Legacy),
            LockCapability::Modern => Some(LockMethod::Modern),
        }
    }
}
