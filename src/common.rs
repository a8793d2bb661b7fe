use serde::Serialize;

// Page elements the status reporter writes into
#[cfg(feature = "web")]
pub const ORIENTATION_ELEMENT_ID: &str = "activeOrientation";
#[cfg(feature = "web")]
pub const FULLSCREEN_SUPPORT_ELEMENT_ID: &str = "fullscreen-support";

// UIkit is loaded from its CDN and announces itself with this document event
#[cfg(feature = "web")]
pub const UIKIT_CSS: &str = "https://cdn.jsdelivr.net/npm/uikit@3.21.6/dist/css/uikit.min.css";
#[cfg(feature = "web")]
pub const UIKIT_JS: &str = "https://cdn.jsdelivr.net/npm/uikit@3.21.6/dist/js/uikit.min.js";
#[cfg(feature = "web")]
pub const UIKIT_READY_EVENT: &str = "uikit:init";

pub const ORIENTATION_UNSUPPORTED: &str = "The orientation API isn't supported in this browser :(";

// Severity understood by UIkit's `{status: ...}` option
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Danger,
}

#[cfg(any(test, feature = "web"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ToastOptions {
    pub status: Status,
}

// Toast notification enum
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Toaster {
    Success(String),
    Danger(String),
}

impl Toaster {
    pub fn message(&self) -> &str {
        match self {
            Toaster::Success(message) | Toaster::Danger(message) => message,
        }
    }

    pub fn status(&self) -> Status {
        match self {
            Toaster::Success(_) => Status::Success,
            Toaster::Danger(_) => Status::Danger,
        }
    }

    #[cfg(any(test, feature = "web"))]
    pub fn options(&self) -> ToastOptions {
        ToastOptions {
            status: self.status(),
        }
    }
}

/// Text shown in the orientation element. Missing and empty reads both fall
/// back to the fixed message.
pub fn orientation_label(value: Option<&str>) -> &str {
    match value {
        Some(orientation) if !orientation.is_empty() => orientation,
        _ => ORIENTATION_UNSUPPORTED,
    }
}

pub fn fullscreen_support_label(enabled: bool) -> &'static str {
    if enabled {
        "supported"
    } else {
        "not supported"
    }
}
