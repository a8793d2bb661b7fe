use super::types::{FullscreenAction, LockMethod};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The capability is absent
    Unsupported,
    /// The capability refused the request
    Denied,
    /// The asynchronous operation rejected
    Failed,
    /// Probing or invoking the capability threw
    SynchronousFault,
}

// Display text is exactly what the user sees in the danger toast
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DisplayError {
    #[error("Screen orientation lock functions are not supported by this browser.")]
    LockUnsupported,

    #[error("Lock denied with {0}")]
    LockDenied(LockMethod),

    #[error("Failed to lock with {method}. {cause}")]
    LockFailed { method: LockMethod, cause: String },

    #[error("Failed to lock with {method}. {cause}")]
    LockFault { method: LockMethod, cause: String },

    #[error("Failed to {} fullscreen mode. {}", .action.verb(), .cause)]
    FullscreenFailed {
        action: FullscreenAction,
        cause: String,
    },

    #[error("Fullscreen mode not supported. {0}")]
    FullscreenUnsupported(String),
}

impl DisplayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DisplayError::LockUnsupported => ErrorKind::Unsupported,
            DisplayError::LockDenied(_) => ErrorKind::Denied,
            DisplayError::LockFailed { .. } | DisplayError::FullscreenFailed { .. } => {
                ErrorKind::Failed
            }
            DisplayError::LockFault { .. } | DisplayError::FullscreenUnsupported(_) => {
                ErrorKind::SynchronousFault
            }
        }
    }
}
