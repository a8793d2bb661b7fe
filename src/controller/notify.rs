use super::capability::Notifier;
use super::errors::DisplayError;
use super::types::Success;
use crate::common::Toaster;

impl From<&Success> for Toaster {
    fn from(success: &Success) -> Self {
        Toaster::Success(success.to_string())
    }
}

impl From<&DisplayError> for Toaster {
    fn from(error: &DisplayError) -> Self {
        Toaster::Danger(error.to_string())
    }
}

/// Surfaces an action's outcome as exactly one toast and hands it back.
pub fn settle<N: Notifier + ?Sized>(
    notifier: &N,
    outcome: Result<Success, DisplayError>,
) -> Result<Success, DisplayError> {
    let toast = match &outcome {
        Ok(success) => {
            tracing::info!("{}", success);
            Toaster::from(success)
        }
        Err(error) => {
            tracing::warn!(kind = ?error.kind(), "{}", error);
            Toaster::from(error)
        }
    };
    notifier.notify(&toast);
    outcome
}
