use super::capability::{FullscreenApi, Notifier};
use super::errors::DisplayError;
use super::notify::settle;
use super::types::{FullscreenAction, FullscreenOptions, Success};

/// Enters fullscreen on the root element when nothing is fullscreen,
/// otherwise exits it.
pub async fn toggle_fullscreen<F, N>(document: &F, notifier: &N) -> Result<Success, DisplayError>
where
    F: FullscreenApi + ?Sized,
    N: Notifier + ?Sized,
{
    notifier.close_all();

    let action = if document.is_active() {
        FullscreenAction::Exit
    } else {
        FullscreenAction::Enter
    };
    tracing::info!("{} fullscreen mode", action.progressive());

    let pending = match action {
        FullscreenAction::Enter => document.request(&FullscreenOptions::hide_navigation()),
        FullscreenAction::Exit => document.exit(),
    };

    let outcome = match pending {
        Ok(pending) => pending
            .await
            .map(|()| Success::Fullscreen(action))
            .map_err(|cause| DisplayError::FullscreenFailed { action, cause }),
        Err(cause) => Err(DisplayError::FullscreenUnsupported(cause)),
    };

    settle(notifier, outcome)
}
