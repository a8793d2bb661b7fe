use super::capability::{LockCapability, Notifier, OrientationApi};
use super::errors::DisplayError;
use super::notify::settle;
use super::types::{LockMethod, OrientationLock, Success};

/// Requests an orientation lock through the best available API and reports
/// the result as a single toast. Prior toasts are cleared first.
pub async fn lock_orientation<S, N>(
    screen: &S,
    notifier: &N,
    orientation: OrientationLock,
) -> Result<Success, DisplayError>
where
    S: OrientationApi + ?Sized,
    N: Notifier + ?Sized,
{
    notifier.close_all();

    let capability = LockCapability::detect(screen);
    tracing::info!("Locking orientation to {} ({:?})", orientation, capability);

    let outcome = match capability.method() {
        None => Err(DisplayError::LockUnsupported),
        Some(method @ LockMethod::Modern) => match screen.modern_lock(orientation) {
            Ok(pending) => pending
                .await
                .map(|()| Success::Locked(method))
                .map_err(|cause| DisplayError::LockFailed { method, cause }),
            Err(cause) => Err(DisplayError::LockFault { method, cause }),
        },
        Some(method @ LockMethod::Legacy) => match screen.legacy_lock(orientation) {
            Ok(true) => Ok(Success::Locked(method)),
            Ok(false) => Err(DisplayError::LockDenied(method)),
            Err(cause) => Err(DisplayError::LockFault { method, cause }),
        },
    };

    settle(notifier, outcome)
}
