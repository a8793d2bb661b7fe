// Display mode controller: orientation lock, fullscreen toggle, status display

pub mod capability;
pub use capability::*;

pub mod errors;
pub use errors::*;

pub mod types;
pub use types::*;

mod fullscreen;
mod notify;
mod orientation;
mod ready;
mod status;

pub use fullscreen::toggle_fullscreen;
pub use orientation::lock_orientation;
pub use ready::ReadyGate;
pub use status::start_status;

#[cfg(test)]
pub(crate) mod testing;

/// Binds the three page actions to one set of browser collaborators.
#[derive(Clone, Debug, Default)]
pub struct DisplayModeController<S, F, N> {
    screen: S,
    document: F,
    notifier: N,
}

impl<S, F, N> DisplayModeController<S, F, N>
where
    S: OrientationApi + Clone + 'static,
    F: FullscreenApi,
    N: Notifier,
{
    pub fn new(screen: S, document: F, notifier: N) -> Self {
        Self {
            screen,
            document,
            notifier,
        }
    }

    pub async fn lock_orientation(
        &self,
        orientation: OrientationLock,
    ) -> Result<Success, DisplayError> {
        lock_orientation(&self.screen, &self.notifier, orientation).await
    }

    pub async fn toggle_fullscreen(&self) -> Result<Success, DisplayError> {
        toggle_fullscreen(&self.document, &self.notifier).await
    }

    pub fn start_status<D>(&self, display: &D) -> StatusReport
    where
        D: StatusDisplay + Clone + 'static,
    {
        start_status(&self.screen, &self.document, display)
    }
}
