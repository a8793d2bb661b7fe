mod fullscreen_toggle;
pub use fullscreen_toggle::FullscreenToggle;

mod orientation_controls;
pub use orientation_controls::OrientationControls;

mod status_panel;
pub use status_panel::StatusPanel;
