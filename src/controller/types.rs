use serde::Serialize;
use std::fmt;

// Orientation values accepted by the lock APIs. Only the page buttons
// construct most of them.
#[cfg_attr(not(feature = "web"), allow(dead_code))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrientationLock {
    Any,
    Natural,
    Landscape,
    Portrait,
    PortraitPrimary,
    PortraitSecondary,
    LandscapePrimary,
    LandscapeSecondary,
}

impl OrientationLock {
    #[cfg(any(test, feature = "web"))]
    pub const ALL: [OrientationLock; 8] = [
        OrientationLock::Any,
        OrientationLock::Natural,
        OrientationLock::Landscape,
        OrientationLock::Portrait,
        OrientationLock::PortraitPrimary,
        OrientationLock::PortraitSecondary,
        OrientationLock::LandscapePrimary,
        OrientationLock::LandscapeSecondary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrientationLock::Any => "any",
            OrientationLock::Natural => "natural",
            OrientationLock::Landscape => "landscape",
            OrientationLock::Portrait => "portrait",
            OrientationLock::PortraitPrimary => "portrait-primary",
            OrientationLock::PortraitSecondary => "portrait-secondary",
            OrientationLock::LandscapePrimary => "landscape-primary",
            OrientationLock::LandscapeSecondary => "landscape-secondary",
        }
    }
}

impl fmt::Display for OrientationLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the two lock APIs carried out a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockMethod {
    Legacy,
    Modern,
}

impl fmt::Display for LockMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockMethod::Legacy => f.write_str("old method 'screen.lockOrientation'"),
            LockMethod::Modern => f.write_str("new method 'screen.orientation.lock'"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FullscreenAction {
    Enter,
    Exit,
}

impl FullscreenAction {
    pub fn verb(&self) -> &'static str {
        match self {
            FullscreenAction::Enter => "enter",
            FullscreenAction::Exit => "exit",
        }
    }

    pub fn progressive(&self) -> &'static str {
        match self {
            FullscreenAction::Enter => "Entering",
            FullscreenAction::Exit => "Exiting",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationUi {
    Hide,
}

// Dictionary passed to `Element.requestFullscreen`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FullscreenOptions {
    #[serde(rename = "navigationUI")]
    pub navigation_ui: NavigationUi,
}

impl FullscreenOptions {
    pub fn hide_navigation() -> Self {
        Self {
            navigation_ui: NavigationUi::Hide,
        }
    }
}

/// Successful outcome of a controller action, rendered as the toast text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Success {
    Locked(LockMethod),
    Fullscreen(FullscreenAction),
}

impl fmt::Display for Success {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Success::Locked(method) => write!(f, "Lock authorized with {}", method),
            Success::Fullscreen(FullscreenAction::Enter) => f.write_str("Entered fullscreen mode"),
            Success::Fullscreen(FullscreenAction::Exit) => f.write_str("Exited fullscreen mode"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerState {
    Unregistered,
    Registered,
}

// What the status reporter rendered when it started
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusReport {
    pub orientation: String,
    pub fullscreen_supported: bool,
    pub listener: ListenerState,
}
