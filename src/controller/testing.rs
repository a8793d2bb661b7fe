// In-memory stand-ins for the browser collaborators
use super::capability::{FullscreenApi, Notifier, OrientationApi, Pending, StatusDisplay};
use super::types::{FullscreenOptions, LockMethod, OrientationLock};
use crate::common::Toaster;
use futures::future::{self, FutureExt};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Debug)]
pub enum ModernLock {
    Resolves,
    Rejects(String),
    Throws(String),
}

#[derive(Clone, Default)]
pub struct FakeScreen {
    legacy: Option<Result<bool, String>>,
    modern: Option<ModernLock>,
    modern_detection_fault: Option<String>,
    legacy_detection_fault: Option<String>,
    has_orientation: bool,
    orientation: Rc<RefCell<Option<String>>>,
    listeners: Rc<RefCell<Vec<Box<dyn FnMut()>>>>,
    invoked: Rc<RefCell<Vec<(LockMethod, OrientationLock)>>>,
}

impl FakeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_legacy(mut self, result: Result<bool, String>) -> Self {
        self.legacy = Some(result);
        self
    }

    pub fn with_modern(mut self, lock: ModernLock) -> Self {
        self.modern = Some(lock);
        self
    }

    // Makes the `screen.orientation.lock` check throw
    pub fn with_modern_detection_fault(mut self, cause: &str) -> Self {
        self.modern_detection_fault = Some(cause.to_string());
        self
    }

    // Makes the `screen.lockOrientation` check throw
    pub fn with_legacy_detection_fault(mut self, cause: &str) -> Self {
        self.legacy_detection_fault = Some(cause.to_string());
        self
    }

    // Exposes a `screen.orientation` object whose `type` reads as `value`
    pub fn with_orientation(mut self, value: Option<&str>) -> Self {
        self.has_orientation = true;
        *self.orientation.borrow_mut() = value.map(str::to_string);
        self
    }

    /// Changes the reported orientation and fires every registered listener.
    pub fn rotate(&self, value: &str) {
        *self.orientation.borrow_mut() = Some(value.to_string());
        for listener in self.listeners.borrow_mut().iter_mut() {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn invoked(&self) -> Vec<(LockMethod, OrientationLock)> {
        self.invoked.borrow().clone()
    }
}

impl OrientationApi for FakeScreen {
    fn has_modern_lock(&self) -> Result<bool, String> {
        if let Some(cause) = &self.modern_detection_fault {
            return Err(cause.clone());
        }
        Ok(self.modern.is_some())
    }

    fn has_legacy_lock(&self) -> Result<bool, String> {
        if let Some(cause) = &self.legacy_detection_fault {
            return Err(cause.clone());
        }
        Ok(self.legacy.is_some())
    }

    fn modern_lock(&self, orientation: OrientationLock) -> Result<Pending, String> {
        self.invoked
            .borrow_mut()
            .push((LockMethod::Modern, orientation));
        match &self.modern {
            Some(ModernLock::Resolves) => Ok(future::ready(Ok(())).boxed_local()),
            Some(ModernLock::Rejects(cause)) => Ok(future::ready(Err(cause.clone())).boxed_local()),
            Some(ModernLock::Throws(cause)) => Err(cause.clone()),
            None => Err("TypeError: screen.orientation is undefined".to_string()),
        }
    }

    fn legacy_lock(&self, orientation: OrientationLock) -> Result<bool, String> {
        self.invoked
            .borrow_mut()
            .push((LockMethod::Legacy, orientation));
        self.legacy
            .clone()
            .unwrap_or_else(|| Err("TypeError: screen.lockOrientation is not a function".to_string()))
    }

    fn current_type(&self) -> Option<String> {
        if !self.has_orientation {
            return None;
        }
        self.orientation.borrow().clone()
    }

    fn on_change(&self, listener: Box<dyn FnMut()>) -> Result<(), String> {
        if !self.has_orientation {
            return Err("TypeError: screen.orientation is undefined".to_string());
        }
        self.listeners.borrow_mut().push(listener);
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub enum Transition {
    #[default]
    Resolves,
    Rejects(String),
    Throws(String),
}

#[derive(Clone, Default)]
pub struct FakeDocument {
    enabled: bool,
    on_request: Transition,
    on_exit: Transition,
    active: Rc<Cell<bool>>,
    requests: Rc<RefCell<Vec<FullscreenOptions>>>,
    exits: Rc<Cell<usize>>,
    enabled_reads: Rc<Cell<usize>>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn supporting_fullscreen(mut self) -> Self {
        self.enabled = true;
        self
    }

    pub fn already_fullscreen(self) -> Self {
        self.active.set(true);
        self
    }

    pub fn on_request(mut self, transition: Transition) -> Self {
        self.on_request = transition;
        self
    }

    pub fn on_exit(mut self, transition: Transition) -> Self {
        self.on_exit = transition;
        self
    }

    pub fn requests(&self) -> Vec<FullscreenOptions> {
        self.requests.borrow().clone()
    }

    pub fn exits(&self) -> usize {
        self.exits.get()
    }

    pub fn enabled_reads(&self) -> usize {
        self.enabled_reads.get()
    }

    fn settle(&self, transition: &Transition, becomes_active: bool) -> Result<Pending, String> {
        match transition {
            Transition::Resolves => {
                self.active.set(becomes_active);
                Ok(future::ready(Ok(())).boxed_local())
            }
            Transition::Rejects(cause) => Ok(future::ready(Err(cause.clone())).boxed_local()),
            Transition::Throws(cause) => Err(cause.clone()),
        }
    }
}

impl FullscreenApi for FakeDocument {
    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn request(&self, options: &FullscreenOptions) -> Result<Pending, String> {
        self.requests.borrow_mut().push(*options);
        self.settle(&self.on_request, true)
    }

    fn exit(&self) -> Result<Pending, String> {
        self.exits.set(self.exits.get() + 1);
        self.settle(&self.on_exit, false)
    }

    fn enabled(&self) -> bool {
        self.enabled_reads.set(self.enabled_reads.get() + 1);
        self.enabled
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotifierEvent {
    CloseAll,
    Notify(Toaster),
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Rc<RefCell<Vec<NotifierEvent>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<NotifierEvent> {
        self.events.borrow().clone()
    }

    pub fn toasts(&self) -> Vec<Toaster> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                NotifierEvent::Notify(toast) => Some(toast.clone()),
                NotifierEvent::CloseAll => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: &Toaster) {
        self.events
            .borrow_mut()
            .push(NotifierEvent::Notify(toast.clone()));
    }

    fn close_all(&self) {
        self.events.borrow_mut().push(NotifierEvent::CloseAll);
    }
}

#[derive(Clone, Default)]
pub struct RecordingDisplay {
    orientation: Rc<RefCell<Vec<String>>>,
    fullscreen_support: Rc<RefCell<Vec<String>>>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orientation_history(&self) -> Vec<String> {
        self.orientation.borrow().clone()
    }

    pub fn shown_orientation(&self) -> Option<String> {
        self.orientation.borrow().last().cloned()
    }

    pub fn shown_fullscreen_support(&self) -> Option<String> {
        self.fullscreen_support.borrow().last().cloned()
    }
}

impl StatusDisplay for RecordingDisplay {
    fn show_orientation(&self, text: &str) {
        self.orientation.borrow_mut().push(text.to_string());
    }

    fn show_fullscreen_support(&self, text: &str) {
        self.fullscreen_support.borrow_mut().push(text.to_string());
    }
}
