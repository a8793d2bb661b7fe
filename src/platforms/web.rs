// Browser implementations backed by web-sys and the global UIkit object
use crate::common::{
    Toaster, FULLSCREEN_SUPPORT_ELEMENT_ID, ORIENTATION_ELEMENT_ID, UIKIT_READY_EVENT,
};
use crate::controller::{
    FullscreenApi, FullscreenOptions, Notifier, OrientationApi, OrientationLock, Pending,
    ReadyGate, StatusDisplay,
};
use futures::FutureExt;
use gloo_utils::format::JsValueSerdeExt;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, HtmlInputElement};

// Vendor names of the pre-standard lock function, in probing order
const LEGACY_LOCK_FUNCTIONS: [&str; 3] =
    ["lockOrientation", "mozLockOrientation", "msLockOrientation"];

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = UIkit, js_name = notification)]
    fn uikit_notification(message: &str, options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["UIkit", "notification"], js_name = closeAll)]
    fn uikit_close_all() -> Result<JsValue, JsValue>;

    // Promise-returning signatures that web-sys does not expose
    type FullscreenElement;

    #[wasm_bindgen(method, catch, js_name = requestFullscreen)]
    fn request_fullscreen(this: &FullscreenElement, options: &JsValue) -> Result<JsValue, JsValue>;

    type FullscreenDocument;

    #[wasm_bindgen(method, catch, js_name = exitFullscreen)]
    fn exit_fullscreen(this: &FullscreenDocument) -> Result<JsValue, JsValue>;
}

/// Renders a thrown or rejected value the way `${error}` would.
pub fn js_error_text(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(object) = value.dyn_ref::<js_sys::Object>() {
        return String::from(object.to_string());
    }
    format!("{:?}", value)
}

// Await a call's return value; non-promise values count as already settled
fn into_pending(value: JsValue) -> Pending {
    let promise = value
        .dyn_into::<Promise>()
        .unwrap_or_else(|value| Promise::resolve(&value));
    async move {
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| js_error_text(&err))
    }
    .boxed_local()
}

fn property(target: &JsValue, name: &str) -> Result<JsValue, String> {
    Reflect::get(target, &JsValue::from_str(name)).map_err(|err| js_error_text(&err))
}

fn screen() -> Result<JsValue, String> {
    let window = web_sys::window().ok_or_else(|| "No window".to_string())?;
    property(&window, "screen")
}

fn document() -> Result<Document, String> {
    let window = web_sys::window().ok_or_else(|| "No window".to_string())?;
    window.document().ok_or_else(|| "No document".to_string())
}

fn screen_orientation() -> Result<Option<JsValue>, String> {
    let orientation = property(&screen()?, "orientation")?;
    Ok(orientation.is_object().then_some(orientation))
}

fn legacy_lock_function() -> Result<Option<Function>, String> {
    let screen = screen()?;
    for name in LEGACY_LOCK_FUNCTIONS {
        if let Ok(function) = property(&screen, name)?.dyn_into::<Function>() {
            return Ok(Some(function));
        }
    }
    Ok(None)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScreen;

impl OrientationApi for BrowserScreen {
    fn has_modern_lock(&self) -> Result<bool, String> {
        match screen_orientation()? {
            Some(orientation) => Ok(property(&orientation, "lock")?.is_function()),
            None => Ok(false),
        }
    }

    fn has_legacy_lock(&self) -> Result<bool, String> {
        legacy_lock_function().map(|function| function.is_some())
    }

    fn modern_lock(&self, orientation: OrientationLock) -> Result<Pending, String> {
        let target = screen_orientation()?
            .ok_or_else(|| "screen.orientation is undefined".to_string())?;
        let lock: Function = property(&target, "lock")?
            .dyn_into()
            .map_err(|_| "screen.orientation.lock is not a function".to_string())?;

        let pending = lock
            .call1(&target, &JsValue::from_str(orientation.as_str()))
            .map_err(|err| js_error_text(&err))?;
        Ok(into_pending(pending))
    }

    fn legacy_lock(&self, orientation: OrientationLock) -> Result<bool, String> {
        let lock = legacy_lock_function()?
            .ok_or_else(|| "screen.lockOrientation is not a function".to_string())?;
        lock.call1(&screen()?, &JsValue::from_str(orientation.as_str()))
            .map(|granted| granted.is_truthy())
            .map_err(|err| js_error_text(&err))
    }

    fn current_type(&self) -> Option<String> {
        let orientation = screen_orientation().ok()??;
        property(&orientation, "type")
            .ok()?
            .as_string()
            .filter(|value| !value.is_empty())
    }

    fn on_change(&self, listener: Box<dyn FnMut()>) -> Result<(), String> {
        let target: EventTarget = screen_orientation()?
            .ok_or_else(|| "screen.orientation is undefined".to_string())?
            .dyn_into()
            .map_err(|_| "screen.orientation is not an EventTarget".to_string())?;

        let callback = Closure::wrap(listener);
        target
            .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .map_err(|err| js_error_text(&err))?;
        // The listener lives as long as the page
        callback.forget();
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDocument;

impl FullscreenApi for BrowserDocument {
    fn is_active(&self) -> bool {
        document()
            .ok()
            .and_then(|document| document.fullscreen_element())
            .is_some()
    }

    fn request(&self, options: &FullscreenOptions) -> Result<Pending, String> {
        let root = document()?
            .document_element()
            .ok_or_else(|| "No document element".to_string())?;
        let options = JsValue::from_serde(options).map_err(|err| err.to_string())?;

        let pending = root
            .unchecked_into::<FullscreenElement>()
            .request_fullscreen(&options)
            .map_err(|err| js_error_text(&err))?;
        Ok(into_pending(pending))
    }

    fn exit(&self) -> Result<Pending, String> {
        let pending = document()?
            .unchecked_into::<FullscreenDocument>()
            .exit_fullscreen()
            .map_err(|err| js_error_text(&err))?;
        Ok(into_pending(pending))
    }

    fn enabled(&self) -> bool {
        document()
            .map(|document| document.fullscreen_enabled())
            .unwrap_or(false)
    }
}

/// Toasts through `UIkit.notification`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Uikit;

impl Notifier for Uikit {
    fn notify(&self, toast: &Toaster) {
        let options = match JsValue::from_serde(&toast.options()) {
            Ok(options) => options,
            Err(err) => {
                tracing::error!("Failed to serialize toast options: {}", err);
                JsValue::UNDEFINED
            }
        };
        if let Err(err) = uikit_notification(toast.message(), &options) {
            tracing::warn!("UIkit.notification failed: {}", js_error_text(&err));
        }
    }

    fn close_all(&self) {
        if let Err(err) = uikit_close_all() {
            tracing::warn!("UIkit.notification.closeAll failed: {}", js_error_text(&err));
        }
    }
}

fn element(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

// Writes into the two status elements rendered by the status panel
#[derive(Clone, Copy, Debug, Default)]
pub struct PageStatus;

impl StatusDisplay for PageStatus {
    fn show_orientation(&self, text: &str) {
        match element(ORIENTATION_ELEMENT_ID) {
            Some(element) => match element.dyn_into::<HtmlInputElement>() {
                Ok(input) => input.set_value(text),
                Err(element) => element.set_text_content(Some(text)),
            },
            None => tracing::warn!("Element #{} not found", ORIENTATION_ELEMENT_ID),
        }
    }

    fn show_fullscreen_support(&self, text: &str) {
        match element(FULLSCREEN_SUPPORT_ELEMENT_ID) {
            Some(element) => element.set_text_content(Some(text)),
            None => tracing::warn!("Element #{} not found", FULLSCREEN_SUPPORT_ELEMENT_ID),
        }
    }
}

fn uikit_initialized() -> bool {
    property(&js_sys::global(), "UIkit")
        .ok()
        .filter(|uikit| uikit.is_truthy())
        .and_then(|uikit| property(&uikit, "_initialized").ok())
        .map(|initialized| initialized.is_truthy())
        .unwrap_or(false)
}

/// Gate that opens once UIkit is initialized, either already or on its
/// `uikit:init` event.
pub fn ready_gate() -> ReadyGate {
    let gate = ReadyGate::new(uikit_initialized());
    if gate.is_open() {
        return gate;
    }

    tracing::info!("Waiting for {} before starting", UIKIT_READY_EVENT);
    let opener = gate.clone();
    let listener = Closure::once_into_js(move || opener.open());

    let options = AddEventListenerOptions::new();
    options.set_once(true);

    let registered = document().and_then(|document| {
        document
            .add_event_listener_with_callback_and_add_event_listener_options(
                UIKIT_READY_EVENT,
                listener.unchecked_ref(),
                &options,
            )
            .map_err(|err| js_error_text(&err))
    });
    if let Err(err) = registered {
        tracing::error!("Could not listen for {}: {}", UIKIT_READY_EVENT, err);
    }

    gate
}
