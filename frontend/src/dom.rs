use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::state::ScrollMetrics;

/// Reads the current scroll geometry, or `None` outside a browser window.
pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    Some(ScrollMetrics {
        scroll_y: window.scroll_y().ok()?,
        scroll_height: f64::from(root.scroll_height()),
        viewport_height: window.inner_height().ok()?.as_f64()?,
    })
}

pub fn alert(message: &str) {
    let shown = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))
        .and_then(|window| window.alert_with_message(message));
    if let Err(e) = shown {
        gloo_console::error!("Failed to show alert", e);
    }
}

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// A live intersection observer on one element. Dropping it disconnects the
/// observer and releases the JS callback.
pub struct Observation {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl Observation {
    /// Calls `on_sample(is_intersecting, ratio)` for every entry the browser
    /// delivers. When it returns `true` the observer stops watching.
    pub fn start<F>(element: &Element, threshold: f64, mut on_sample: F) -> Result<Self, JsValue>
    where
        F: FnMut(bool, f64) -> bool + 'static,
    {
        let callback: EntryCallback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if on_sample(entry.is_intersecting(), entry.intersection_ratio()) {
                        debug!("Observer done, disconnecting");
                        observer.disconnect();
                        break;
                    }
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);

        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn log_js_error(context: &str, err: &JsValue) {
    warn!("{}: {:?}", context, err);
}
