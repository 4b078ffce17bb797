//! Page controls and timers, read straight from the browser.

use std::time::Duration;

use tv_dash::config::ControlIds;
use tv_dash::controls::parse_year;
use tv_dash::{ControlError, Controls, Scheduler, TradeDirection};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, HtmlSelectElement};

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn element_by_id<T: JsCast>(id: &str) -> Result<T, ControlError> {
    document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| ControlError::Missing(id.to_string()))
}

/// The year slider, trade selector and year label, looked up by id on every read.
#[derive(Debug, Clone)]
pub struct DomControls {
    ids: ControlIds,
}

impl DomControls {
    pub fn new(ids: ControlIds) -> Self {
        Self { ids }
    }
}

impl Controls for DomControls {
    fn year(&self) -> Result<i32, ControlError> {
        let slider: HtmlInputElement = element_by_id(&self.ids.year_slider)?;
        parse_year(&self.ids.year_slider, &slider.value())
    }

    fn trade(&self) -> Result<TradeDirection, ControlError> {
        let selector: HtmlSelectElement = element_by_id(&self.ids.trade_type)?;
        selector.value().parse()
    }

    fn show_year(&self, year: i32) {
        match document().and_then(|doc| doc.get_element_by_id(&self.ids.year_label)) {
            Some(label) => label.set_text_content(Some(&year.to_string())),
            None => log::warn!("Year label #{} not found", self.ids.year_label),
        }
    }
}

/// A pending `setTimeout`. Owns the callback; dropping the handle frees it.
pub struct TimerHandle {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

/// `window.setTimeout` / `clearTimeout`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Option<TimerHandle>;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Option<TimerHandle> {
        let callback = Closure::once(move || task());
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let id = web_sys::window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            )
            .ok()
        });
        match id {
            Some(id) => Some(TimerHandle {
                id,
                _callback: callback,
            }),
            None => {
                log::warn!("Could not schedule timer");
                None
            }
        }
    }

    fn cancel(&self, handle: Option<TimerHandle>) {
        let Some(handle) = handle else {
            return;
        };
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(handle.id);
        }
    }
}
