//! Typed bindings to `vegaEmbed` and the Vega `View`.
//!
//! vega, vega-lite and vega-embed are loaded by the host page as plain
//! `<script>` globals. The embedder polls for `window.vegaEmbed` before the
//! first embed, since the scripts may still be loading when the app mounts.

use std::cell::Cell;

use js_sys::{Function, Object, Promise, Reflect};
use tv_dash::{ChartEmbedder, ChartError, ChartView, EmbedOptions, SignalValue};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Poll interval while waiting for the vega-embed script.
const LIBRARY_POLL_MS: i32 = 100;
/// Give up on vega-embed after this many polls (10 seconds).
const LIBRARY_POLL_ATTEMPTS: u32 = 100;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = vegaEmbed)]
    fn vega_embed(el: &str, spec: &str, opts: &JsValue) -> Result<Promise, JsValue>;

    /// A Vega `View` instance returned by `vegaEmbed`.
    #[derive(Clone, Debug)]
    pub type View;

    #[wasm_bindgen(method, catch)]
    fn signal(this: &View, name: &str, value: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = runAsync)]
    fn run_async(this: &View) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = getState)]
    fn get_state(this: &View, options: &JsValue) -> Result<JsValue, JsValue>;
}

/// Best-effort human readable text for a thrown JS value.
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        String::from(err.message())
    } else if let Some(text) = value.as_string() {
        text
    } else {
        format!("{:?}", value)
    }
}

/// Whether the vega-embed script has defined its global.
pub fn vega_embed_loaded() -> bool {
    Reflect::get(&js_sys::global(), &JsValue::from_str("vegaEmbed"))
        .map(|f| f.is_function())
        .unwrap_or(false)
}

/// Resolve after `ms` milliseconds. Resolves immediately without a window.
pub async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window()
            .and_then(|w| {
                w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                    .ok()
            })
            .is_some();
        if !scheduled {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// Embeds specs with `vegaEmbed`.
#[derive(Default)]
pub struct VegaEmbedder {
    ready: Cell<Option<bool>>,
}

impl VegaEmbedder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for vega-embed once; later calls reuse the answer.
    async fn library_ready(&self) -> bool {
        if let Some(ready) = self.ready.get() {
            return ready;
        }
        let mut ready = vega_embed_loaded();
        let mut attempts = 0;
        while !ready && attempts < LIBRARY_POLL_ATTEMPTS {
            sleep(LIBRARY_POLL_MS).await;
            attempts += 1;
            ready = vega_embed_loaded();
        }
        if !ready {
            log::warn!(
                "vegaEmbed not available after {} ms",
                LIBRARY_POLL_MS as u32 * LIBRARY_POLL_ATTEMPTS
            );
        }
        self.ready.set(Some(ready));
        ready
    }
}

impl ChartEmbedder for VegaEmbedder {
    type View = VegaChart;

    async fn embed(
        &self,
        selector: &str,
        spec_path: &str,
        options: &EmbedOptions,
    ) -> Result<VegaChart, ChartError> {
        if !self.library_ready().await {
            return Err(ChartError::Embed("vegaEmbed is not loaded".to_string()));
        }

        let opts = serde_wasm_bindgen::to_value(options)
            .map_err(|e| ChartError::Embed(e.to_string()))?;
        let promise = vega_embed(selector, spec_path, &opts)
            .map_err(|e| ChartError::Embed(describe_js_error(&e)))?;
        let result = JsFuture::from(promise)
            .await
            .map_err(|e| ChartError::Embed(describe_js_error(&e)))?;

        let view = Reflect::get(&result, &JsValue::from_str("view"))
            .map_err(|e| ChartError::Embed(describe_js_error(&e)))?;
        if view.is_undefined() || view.is_null() {
            return Err(ChartError::Embed("vegaEmbed resolved without a view".to_string()));
        }

        Ok(VegaChart {
            container: selector.trim_start_matches('#').to_string(),
            view: view.unchecked_into(),
        })
    }
}

/// An embedded chart and the container it was embedded into.
pub struct VegaChart {
    container: String,
    view: View,
}

impl VegaChart {
    /// `getState` options selecting every signal and no datasets.
    fn signal_state_options() -> JsValue {
        let options = Object::new();
        let _ = Reflect::set(
            &options,
            &JsValue::from_str("signals"),
            &Function::new_no_args("return true"),
        );
        let _ = Reflect::set(
            &options,
            &JsValue::from_str("data"),
            &Function::new_no_args("return false"),
        );
        let _ = Reflect::set(&options, &JsValue::from_str("recurse"), &JsValue::TRUE);
        options.into()
    }
}

impl ChartView for VegaChart {
    /// A state without a `signals` object means the chart declares none.
    fn signal_names(&self) -> Result<Vec<String>, ChartError> {
        let state = self
            .view
            .get_state(&Self::signal_state_options())
            .map_err(|e| ChartError::SignalQuery(describe_js_error(&e)))?;

        Ok(Reflect::get(&state, &JsValue::from_str("signals"))
            .ok()
            .and_then(|signals| signals.dyn_into::<Object>().ok())
            .map(|signals| {
                Object::keys(&signals)
                    .iter()
                    .filter_map(|key| key.as_string())
                    .collect()
            })
            .unwrap_or_default())
    }

    fn set_signal(&self, name: &str, value: SignalValue) -> Result<(), ChartError> {
        let value = serde_wasm_bindgen::to_value(&value).map_err(|e| ChartError::Signal {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        self.view
            .signal(name, &value)
            .map(|_| ())
            .map_err(|e| ChartError::Signal {
                name: name.to_string(),
                reason: describe_js_error(&e),
            })
    }

    fn request_render(&self) -> Result<(), ChartError> {
        let promise = self
            .view
            .run_async()
            .map_err(|e| ChartError::Render(describe_js_error(&e)))?;

        let container = self.container.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("Render of {} failed: {}", container, describe_js_error(&e));
            }
        });
        Ok(())
    }
}
