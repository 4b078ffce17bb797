//! Shared Dioxus components and the Vega bridge for the trade dashboard.
//!
//! This crate provides:
//! - `js_bridge`: `wasm-bindgen` bindings to `vegaEmbed` and the Vega `View`
//! - `dom`: the page controls read through `web-sys`, and a `setTimeout` scheduler
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: reusable RSX components (controls, chart panels, notices)

pub mod components;
pub mod dom;
pub mod js_bridge;
pub mod state;
