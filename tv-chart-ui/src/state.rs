//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The chart views themselves are not reactive; they live in the dashboard controller.

use dioxus::prelude::*;

/// Shared application state for the dashboard page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the initial load pass is still running
    pub loading: Signal<bool>,
    /// Error message if the dashboard could not start
    pub error_msg: Signal<Option<String>>,
    /// Containers whose spec failed to embed
    pub failed_charts: Signal<Vec<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            failed_charts: Signal::new(Vec::new()),
        }
    }

    pub fn is_failed(&self, container: &str) -> bool {
        self.failed_charts.read().iter().any(|c| c == container)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
