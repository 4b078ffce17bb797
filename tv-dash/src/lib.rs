//! Chart registry and control synchronization for the trade visualisation dashboard.
//!
//! This crate is platform-neutral. The charting library, the page controls and
//! the timer are reached through traits so the browser bindings in
//! `tv-chart-ui` can plug in `vegaEmbed`, the DOM and `setTimeout`.
//!
//! - `config`: embedded dashboard configuration and the spec registry
//! - `controls`: year / trade direction model and the `Controls` trait
//! - `view`: `ChartView` and `ChartEmbedder` seams
//! - `loader`, `sync`, `debounce`: loading, signal pushing and slider debouncing
//! - `controller`: the single page-session object tying it together

pub mod config;
pub mod controller;
pub mod controls;
pub mod debounce;
pub mod error;
pub mod loader;
pub mod sync;
pub mod table;
pub mod view;

#[cfg(test)]
mod testing;

pub use config::{ChartEntry, DashboardConfig, EmbedOptions, SpecRegistry};
pub use controller::DashboardController;
pub use controls::{ControlState, Controls, TradeDirection};
pub use debounce::{Debouncer, Scheduler};
pub use error::{ChartError, ConfigError, ControlError};
pub use loader::{LoadFailure, LoadReport};
pub use sync::SyncReport;
pub use view::{ChartEmbedder, ChartView, SignalValue};
