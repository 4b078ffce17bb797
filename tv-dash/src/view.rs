//! Seams to the charting library.
//!
//! The browser implementation lives in `tv-chart-ui::js_bridge`; tests use the
//! in-memory fakes from `crate::testing`.

use serde::Serialize;

use crate::config::EmbedOptions;
use crate::controls::TradeDirection;
use crate::error::ChartError;

/// Value pushed into a chart signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SignalValue {
    Year(i32),
    Trade(TradeDirection),
}

/// A live, embedded chart.
pub trait ChartView {
    /// Names of the signals the chart currently declares. May be empty.
    fn signal_names(&self) -> Result<Vec<String>, ChartError>;

    fn set_signal(&self, name: &str, value: SignalValue) -> Result<(), ChartError>;

    /// Ask the chart to re-evaluate and re-render. Does not wait for the render.
    fn request_render(&self) -> Result<(), ChartError>;
}

/// Embeds spec documents into page containers.
#[allow(async_fn_in_trait)]
pub trait ChartEmbedder {
    type View: ChartView;

    async fn embed(
        &self,
        selector: &str,
        spec_path: &str,
        options: &EmbedOptions,
    ) -> Result<Self::View, ChartError>;
}
