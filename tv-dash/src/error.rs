use thiserror::Error;

/// Problems found while parsing or validating the dashboard configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse dashboard configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dashboard configuration declares no charts")]
    NoCharts,
    #[error("chart #{0} has an empty container id")]
    EmptyContainer(usize),
    #[error("chart `{0}` has an empty spec path")]
    EmptySpecPath(String),
    #[error("container `{0}` is registered more than once")]
    DuplicateContainer(String),
    #[error("year range {min}..={max} does not contain initial year {initial}")]
    InvalidYearRange { min: i32, max: i32, initial: i32 },
}

/// Failures reported by the charting library for a single chart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("embed failed: {0}")]
    Embed(String),
    #[error("could not query declared signals: {0}")]
    SignalQuery(String),
    #[error("could not set signal `{name}`: {reason}")]
    Signal { name: String, reason: String },
    #[error("render request failed: {0}")]
    Render(String),
}

/// The page controls could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    #[error("control `{0}` not found in the document")]
    Missing(String),
    #[error("control `{id}` holds a non-numeric year `{value}`")]
    InvalidYear { id: String, value: String },
    #[error("unknown trade direction `{0}`")]
    UnknownTradeDirection(String),
}
