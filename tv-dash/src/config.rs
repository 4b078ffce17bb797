//! Dashboard configuration and the spec registry.
//!
//! The built-in configuration lives in `assets/dashboard.json` and is embedded
//! into the binary at compile time. It lists every chart container together
//! with the Vega spec it renders, plus the ids of the page controls, the signal
//! names pushed into charts and the options handed to `vegaEmbed`.

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Embedded dashboard configuration.
pub static DASHBOARD_JSON: &str = include_str!("../assets/dashboard.json");

const DEFAULT_DEBOUNCE_MS: u64 = 120;

/// One chart: the DOM container it lives in and the spec document it renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    /// DOM id of the container element (without the leading `#`)
    pub container: String,
    /// Path of the Vega / Vega-Lite spec document
    pub spec: String,
    /// Heading shown above the chart
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Signals this chart declares. When set, the chart is not queried.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signals: Option<Vec<String>>,
}

impl ChartEntry {
    pub fn new(container: impl Into<String>, spec: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            spec: spec.into(),
            title: None,
            signals: None,
        }
    }

    /// CSS selector for the container, as expected by `vegaEmbed`.
    pub fn selector(&self) -> String {
        format!("#{}", self.container)
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.container)
    }
}

/// Container id -> spec path table. Container ids are unique and non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ChartEntry>", into = "Vec<ChartEntry>")]
pub struct SpecRegistry {
    entries: Vec<ChartEntry>,
}

impl SpecRegistry {
    pub fn new(entries: Vec<ChartEntry>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::NoCharts);
        }
        let mut seen = HashSet::new();
        for (idx, entry) in entries.iter().enumerate() {
            if entry.container.trim().is_empty() {
                return Err(ConfigError::EmptyContainer(idx));
            }
            if entry.spec.trim().is_empty() {
                return Err(ConfigError::EmptySpecPath(entry.container.clone()));
            }
            if !seen.insert(entry.container.as_str()) {
                return Err(ConfigError::DuplicateContainer(entry.container.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ChartEntry> {
        self.entries.iter()
    }

    pub fn get(&self, container: &str) -> Option<&ChartEntry> {
        self.entries.iter().find(|e| e.container == container)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<ChartEntry>> for SpecRegistry {
    type Error = ConfigError;

    fn try_from(entries: Vec<ChartEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<SpecRegistry> for Vec<ChartEntry> {
    fn from(registry: SpecRegistry) -> Self {
        registry.entries
    }
}

/// DOM ids of the global controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlIds {
    pub year_slider: String,
    pub trade_type: String,
    pub year_label: String,
}

impl Default for ControlIds {
    fn default() -> Self {
        Self {
            year_slider: "yearSlider".to_string(),
            trade_type: "tradeType".to_string(),
            year_label: "yearValue".to_string(),
        }
    }
}

/// Names of the chart signals driven by the controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalNames {
    pub year: String,
    pub trade: String,
}

impl Default for SignalNames {
    fn default() -> Self {
        Self {
            year: "yearFilter".to_string(),
            trade: "tradeType".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Renderer {
    Svg,
    Canvas,
}

/// Options object passed verbatim to `vegaEmbed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedOptions {
    pub actions: bool,
    pub renderer: Renderer,
    pub tooltip: bool,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            actions: false,
            renderer: Renderer::Svg,
            tooltip: true,
        }
    }
}

/// Bounds and starting position of the year slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
    pub initial: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min: 2010,
            max: 2024,
            initial: 2024,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub charts: SpecRegistry,
    #[serde(default)]
    pub controls: ControlIds,
    #[serde(default)]
    pub signals: SignalNames,
    #[serde(default)]
    pub embed: EmbedOptions,
    #[serde(default)]
    pub years: YearRange,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl DashboardConfig {
    /// Parse the configuration embedded in the binary.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(DASHBOARD_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = serde_json::from_str(json)?;
        let YearRange { min, max, initial } = config.years;
        if !(min <= initial && initial <= max) {
            return Err(ConfigError::InvalidYearRange { min, max, initial });
        }
        Ok(config)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
