//! The two global page controls: the year slider and the trade selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ControlError;

/// Direction of trade selected in the `tradeType` control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    #[default]
    Exports,
    Imports,
    Total,
}

impl TradeDirection {
    pub const ALL: [TradeDirection; 3] = [Self::Exports, Self::Imports, Self::Total];

    /// Token pushed into the chart's trade signal and used as the option value.
    pub fn token(self) -> &'static str {
        match self {
            Self::Exports => "exports",
            Self::Imports => "imports",
            Self::Total => "total",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Exports => "Exports",
            Self::Imports => "Imports",
            Self::Total => "Total trade",
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for TradeDirection {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.token() == s.trim())
            .ok_or_else(|| ControlError::UnknownTradeDirection(s.to_string()))
    }
}

/// Snapshot of both controls, taken at the start of every synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub year: i32,
    pub trade: TradeDirection,
}

/// Parse a slider value into a year. `id` is only used for the error.
pub fn parse_year(id: &str, raw: &str) -> Result<i32, ControlError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.round() as i32)
        .ok_or_else(|| ControlError::InvalidYear {
            id: id.to_string(),
            value: raw.to_string(),
        })
}

/// Access to the live widget state. Values are read on every call, never cached.
pub trait Controls {
    /// Current slider position.
    fn year(&self) -> Result<i32, ControlError>;

    fn trade(&self) -> Result<TradeDirection, ControlError>;

    /// Reflect the current year in the label next to the slider.
    fn show_year(&self, year: i32);
}
