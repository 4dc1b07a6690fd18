//! Win-rate results shared by the calculator and the simulator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A win percentage in `[0, 100]`, or `Undefined` when no trial used the
/// strategy it describes.
///
/// `Undefined` stands in for the NaN a plain `0 / 0` division would give.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Percentage {
    /// A measured percentage.
    Value(f64),
    /// The strategy was never played.
    Undefined,
}

impl Percentage {
    /// Percentage of `wins` among `attempts`.
    pub fn from_counts(wins: u64, attempts: u64) -> Self {
        if attempts == 0 {
            return Percentage::Undefined;
        }
        Percentage::Value(wins as f64 / attempts as f64 * 100.0)
    }

    /// The numeric value, if defined.
    pub fn value(self) -> Option<f64> {
        match self {
            Percentage::Value(v) => Some(v),
            Percentage::Undefined => None,
        }
    }

    /// Whether this percentage is the undefined marker.
    pub fn is_undefined(self) -> bool {
        matches!(self, Percentage::Undefined)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Percentage::Value(v) => write!(f, "{:.2}%", v),
            Percentage::Undefined => write!(f, "undefined"),
        }
    }
}

/// Chances of winning for each strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WinRates {
    /// Chance of winning when keeping the initial pick.
    pub not_switch: Percentage,
    /// Chance of winning when switching.
    pub switch: Percentage,
}

impl WinRates {
    /// Create a new result pair.
    pub fn new(not_switch: Percentage, switch: Percentage) -> Self {
        Self { not_switch, switch }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
