//! Modeler configuration
//!
//! Every field has a default, so a partial JSON document (or `{}`) is a
//! valid configuration.

use crate::error::{Result, TrendError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How the exponential candidate is scored against the others
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExponentialScoring {
    /// R-squared of the log-linear regression (log of values against index)
    #[default]
    LogSpace,
    /// R-squared of the reconstructed curve against the raw values
    OriginalScale,
}

/// Settings for [`TrendModeler`](crate::analysis::TrendModeler)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelerConfig {
    /// Number of future points to project
    pub forecast_horizon: usize,
    /// Floor applied to values before any logarithm
    pub value_floor: f64,
    /// Shortest series `analyze` accepts
    pub min_points: usize,
    /// Volatility above this is High risk
    pub high_risk_threshold: f64,
    /// Volatility above this is Medium risk
    pub medium_risk_threshold: f64,
    pub exponential_scoring: ExponentialScoring,
}

pub const DEFAULT_FORECAST_HORIZON: usize = 3;
pub const DEFAULT_VALUE_FLOOR: f64 = 0.1;
pub const DEFAULT_MIN_POINTS: usize = 2;

impl Default for ModelerConfig {
    fn default() -> Self {
        Self {
            forecast_horizon: DEFAULT_FORECAST_HORIZON,
            value_floor: DEFAULT_VALUE_FLOOR,
            min_points: DEFAULT_MIN_POINTS,
            high_risk_threshold: 0.5,
            medium_risk_threshold: 0.2,
            exponential_scoring: ExponentialScoring::LogSpace,
        }
    }
}

impl ModelerConfig {
    /// Parse and validate a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check that the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.forecast_horizon == 0 {
            return Err(TrendError::InvalidParameter(
                "forecast_horizon must be at least 1".to_string(),
            ));
        }
        if !(self.value_floor > 0.0) || !self.value_floor.is_finite() {
            return Err(TrendError::InvalidParameter(format!(
                "value_floor must be a positive number, got {}",
                self.value_floor
            )));
        }
        if self.min_points < 2 {
            return Err(TrendError::InvalidParameter(format!(
                "min_points must be at least 2, got {}",
                self.min_points
            )));
        }
        if !(0.0 <= self.medium_risk_threshold
            && self.medium_risk_threshold <= self.high_risk_threshold)
        {
            return Err(TrendError::InvalidParameter(format!(
                "risk thresholds must satisfy 0 <= medium ({}) <= high ({})",
                self.medium_risk_threshold, self.high_risk_threshold
            )));
        }
        Ok(())
    }
}
