//! Log-return volatility and risk classification

use crate::config::ModelerConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use trend_math::{floor_values, log_returns, mean, population_std_dev};

/// Coarse volatility bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// High above the high threshold, Medium above the medium threshold, else Low
    pub fn classify(volatility: f64, config: &ModelerConfig) -> Self {
        if volatility > config.high_risk_threshold {
            RiskLevel::High
        } else if volatility > config.medium_risk_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        f.write_str(label)
    }
}

/// Spread and drift of period-over-period log-returns
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilitySummary {
    /// Population standard deviation of the log-returns
    pub std_deviation: f64,
    pub mean_return: f64,
    pub risk_level: RiskLevel,
}

impl VolatilitySummary {
    /// Summarize `values` after flooring them to `config.value_floor`
    ///
    /// A series with no adjacent pair has zero volatility and zero mean return.
    pub fn from_values(values: &[f64], config: &ModelerConfig) -> Self {
        let returns = log_returns(&floor_values(values, config.value_floor));

        let std_deviation = population_std_dev(&returns);
        let mean_return = mean(&returns);

        Self {
            std_deviation,
            mean_return,
            risk_level: RiskLevel::classify(std_deviation, config),
        }
    }
}
