//! Candidate trend models
//!
//! Each model fits the whole series against its implicit index and reports
//! its reconstruction together with an R-squared score. Candidates are
//! compared in [`ModelKind::PRIORITY`] order.

use crate::config::ModelerConfig;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use trend_math::MathError;

pub mod exponential;
pub mod linear;
pub mod logarithmic;

pub use exponential::ExponentialTrend;
pub use linear::LinearTrend;
pub use logarithmic::LogarithmicTrend;

/// The functional form of a trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Linear,
    Exponential,
    Logarithmic,
}

impl ModelKind {
    /// Evaluation order; earlier kinds win ties
    pub const PRIORITY: [ModelKind; 3] = [
        ModelKind::Linear,
        ModelKind::Exponential,
        ModelKind::Logarithmic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Linear => "linear",
            ModelKind::Exponential => "exponential",
            ModelKind::Logarithmic => "logarithmic",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coefficients of a fitted trend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ModelParameters {
    /// `y = slope * x + intercept`
    Linear { slope: f64, intercept: f64 },
    /// `y = scale * e^(rate * x)`
    Exponential { scale: f64, rate: f64 },
    /// `y = slope * ln(x + 1) + intercept`
    Logarithmic { slope: f64, intercept: f64 },
}

impl ModelParameters {
    pub fn kind(&self) -> ModelKind {
        match self {
            ModelParameters::Linear { .. } => ModelKind::Linear,
            ModelParameters::Exponential { .. } => ModelKind::Exponential,
            ModelParameters::Logarithmic { .. } => ModelKind::Logarithmic,
        }
    }

    /// Evaluate the trend at a (possibly future) index
    pub fn predict(&self, index: f64) -> f64 {
        match *self {
            ModelParameters::Linear { slope, intercept } => slope * index + intercept,
            ModelParameters::Exponential { scale, rate } => scale * (rate * index).exp(),
            ModelParameters::Logarithmic { slope, intercept } => {
                slope * log_index(index) + intercept
            }
        }
    }

    /// Human-readable formula
    pub fn equation(&self) -> String {
        match *self {
            ModelParameters::Linear { slope, intercept } => {
                format!("y = {:.2}x + {:.2}", slope, intercept)
            }
            ModelParameters::Exponential { scale, rate } => {
                format!("y = {:.2} * e^({:.4}x)", scale, rate)
            }
            ModelParameters::Logarithmic { slope, intercept } => {
                format!("y = {:.2} * ln(x) + {:.2}", slope, intercept)
            }
        }
    }
}

/// `ln(max(index + 1, 1))`, the regressor of the logarithmic model
pub(crate) fn log_index(index: f64) -> f64 {
    (index + 1.0).max(1.0).ln()
}

/// A candidate model fitted to one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedModel {
    pub kind: ModelKind,
    pub parameters: ModelParameters,
    /// Reconstruction of the input, one value per input index
    pub fitted_values: Vec<f64>,
    /// Goodness of fit; may be negative and is never clamped
    pub r_squared: f64,
    /// Set when the scored values had zero variance and `r_squared` fell back to 0
    pub degenerate: bool,
}

impl FittedModel {
    pub(crate) fn new(parameters: ModelParameters, indices: &[f64], score: Score) -> Self {
        Self {
            kind: parameters.kind(),
            fitted_values: indices.iter().map(|&x| parameters.predict(x)).collect(),
            parameters,
            r_squared: score.r_squared,
            degenerate: score.degenerate,
        }
    }

    pub fn predict(&self, index: f64) -> f64 {
        self.parameters.predict(index)
    }

    /// Values at indices `start, start + 1, ..., start + horizon - 1`
    pub fn project(&self, start: usize, horizon: usize) -> Vec<f64> {
        (0..horizon)
            .map(|step| self.predict(start as f64 + step as f64))
            .collect()
    }

    pub fn equation(&self) -> String {
        self.parameters.equation()
    }
}

/// R-squared together with the zero-variance flag
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Score {
    pub r_squared: f64,
    pub degenerate: bool,
}

/// Score `fitted` against `observed`, mapping zero variance to 0
pub(crate) fn score(observed: &[f64], fitted: &[f64]) -> Result<Score> {
    match trend_math::r_squared(observed, fitted) {
        Ok(r_squared) => Ok(Score {
            r_squared,
            degenerate: false,
        }),
        Err(MathError::ZeroVariance) => Ok(Score {
            r_squared: 0.0,
            degenerate: true,
        }),
        Err(err) => Err(err.into()),
    }
}

/// Common interface for trend models
pub trait TrendModel {
    fn kind(&self) -> ModelKind;

    /// Fit the model to `values`, indexed `0..values.len()`
    fn fit(&self, values: &[f64], config: &ModelerConfig) -> Result<FittedModel>;
}

/// The three candidates in priority order
pub fn candidates() -> [Box<dyn TrendModel>; 3] {
    [
        Box::new(LinearTrend),
        Box::new(ExponentialTrend),
        Box::new(LogarithmicTrend),
    ]
}

/// Highest R-squared, keeping the earlier model unless a later one is strictly better
pub fn select_best(fitted: &[FittedModel]) -> Option<&FittedModel> {
    let mut iter = fitted.iter();
    let mut best = iter.next()?;
    for model in iter {
        if model.r_squared > best.r_squared {
            best = model;
        }
    }
    Some(best)
}

pub(crate) fn index_range(len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64).collect()
}
