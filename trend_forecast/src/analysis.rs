//! Trend model selection and short-term forecasting
//!
//! [`TrendModeler::analyze`] fits every candidate model, keeps the one with
//! the highest R-squared (earlier candidates win ties), projects it forward
//! and summarizes log-return volatility. The call is a pure function of its
//! input: no state is kept between calls.

use crate::config::ModelerConfig;
use crate::error::{Result, TrendError};
use crate::models::{candidates, select_best, FittedModel, ModelKind};
use crate::series::ObservationSeries;
use crate::volatility::{RiskLevel, VolatilitySummary};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Projected values past the end of the series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub values: Vec<f64>,
    /// R-squared of the model that produced the projection
    pub confidence: f64,
}

impl Forecast {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Non-fatal conditions met during an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "warning", rename_all = "snake_case")]
pub enum TrendWarning {
    /// The model was scored against constant values, its R-squared is reported as 0
    ZeroVariance { model: ModelKind },
}

/// Everything `analyze` learns about one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub selected_model_type: ModelKind,
    pub selected_model_r_squared: f64,
    pub selected_model_equation_description: String,
    /// Selected model's reconstruction of the input
    pub fitted_series: Vec<f64>,
    pub forecast: Forecast,
    pub volatility: f64,
    pub mean_log_return: f64,
    pub risk_level: RiskLevel,
    /// Every candidate in evaluation order, the selected one included
    pub candidates: Vec<FittedModel>,
    pub warnings: Vec<TrendWarning>,
}

impl TrendAnalysis {
    /// The candidate of the given kind
    pub fn candidate(&self, kind: ModelKind) -> Option<&FittedModel> {
        self.candidates.iter().find(|m| m.kind == kind)
    }

    pub fn is_degenerate(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Fits trend models to observation series
#[derive(Debug, Clone, Default)]
pub struct TrendModeler {
    config: ModelerConfig,
}

impl TrendModeler {
    /// Create a modeler, validating the configuration
    pub fn new(config: ModelerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ModelerConfig {
        &self.config
    }

    /// Analyze `series` with the configured forecast horizon
    pub fn analyze(&self, series: &[f64]) -> Result<TrendAnalysis> {
        self.analyze_with_horizon(series, self.config.forecast_horizon)
    }

    /// Analyze `series`, projecting `horizon` future points
    pub fn analyze_with_horizon(&self, series: &[f64], horizon: usize) -> Result<TrendAnalysis> {
        if horizon == 0 {
            return Err(TrendError::InvalidParameter(
                "forecast horizon must be at least 1".to_string(),
            ));
        }

        let series = ObservationSeries::new(series.to_vec())?;
        if series.len() < self.config.min_points {
            return Err(TrendError::InsufficientData(format!(
                "Need at least {} observations for a trend fit, got {}",
                self.config.min_points,
                series.len()
            )));
        }
        if series.len().checked_add(horizon).is_none() {
            return Err(TrendError::InvalidParameter(format!(
                "forecast horizon {} runs past the last representable index",
                horizon
            )));
        }
        let values = series.values();

        let mut fitted = Vec::with_capacity(ModelKind::PRIORITY.len());
        let mut warnings = Vec::new();
        for model in candidates() {
            let candidate = model.fit(values, &self.config)?;
            debug!(
                "{} fit: {} (r2 = {:.4})",
                candidate.kind,
                candidate.equation(),
                candidate.r_squared
            );
            if candidate.degenerate {
                warn!(
                    "{} fit scored against zero-variance values, r2 reported as 0",
                    candidate.kind
                );
                warnings.push(TrendWarning::ZeroVariance {
                    model: candidate.kind,
                });
            }
            fitted.push(candidate);
        }

        let best = select_best(&fitted)
            .cloned()
            .ok_or_else(|| TrendError::DataError("No trend model could be fitted".to_string()))?;
        debug!(
            "selected {} model over {} points (r2 = {:.4})",
            best.kind,
            values.len(),
            best.r_squared
        );

        let volatility = VolatilitySummary::from_values(values, &self.config);
        let forecast = Forecast {
            values: best.project(values.len(), horizon),
            confidence: best.r_squared,
        };

        Ok(TrendAnalysis {
            selected_model_type: best.kind,
            selected_model_r_squared: best.r_squared,
            selected_model_equation_description: best.equation(),
            fitted_series: best.fitted_values,
            forecast,
            volatility: volatility.std_deviation,
            mean_log_return: volatility.mean_return,
            risk_level: volatility.risk_level,
            candidates: fitted,
            warnings,
        })
    }
}

/// Analyze `series` with default settings and the given horizon
pub fn analyze(series: &[f64], forecast_horizon: usize) -> Result<TrendAnalysis> {
    TrendModeler::default().analyze_with_horizon(series, forecast_horizon)
}
