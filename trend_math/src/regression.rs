//! Least squares regression and goodness of fit
//!
//! Contains:
//! - Ordinary least squares of `y` on `x`
//! - R-squared (coefficient of determination)

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Below this the x values are treated as identical
const MIN_X_SPREAD: f64 = 1e-10;

/// Slope and intercept of a straight line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluate the line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Evaluate the line at every point of `xs`
    pub fn predict_all(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.predict(x)).collect()
    }
}

/// Fit `y = slope * x + intercept` by ordinary least squares
pub fn ordinary_least_squares(x: &[f64], y: &[f64]) -> Result<LinearFit> {
    if x.len() != y.len() {
        return Err(MathError::InvalidInput(format!(
            "x and y must have the same length, got {} and {}",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(MathError::InsufficientData(
            "Need at least 2 points for least squares".to_string(),
        ));
    }

    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for (&xi, &yi) in x.iter().zip(y.iter()) {
        numerator += (xi - x_mean) * (yi - y_mean);
        denominator += (xi - x_mean) * (xi - x_mean);
    }

    if denominator.abs() < MIN_X_SPREAD {
        return Err(MathError::CalculationError(
            "Cannot calculate slope: x values are too similar".to_string(),
        ));
    }

    let slope = numerator / denominator;
    let intercept = y_mean - slope * x_mean;

    Ok(LinearFit { slope, intercept })
}

/// Coefficient of determination of `fitted` against `observed`
///
/// Computed as `1 - SS_res / SS_tot`, so it can be negative when the
/// fitted values are worse than the mean. Returns
/// [`MathError::ZeroVariance`] when the observed values are constant, that is
/// when their spread is within rounding error of their magnitude.
pub fn r_squared(observed: &[f64], fitted: &[f64]) -> Result<f64> {
    if observed.len() != fitted.len() {
        return Err(MathError::InvalidInput(format!(
            "Observed ({}) and fitted ({}) lengths differ",
            observed.len(),
            fitted.len()
        )));
    }
    if observed.is_empty() {
        return Err(MathError::InsufficientData(
            "Not enough data to calculate R-squared".to_string(),
        ));
    }

    let n = observed.len() as f64;
    let y_mean = observed.iter().sum::<f64>() / n;
    let magnitude = observed.iter().fold(y_mean.abs(), |m, y| m.max(y.abs()));

    let mut ss_total = 0.0;
    let mut ss_residual = 0.0;

    for (&y, &y_pred) in observed.iter().zip(fitted.iter()) {
        ss_total += (y - y_mean).powi(2);
        ss_residual += (y - y_pred).powi(2);
    }

    if ss_total <= f64::EPSILON * n * magnitude * magnitude {
        return Err(MathError::ZeroVariance);
    }

    Ok(1.0 - (ss_residual / ss_total))
}
