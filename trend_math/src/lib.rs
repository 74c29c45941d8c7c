//! # Trend Math
//!
//! Numeric building blocks for trend modeling.
//! This crate provides ordinary least squares, the coefficient of
//! determination and the return statistics used to summarize volatility.

use thiserror::Error;

pub mod regression;
pub mod statistics;

pub use regression::{ordinary_least_squares, r_squared, LinearFit};
pub use statistics::{floor_values, log_returns, mean, population_std_dev};

/// Errors that can occur in trend calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),

    /// The observed values have no spread, so a goodness of fit is undefined
    #[error("Zero variance in observed values")]
    ZeroVariance,
}

/// Result type for trend math operations
pub type Result<T> = std::result::Result<T, MathError>;
