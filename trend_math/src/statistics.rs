//! Summary statistics over value series
//!
//! Contains:
//! - Mean and population standard deviation
//! - Epsilon flooring ahead of logarithms
//! - Log-returns between adjacent values

/// Arithmetic mean, 0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by `n`), 0 for fewer than 2 values
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let avg = mean(values);
    let variance = values
        .iter()
        .map(|&v| {
            let diff = v - avg;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;

    variance.sqrt()
}

/// Raise every value to at least `floor`
pub fn floor_values(values: &[f64], floor: f64) -> Vec<f64> {
    values.iter().map(|&v| v.max(floor)).collect()
}

/// Natural log of each ratio `values[i] / values[i - 1]`
///
/// Pairs whose previous value is not positive are skipped.
pub fn log_returns(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .filter(|w| w[0] > 0.0)
        .map(|w| (w[1] / w[0]).ln())
        .collect()
}
