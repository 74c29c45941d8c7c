//! Exponential trend `y = scale * e^(rate * x)`
//!
//! Fitted as a straight line through `ln(max(y, floor))`. How the fit is
//! scored depends on [`ExponentialScoring`].

use crate::config::{ExponentialScoring, ModelerConfig};
use crate::error::Result;
use crate::models::{index_range, score, FittedModel, ModelKind, ModelParameters, TrendModel};
use trend_math::{floor_values, ordinary_least_squares};

#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialTrend;

impl TrendModel for ExponentialTrend {
    fn kind(&self) -> ModelKind {
        ModelKind::Exponential
    }

    fn fit(&self, values: &[f64], config: &ModelerConfig) -> Result<FittedModel> {
        let x = index_range(values.len());
        let log_values: Vec<f64> = floor_values(values, config.value_floor)
            .into_iter()
            .map(f64::ln)
            .collect();

        let line = ordinary_least_squares(&x, &log_values)?;
        let parameters = ModelParameters::Exponential {
            scale: line.intercept.exp(),
            rate: line.slope,
        };

        let fit_score = match config.exponential_scoring {
            ExponentialScoring::LogSpace => score(&log_values, &line.predict_all(&x))?,
            ExponentialScoring::OriginalScale => {
                let curve: Vec<f64> = x.iter().map(|&xi| parameters.predict(xi)).collect();
                score(values, &curve)?
            }
        };

        Ok(FittedModel::new(parameters, &x, fit_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn growth_series() -> Vec<f64> {
        (0..12).map(|i| 3.0 * (0.1 * i as f64).exp()).collect()
    }

    #[test]
    fn test_recovers_scale_and_rate() {
        let model = ExponentialTrend
            .fit(&growth_series(), &ModelerConfig::default())
            .unwrap();

        match model.parameters {
            ModelParameters::Exponential { scale, rate } => {
                assert_relative_eq!(scale, 3.0, epsilon = 1e-9);
                assert_relative_eq!(rate, 0.1, epsilon = 1e-9);
            }
            other => panic!("unexpected parameters {:?}", other),
        }
        assert_relative_eq!(model.r_squared, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_original_scale_scoring() {
        let config = ModelerConfig {
            exponential_scoring: ExponentialScoring::OriginalScale,
            ..ModelerConfig::default()
        };
        let model = ExponentialTrend.fit(&growth_series(), &config).unwrap();
        assert_relative_eq!(model.r_squared, 1.0, epsilon = 1e-9);

        // The two scorings disagree on data that is not exponential
        let noisy = [1.0, 9.0, 2.0, 8.0, 3.0];
        let log_space = ExponentialTrend
            .fit(&noisy, &ModelerConfig::default())
            .unwrap();
        let original = ExponentialTrend.fit(&noisy, &config).unwrap();
        assert_eq!(log_space.parameters, original.parameters);
        assert_ne!(log_space.r_squared, original.r_squared);
    }

    #[test]
    fn test_zeros_are_floored() {
        let model = ExponentialTrend
            .fit(&[0.0, 5.0, 0.0, 10.0], &ModelerConfig::default())
            .unwrap();

        assert!(model.r_squared.is_finite());
        assert!(model.fitted_values.iter().all(|v| v.is_finite() && *v > 0.0));
    }
}
