//! Straight-line trend fitted by least squares on the raw values

use crate::config::ModelerConfig;
use crate::error::Result;
use crate::models::{index_range, score, FittedModel, ModelKind, ModelParameters, TrendModel};
use trend_math::ordinary_least_squares;

/// `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearTrend;

impl TrendModel for LinearTrend {
    fn kind(&self) -> ModelKind {
        ModelKind::Linear
    }

    fn fit(&self, values: &[f64], _config: &ModelerConfig) -> Result<FittedModel> {
        let x = index_range(values.len());
        let line = ordinary_least_squares(&x, values)?;

        let parameters = ModelParameters::Linear {
            slope: line.slope,
            intercept: line.intercept,
        };
        let fitted = line.predict_all(&x);

        Ok(FittedModel::new(parameters, &x, score(values, &fitted)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_fit() {
        let values: Vec<f64> = (0..8).map(|i| 2.0 * i as f64 + 5.0).collect();
        let model = LinearTrend.fit(&values, &ModelerConfig::default()).unwrap();

        assert_eq!(model.kind, ModelKind::Linear);
        assert_relative_eq!(model.r_squared, 1.0);
        assert_relative_eq!(model.predict(8.0), 21.0);
        assert!(!model.degenerate);
    }

    #[test]
    fn test_flat_series_is_degenerate() {
        let model = LinearTrend
            .fit(&[4.0, 4.0, 4.0, 4.0], &ModelerConfig::default())
            .unwrap();

        assert_eq!(model.r_squared, 0.0);
        assert!(model.degenerate);
        assert_eq!(model.fitted_values, vec![4.0; 4]);
    }
}
