//! Logarithmic trend `y = slope * ln(x + 1) + intercept`, scored on the raw values

use crate::config::ModelerConfig;
use crate::error::Result;
use crate::models::{
    index_range, log_index, score, FittedModel, ModelKind, ModelParameters, TrendModel,
};
use trend_math::ordinary_least_squares;

#[derive(Debug, Clone, Copy, Default)]
pub struct LogarithmicTrend;

impl TrendModel for LogarithmicTrend {
    fn kind(&self) -> ModelKind {
        ModelKind::Logarithmic
    }

    fn fit(&self, values: &[f64], _config: &ModelerConfig) -> Result<FittedModel> {
        let x = index_range(values.len());
        let log_x: Vec<f64> = x.iter().map(|&xi| log_index(xi)).collect();

        let line = ordinary_least_squares(&log_x, values)?;
        let parameters = ModelParameters::Logarithmic {
            slope: line.slope,
            intercept: line.intercept,
        };
        let fitted = line.predict_all(&log_x);

        Ok(FittedModel::new(parameters, &x, score(values, &fitted)?))
    }
}
