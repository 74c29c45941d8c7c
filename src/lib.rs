//! # Brand Trends
//!
//! `brand_trends` bundles the trend modeling crates of this workspace:
//! [`trend_math`] for the numeric kernels and [`trend_forecast`] for model
//! selection, forecasting, volatility and seasonality reports.
//!
//! ## Example
//!
//! ```
//! use brand_trends::{analyze, ModelKind, RiskLevel};
//!
//! let interest = [10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0];
//! let analysis = analyze(&interest, 3).unwrap();
//!
//! assert_eq!(analysis.selected_model_type, ModelKind::Linear);
//! assert_eq!(analysis.risk_level, RiskLevel::Low);
//! ```

pub use trend_forecast;
pub use trend_math;

pub use trend_forecast::{
    analyze, compare_countries, CountryTrendReport, ModelKind, ModelerConfig, RiskLevel,
    TrendAnalysis, TrendError, TrendModeler, TrendsTimeline,
};
