//! # Trend Forecast
//!
//! Trend modeling for search-interest time series.
//!
//! ## Features
//!
//! - Three candidate trend models (Linear, Exponential, Logarithmic) fitted by least squares
//! - Best-fit selection by R-squared, earlier candidates winning ties
//! - Short-term forecast from the selected model, with its R-squared as confidence
//! - Log-return volatility with a Low / Medium / High risk label
//! - Per-country seasonality reports and cross-country comparison
//! - A caller-owned TTL cache for upstream responses
//!
//! ## Quick Start
//!
//! ```rust
//! use trend_forecast::analysis::analyze;
//! use trend_forecast::models::ModelKind;
//!
//! let weekly_interest = [10.0, 12.0, 14.0, 16.0, 18.0, 20.0];
//! let analysis = analyze(&weekly_interest, 3)?;
//!
//! assert_eq!(analysis.selected_model_type, ModelKind::Linear);
//! assert_eq!(analysis.forecast.len(), 3);
//! # Ok::<(), trend_forecast::TrendError>(())
//! ```

pub mod analysis;
pub mod cache;
pub mod comparison;
pub mod config;
pub mod error;
pub mod models;
pub mod seasonality;
pub mod series;
pub mod volatility;

// Re-export commonly used types
pub use crate::analysis::{analyze, Forecast, TrendAnalysis, TrendModeler, TrendWarning};
pub use crate::cache::{cache_key, CacheStats, ResponseCache, TtlCache};
pub use crate::comparison::{compare_countries, CountryComparison, CountrySummary};
pub use crate::config::{ExponentialScoring, ModelerConfig};
pub use crate::error::TrendError;
pub use crate::models::{FittedModel, ModelKind, ModelParameters, TrendModel};
pub use crate::seasonality::{CountryTrendReport, SeasonalityProfile};
pub use crate::series::{DatedObservation, ObservationSeries, TrendsTimeline};
pub use crate::volatility::{RiskLevel, VolatilitySummary};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
