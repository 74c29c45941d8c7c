//! Per-country seasonality report
//!
//! Groups dated observations by calendar month, scores how unevenly interest
//! is spread across the year, and attaches the trend analysis of the same
//! series.

use crate::analysis::{TrendAnalysis, TrendModeler};
use crate::error::{Result, TrendError};
use crate::series::{DatedObservation, TrendsTimeline};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use trend_math::{mean, population_std_dev};

/// Cap on the seasonality score
pub const MAX_SEASONALITY_SCORE: f64 = 100.0;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Average interest for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAverage {
    /// English month name, e.g. `January`
    pub month: String,
    pub average: f64,
    pub observations: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityProfile {
    /// Months that have observations, in calendar order
    pub monthly_averages: Vec<MonthlyAverage>,
    pub overall_average: f64,
    /// Coefficient of variation of the monthly averages, as a percentage capped at 100
    pub seasonality_score: f64,
}

impl SeasonalityProfile {
    pub fn from_observations(observations: &[DatedObservation]) -> Self {
        let mut buckets: [Vec<f64>; 12] = Default::default();
        for obs in observations {
            buckets[obs.date.month0() as usize].push(obs.value);
        }

        let monthly_averages: Vec<MonthlyAverage> = buckets
            .iter()
            .enumerate()
            .filter(|(_, values)| !values.is_empty())
            .map(|(month0, values)| MonthlyAverage {
                month: MONTH_NAMES[month0].to_string(),
                average: mean(values),
                observations: values.len(),
            })
            .collect();

        let values: Vec<f64> = observations.iter().map(|o| o.value).collect();
        let overall_average = mean(&values);

        let seasonality_score = if overall_average > 0.0 {
            let averages: Vec<f64> = monthly_averages.iter().map(|m| m.average).collect();
            (population_std_dev(&averages) / overall_average * 100.0).min(MAX_SEASONALITY_SCORE)
        } else {
            0.0
        };

        Self {
            monthly_averages,
            overall_average,
            seasonality_score,
        }
    }

    /// Average for a month by English name
    pub fn month(&self, name: &str) -> Option<&MonthlyAverage> {
        self.monthly_averages.iter().find(|m| m.month == name)
    }
}

/// Seasonality and trend report for one country's timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryTrendReport {
    /// Country code, e.g. `ES`
    pub country: String,
    pub seasonality: SeasonalityProfile,
    pub analysis: TrendAnalysis,
    /// Observation dates as `%Y-%m-%d`
    pub raw_dates: Vec<String>,
    pub raw_values: Vec<f64>,
}

impl TrendModeler {
    /// Build the full report for one country's trends timeline
    pub fn analyze_country(
        &self,
        timeline: &TrendsTimeline,
        country: &str,
    ) -> Result<CountryTrendReport> {
        let observations = timeline.observations();
        if observations.is_empty() {
            return Err(TrendError::InsufficientData(format!(
                "No dated observations in timeline for {}",
                country
            )));
        }

        self.analyze_observations(&observations, country)
    }

    /// Build the report from already extracted observations
    pub fn analyze_observations(
        &self,
        observations: &[DatedObservation],
        country: &str,
    ) -> Result<CountryTrendReport> {
        let raw_values: Vec<f64> = observations.iter().map(|o| o.value).collect();
        let analysis = self.analyze(&raw_values)?;

        Ok(CountryTrendReport {
            country: country.to_string(),
            seasonality: SeasonalityProfile::from_observations(observations),
            analysis,
            raw_dates: observations
                .iter()
                .map(|o| o.date.format("%Y-%m-%d").to_string())
                .collect(),
            raw_values,
        })
    }
}
