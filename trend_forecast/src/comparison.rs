//! Cross-country comparison of trend reports

use crate::models::ModelKind;
use crate::seasonality::CountryTrendReport;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Headline numbers of one country's report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySummary {
    pub country: String,
    pub seasonality_score: f64,
    pub volatility: f64,
    pub best_model: ModelKind,
    pub r_squared: f64,
}

impl From<&CountryTrendReport> for CountrySummary {
    fn from(report: &CountryTrendReport) -> Self {
        Self {
            country: report.country.clone(),
            seasonality_score: report.seasonality.seasonality_score,
            volatility: report.analysis.volatility,
            best_model: report.analysis.selected_model_type,
            r_squared: report.analysis.selected_model_r_squared,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryComparison {
    /// Summaries in input order
    pub countries: Vec<CountrySummary>,
    pub most_seasonal: Option<CountrySummary>,
    pub least_seasonal: Option<CountrySummary>,
    pub most_volatile: Option<CountrySummary>,
    /// Country whose selected trend fits best
    pub best_trend: Option<CountrySummary>,
}

/// Rank countries by seasonality, volatility and trend fit
///
/// Rankings use a stable descending sort, so among equal scores the country
/// listed first ranks highest.
pub fn compare_countries(reports: &[CountryTrendReport]) -> CountryComparison {
    let countries: Vec<CountrySummary> = reports.iter().map(CountrySummary::from).collect();
    if countries.is_empty() {
        return CountryComparison::default();
    }

    let by_seasonality = sorted_descending(&countries, |c| c.seasonality_score);
    let by_volatility = sorted_descending(&countries, |c| c.volatility);
    let by_fit = sorted_descending(&countries, |c| c.r_squared);

    CountryComparison {
        most_seasonal: by_seasonality.first().cloned(),
        least_seasonal: by_seasonality.last().cloned(),
        most_volatile: by_volatility.first().cloned(),
        best_trend: by_fit.first().cloned(),
        countries,
    }
}

fn sorted_descending<F>(countries: &[CountrySummary], key: F) -> Vec<CountrySummary>
where
    F: Fn(&CountrySummary) -> f64,
{
    let mut sorted = countries.to_vec();
    sorted.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(country: &str, seasonality: f64, volatility: f64, r2: f64) -> CountrySummary {
        CountrySummary {
            country: country.to_string(),
            seasonality_score: seasonality,
            volatility,
            best_model: ModelKind::Linear,
            r_squared: r2,
        }
    }

    #[test]
    fn test_sorted_descending_is_stable() {
        let countries = vec![
            summary("ES", 10.0, 0.1, 0.5),
            summary("PT", 30.0, 0.1, 0.5),
            summary("FR", 10.0, 0.1, 0.5),
        ];
        let sorted = sorted_descending(&countries, |c| c.seasonality_score);
        let order: Vec<&str> = sorted.iter().map(|c| c.country.as_str()).collect();
        assert_eq!(order, vec!["PT", "ES", "FR"]);
    }

    #[test]
    fn test_no_reports() {
        assert_eq!(compare_countries(&[]), CountryComparison::default());
    }
}
