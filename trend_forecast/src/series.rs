//! Observation series and the upstream trends timeline payload

use crate::error::{Result, TrendError};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

/// Date format used by the trends timeline, e.g. `Mar 05, 2023`
pub const TIMELINE_DATE_FORMAT: &str = "%b %d, %Y";

/// Ordered, non-empty sequence of finite observations
///
/// Indices are implicit: the value at position `i` belongs to period `i`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationSeries {
    values: Vec<f64>,
}

impl ObservationSeries {
    /// Create a series, rejecting empty input and non-finite values
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(TrendError::InsufficientData(
                "Observation series is empty".to_string(),
            ));
        }
        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(TrendError::DataError(format!(
                "Observation {} is not a finite number: {}",
                pos, values[pos]
            )));
        }

        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Implicit indices `0..n` as floats
    pub fn indices(&self) -> Vec<f64> {
        (0..self.values.len()).map(|i| i as f64).collect()
    }
}

/// One dated observation from a timeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatedObservation {
    pub date: NaiveDate,
    pub value: f64,
}

/// Interest-over-time payload as returned by the trends service
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendsTimeline {
    #[serde(default)]
    pub interest_over_time: Option<InterestOverTime>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterestOverTime {
    #[serde(default)]
    pub timeline_data: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimelineEntry {
    pub date: String,
    #[serde(default)]
    pub values: Vec<TimelineValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimelineValue {
    #[serde(default)]
    pub extracted_value: f64,
}

impl TrendsTimeline {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Dated observations of the first query in the timeline
    ///
    /// Entries without values, or whose date does not match
    /// [`TIMELINE_DATE_FORMAT`], are skipped.
    pub fn observations(&self) -> Vec<DatedObservation> {
        let Some(interest) = &self.interest_over_time else {
            return Vec::new();
        };

        interest
            .timeline_data
            .iter()
            .filter_map(|entry| {
                let first = entry.values.first()?;
                match NaiveDate::parse_from_str(entry.date.trim(), TIMELINE_DATE_FORMAT) {
                    Ok(date) => Some(DatedObservation {
                        date,
                        value: first.extracted_value,
                    }),
                    Err(err) => {
                        debug!("skipping timeline entry '{}': {}", entry.date, err);
                        None
                    }
                }
            })
            .collect()
    }
}
