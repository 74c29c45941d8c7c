use pretty_assertions::assert_eq;
use trend_forecast::analysis::TrendModeler;
use trend_forecast::comparison::compare_countries;
use trend_forecast::error::TrendError;
use trend_forecast::models::ModelKind;
use trend_forecast::series::TrendsTimeline;

/// Build a weekly timeline payload from `(date, value)` pairs
fn timeline_json(points: &[(&str, f64)]) -> String {
    let entries: Vec<serde_json::Value> = points
        .iter()
        .map(|(date, value)| {
            serde_json::json!({
                "date": date,
                "values": [{
                    "query": "acme",
                    "value": value.to_string(),
                    "extracted_value": value
                }]
            })
        })
        .collect();

    serde_json::json!({ "interest_over_time": { "timeline_data": entries } }).to_string()
}

fn steady_timeline() -> TrendsTimeline {
    let json = timeline_json(&[
        ("Jan 15, 2023", 40.0),
        ("Jan 22, 2023", 42.0),
        ("Feb 12, 2023", 44.0),
        ("Feb 19, 2023", 46.0),
        ("Mar 12, 2023", 48.0),
        ("Mar 19, 2023", 50.0),
    ]);
    TrendsTimeline::from_json_str(&json).unwrap()
}

fn summer_peak_timeline() -> TrendsTimeline {
    let json = timeline_json(&[
        ("Jan 15, 2023", 5.0),
        ("Apr 16, 2023", 10.0),
        ("Jul 16, 2023", 95.0),
        ("Jul 23, 2023", 100.0),
        ("Oct 15, 2023", 12.0),
        ("Dec 17, 2023", 4.0),
    ]);
    TrendsTimeline::from_json_str(&json).unwrap()
}

#[test]
fn test_country_report() {
    let modeler = TrendModeler::default();
    let report = modeler.analyze_country(&steady_timeline(), "ES").unwrap();

    assert_eq!(report.country, "ES");
    assert_eq!(report.raw_values, vec![40.0, 42.0, 44.0, 46.0, 48.0, 50.0]);
    assert_eq!(report.raw_dates[0], "2023-01-15");
    assert_eq!(report.raw_dates[5], "2023-03-19");
    assert_eq!(report.analysis.selected_model_type, ModelKind::Linear);

    let months: Vec<&str> = report
        .seasonality
        .monthly_averages
        .iter()
        .map(|m| m.month.as_str())
        .collect();
    assert_eq!(months, vec!["January", "February", "March"]);
    assert_eq!(report.seasonality.overall_average, 45.0);
    assert!(report.seasonality.seasonality_score > 0.0);
    assert!(report.seasonality.seasonality_score < 10.0);
}

#[test]
fn test_empty_timeline_is_insufficient() {
    let modeler = TrendModeler::default();
    let timeline = TrendsTimeline::from_json_str(&timeline_json(&[])).unwrap();

    assert!(matches!(
        modeler.analyze_country(&timeline, "PT"),
        Err(TrendError::InsufficientData(_))
    ));
}

#[test]
fn test_compare_countries() {
    let modeler = TrendModeler::default();
    let reports = vec![
        modeler.analyze_country(&steady_timeline(), "ES").unwrap(),
        modeler.analyze_country(&summer_peak_timeline(), "PT").unwrap(),
    ];

    let comparison = compare_countries(&reports);

    assert_eq!(comparison.countries.len(), 2);
    assert_eq!(comparison.countries[0].country, "ES");
    assert_eq!(comparison.most_seasonal.unwrap().country, "PT");
    assert_eq!(comparison.least_seasonal.unwrap().country, "ES");
    assert_eq!(comparison.most_volatile.unwrap().country, "PT");
    assert_eq!(comparison.best_trend.unwrap().country, "ES");
}
