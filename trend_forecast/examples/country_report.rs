use chrono::{Duration, NaiveDate};
use trend_forecast::analysis::TrendModeler;
use trend_forecast::comparison::compare_countries;
use trend_forecast::config::ModelerConfig;
use trend_forecast::series::DatedObservation;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Trend Forecast: Country Report Example");
    println!("======================================\n");

    let config = match std::env::args().nth(1) {
        Some(path) => ModelerConfig::from_file(path)?,
        None => ModelerConfig::default(),
    };
    let modeler = TrendModeler::new(config)?;

    let countries = [
        ("ES", create_weekly_interest(52, steady_growth)),
        ("PT", create_weekly_interest(52, summer_peak)),
    ];

    let mut reports = Vec::new();
    for (country, observations) in &countries {
        let report = modeler.analyze_observations(observations, country)?;
        let analysis = &report.analysis;

        println!("{} ({} weeks)", country, report.raw_values.len());
        println!(
            "  Trend:       {} ({}, r2 = {:.3})",
            analysis.selected_model_type,
            analysis.selected_model_equation_description,
            analysis.selected_model_r_squared
        );
        println!("  Forecast:    {:.1?}", analysis.forecast.values);
        println!(
            "  Volatility:  {:.3} (mean log-return {:.4}, risk {})",
            analysis.volatility, analysis.mean_log_return, analysis.risk_level
        );
        println!(
            "  Seasonality: {:.1} across {} months\n",
            report.seasonality.seasonality_score,
            report.seasonality.monthly_averages.len()
        );

        reports.push(report);
    }

    let comparison = compare_countries(&reports);
    if let Some(most) = &comparison.most_seasonal {
        println!("Most seasonal: {} ({:.1})", most.country, most.seasonality_score);
    }
    if let Some(best) = &comparison.best_trend {
        println!(
            "Best trend fit: {} ({}, r2 = {:.3})",
            best.country, best.best_model, best.r_squared
        );
    }

    Ok(())
}

fn steady_growth(week: f64) -> f64 {
    30.0 + 0.8 * week
}

/// Peaks around week 28
fn summer_peak(week: f64) -> f64 {
    let distance = (week - 28.0).abs();
    (80.0 - 4.0 * distance).max(5.0)
}

fn create_weekly_interest(weeks: usize, shape: impl Fn(f64) -> f64) -> Vec<DatedObservation> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid start date");
    (0..weeks)
        .map(|week| DatedObservation {
            date: start + Duration::weeks(week as i64),
            value: shape(week as f64).round(),
        })
        .collect()
}
