//! Weight variation analysis example
//!
//! Run with `RUST_LOG=debug` to see the intermediate statistics.

use hive_core::{WeightChart, WeightSeries, WeightUnit};
use hive_variation::{VariationAnalyzer, VariationParameters, WeightAnalyzer};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Hive Weight Analysis Examples ===\n");

    let analyzer = VariationAnalyzer::default();

    // Example 1: nectar flow
    println!("1. Growth during a nectar flow");
    let result = analyzer.analyze(&[10.0, 10.2, 10.45, 10.9])?;
    println!("{result}");

    // Example 2: scale rows in grams, as stored by the sensors
    println!("2. Decline from raw sensor rows");
    let json = r#"[
        {"value": 20000, "timestamp": "2025-04-01T06:00:00Z", "kind": "scale"},
        {"value": 19800, "timestamp": "2025-04-02T06:00:00Z", "kind": "scale"},
        {"value": "19500", "timestamp": "2025-04-03T06:00:00Z", "kind": "scale"},
        {"value": 19000, "timestamp": "2025-04-04T06:00:00Z", "kind": "scale"}
    ]"#;
    let series = WeightSeries::from_json(json, WeightUnit::Grams)?;
    let chart = WeightChart::new(&series, 40.0)?;
    println!("  Chart labels: {:?}, legend: {:?}", chart.labels, chart.legend);
    let result = analyzer.analyze_series(&series)?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    // Example 3: stricter thresholds loaded from configuration
    println!("\n3. Custom thresholds");
    let params: VariationParameters =
        serde_json::from_str(r#"{"growth_threshold": 0.5, "min_adjustments": 4}"#)?;
    let strict = VariationAnalyzer::with_parameters(params)?;
    let report = strict.analyze_detailed(&[10.0, 10.2, 10.45, 10.9])?;
    println!(
        "  mean {:.3} kg, std dev {:.3} kg, anomaly threshold {:.3} kg",
        report.statistics.mean, report.statistics.std_dev, report.anomaly_threshold
    );
    println!("{}", report.result);

    // Example 4: not enough data
    println!("4. Single reading");
    match analyzer.analyze(&[12.0]) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  {e}"),
    }

    Ok(())
}
