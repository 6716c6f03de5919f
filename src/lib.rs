//! # hive-stats
//!
//! Hive weight analysis toolkit. Re-exports the workspace crates:
//!
//! - [`hive_core`]: error type, reading normalization and weight charts
//! - [`hive_variation`]: deterministic weight-variation analysis
//!
//! ```rust
//! use hive_stats::prelude::*;
//!
//! let series = WeightSeries::from_json("[5.0, 5.0, 5.0, 5.0]", WeightUnit::Kilograms).unwrap();
//! let result = VariationAnalyzer::default().analyze_series(&series).unwrap();
//! assert_eq!(result.trend(), Trend::Stability);
//! assert_eq!(result.adjustments().len(), 3);
//! ```

pub use hive_core;
pub use hive_variation;

pub use hive_core::{Error, Result};

/// Everything needed to go from a raw payload to a JSON analysis
///
/// ```rust
/// use hive_stats::prelude::*;
///
/// let series = WeightSeries::from_json(r#"[20.0, "19.8", 19.5, 19.0]"#, WeightUnit::Kilograms).unwrap();
/// let chart = WeightChart::new(&series, 18.0).unwrap();
/// assert_eq!(chart.exceeded_limit(), 4);
///
/// let result = analyze(series.as_slice()).unwrap();
/// let body = serde_json::to_value(&result).unwrap();
/// assert_eq!(body["trend"], "decline");
/// assert_eq!(body["adjustments"].as_array().unwrap().len(), 3);
/// ```
///
/// Too few readings surface as a distinguishable error:
///
/// ```rust
/// use hive_stats::prelude::*;
///
/// let series = WeightSeries::from_json("[21.4]", WeightUnit::Kilograms).unwrap();
/// let err = VariationAnalyzer::default().analyze_series(&series).unwrap_err();
/// assert!(err.is_insufficient_data());
/// assert!(matches!(err, Error::InsufficientData { expected: 2, actual: 1 }));
/// ```
pub mod prelude {
    pub use hive_core::{
        Error, ReadingRecord, ReadingsPayload, Result, WeightChart, WeightSeries, WeightUnit,
    };
    pub use hive_variation::{
        analyze, Adjustment, AnalysisResult, Level, Trend, VariationAnalyzer, VariationParameters,
        VariationReport, WeightAnalyzer, WeightAnalyzerProperties,
    };
}
