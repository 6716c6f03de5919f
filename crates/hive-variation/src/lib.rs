//! # Hive Weight Variation Analysis
//!
//! Deterministic analysis of a time-ordered sequence of hive weights. The
//! analyzer computes the variation between consecutive readings, summarizes it,
//! classifies the period as growth, decline or stability, and produces a list
//! of severity-tagged observations for the beekeeper.
//!
//! ## Key Features
//!
//! - **Pure**: no I/O and no shared state, safe to call from any thread
//! - **Deterministic**: same readings, same result, same adjustment order
//! - **Configurable**: every threshold is a named, overridable parameter
//! - **Trait seam**: other analyzers can implement [`WeightAnalyzer`]
//!
//! ## Usage
//!
//! ```rust
//! use hive_variation::{analyze, Level, Trend};
//!
//! let result = analyze(&[20.0, 19.8, 19.5, 19.0]).unwrap();
//! assert_eq!(result.trend(), Trend::Decline);
//! assert!(result.adjustments().len() >= 3);
//! assert_eq!(result.adjustments()[0].level, Level::Critical);
//! ```

pub mod analyzer;
pub mod observations;
pub mod parameters;
pub mod statistics;
pub mod traits;
pub mod types;

// Re-exports
pub use analyzer::{analyze, VariationAnalyzer, VariationReport};
pub use parameters::{
    VariationParameters, ACCENTUATION_FACTOR, ANOMALY_SIGMA, DECLINE_THRESHOLD, GROWTH_THRESHOLD,
    MIN_ADJUSTMENTS, NEAR_STABLE_STD_DEV,
};
pub use statistics::variation_series;
pub use traits::{WeightAnalyzer, WeightAnalyzerProperties};
pub use types::{Adjustment, AnalysisResult, Level, Trend, VariationStatistics};
