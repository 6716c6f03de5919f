//! Core types for hive weight analysis
//!
//! This crate holds what every analyzer shares:
//!
//! - **Errors**: one [`Error`] enum and a [`Result`] alias for the workspace
//! - **Readings**: coercion of loose sensor rows into a validated [`WeightSeries`]
//! - **Charts**: the per-period [`WeightChart`] summary shown next to an analysis
//!
//! # Example
//!
//! ```rust
//! use hive_core::{WeightSeries, WeightUnit};
//!
//! let series = WeightSeries::from_json(r#"[25000, "25350", 25100]"#, WeightUnit::Grams).unwrap();
//! assert_eq!(series.len(), 3);
//! assert_eq!(series.first(), Some(25.0));
//! ```

pub mod chart;
pub mod error;
pub mod readings;

pub use chart::WeightChart;
pub use error::{Error, Result, MIN_ANALYSIS_READINGS};
pub use readings::{RawValue, ReadingRecord, ReadingsPayload, WeightSeries, WeightUnit};
