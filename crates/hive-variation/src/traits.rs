//! Core traits for weight analysis
//!
//! Any analyzer that turns a box's readings into a trend and a list of
//! adjustments implements [`WeightAnalyzer`]. The deterministic
//! [`VariationAnalyzer`](crate::VariationAnalyzer) is one implementation; a
//! service may plug in others (for example a remote model) behind the same seam.

use crate::types::AnalysisResult;
use hive_core::{Result, WeightSeries};

/// Intrinsic properties of an analyzer
pub trait WeightAnalyzerProperties {
    /// Minimum number of readings required for analysis
    fn minimum_readings(&self) -> usize;

    /// Name of the analysis method
    fn method_name(&self) -> &str;

    /// Check if the analyzer can handle the given number of readings
    fn can_handle_size(&self, size: usize) -> bool {
        size >= self.minimum_readings()
    }
}

/// Analysis of an ordered weight sequence for one box
pub trait WeightAnalyzer: WeightAnalyzerProperties {
    /// Analyze readings in kilograms, oldest first
    fn analyze(&self, readings: &[f64]) -> Result<AnalysisResult>;

    /// Analyze an already validated series
    fn analyze_series(&self, series: &WeightSeries) -> Result<AnalysisResult> {
        self.analyze(series.as_slice())
    }

    /// Analyze several boxes; fails on the first box that cannot be analyzed
    fn analyze_batch(&self, batch: &[&[f64]]) -> Result<Vec<AnalysisResult>> {
        batch.iter().map(|readings| self.analyze(readings)).collect()
    }
}
