//! Deterministic weight-variation analyzer
//!
//! The analyzer works on consecutive differences between readings. Their mean
//! is compared against fixed trend thresholds, while their spread gives a
//! data-relative anomaly threshold for individual jumps and drops.

use crate::observations;
use crate::parameters::VariationParameters;
use crate::statistics::variation_series;
use crate::traits::{WeightAnalyzer, WeightAnalyzerProperties};
use crate::types::{AnalysisResult, Trend, VariationStatistics};
use hive_core::{Error, Result, MIN_ANALYSIS_READINGS};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Full output of one analysis, including the intermediate statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariationReport {
    pub statistics: VariationStatistics,
    pub anomaly_threshold: f64,
    pub result: AnalysisResult,
}

/// Weight-variation analyzer
///
/// Pure and stateless apart from its parameters, so one instance can be shared
/// across threads and calls. Built either with `Default` or through
/// [`VariationAnalyzer::with_parameters`], which validates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VariationAnalyzer {
    params: VariationParameters,
}

impl VariationAnalyzer {
    fn new(params: VariationParameters) -> Self {
        Self { params }
    }

    /// Create an analyzer, rejecting inconsistent parameters
    pub fn with_parameters(params: VariationParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self::new(params))
    }

    pub fn parameters(&self) -> &VariationParameters {
        &self.params
    }

    /// Classify a mean variation into exactly one trend
    pub fn classify(&self, mean: f64) -> Trend {
        if mean > self.params.growth_threshold {
            Trend::Growth
        } else if mean < self.params.decline_threshold {
            Trend::Decline
        } else {
            Trend::Stability
        }
    }

    /// Analyze and also return the statistics behind the result
    #[instrument(skip(self, readings), fields(n_readings = readings.len()))]
    pub fn analyze_detailed(&self, readings: &[f64]) -> Result<VariationReport> {
        validate(readings)?;

        let variations = variation_series(readings);
        let statistics = VariationStatistics::from_variations(&variations)
            .ok_or_else(|| Error::insufficient_readings(readings.len()))?;
        debug!(
            mean = statistics.mean,
            std_dev = statistics.std_dev,
            min = statistics.min,
            max = statistics.max,
            "variation statistics"
        );

        let trend = self.classify(statistics.mean);
        let anomaly_threshold = statistics.anomaly_threshold(self.params.anomaly_sigma);
        debug!(%trend, anomaly_threshold, "classified trend");

        let adjustments = observations::generate(&statistics, trend, anomaly_threshold, &self.params);

        Ok(VariationReport {
            statistics,
            anomaly_threshold,
            result: AnalysisResult::new(trend, adjustments),
        })
    }
}

fn validate(readings: &[f64]) -> Result<()> {
    if readings.len() < MIN_ANALYSIS_READINGS {
        warn!(n_readings = readings.len(), "not enough readings to analyze");
        return Err(Error::insufficient_readings(readings.len()));
    }
    if let Some((index, &value)) = readings.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        warn!(index, "non-finite reading");
        return Err(Error::non_finite(index, value));
    }
    Ok(())
}

impl WeightAnalyzerProperties for VariationAnalyzer {
    fn minimum_readings(&self) -> usize {
        MIN_ANALYSIS_READINGS
    }

    fn method_name(&self) -> &str {
        "Weight Variation"
    }
}

impl WeightAnalyzer for VariationAnalyzer {
    fn analyze(&self, readings: &[f64]) -> Result<AnalysisResult> {
        self.analyze_detailed(readings).map(|report| report.result)
    }
}

/// Analyze readings with the default parameters
pub fn analyze(readings: &[f64]) -> Result<AnalysisResult> {
    VariationAnalyzer::default().analyze(readings)
}
