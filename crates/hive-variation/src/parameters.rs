//! Tunable thresholds for variation analysis

use hive_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Mean variation (kg per period) above which the trend is growth
pub const GROWTH_THRESHOLD: f64 = 0.05;

/// Mean variation (kg per period) below which the trend is decline
pub const DECLINE_THRESHOLD: f64 = -0.05;

/// Standard deviations a single variation must exceed to count as anomalous
pub const ANOMALY_SIGMA: f64 = 2.0;

/// Multiple of a trend threshold that marks accentuated growth or decline
pub const ACCENTUATION_FACTOR: f64 = 2.0;

/// Standard deviation (kg) under which a stable series is "nearly constant"
pub const NEAR_STABLE_STD_DEV: f64 = 0.02;

/// Minimum number of adjustments in every result
pub const MIN_ADJUSTMENTS: usize = 3;

/// Parameters for weight-variation analysis
///
/// `Default` reproduces the constants above. Override individual fields with
/// struct update syntax, or deserialize from a service configuration file;
/// missing fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariationParameters {
    /// Fixed growth threshold (kg per period)
    pub growth_threshold: f64,

    /// Fixed decline threshold (kg per period), normally negative
    pub decline_threshold: f64,

    /// Multiplier of the standard deviation giving the anomaly threshold
    pub anomaly_sigma: f64,

    /// Multiplier of the trend thresholds for the accentuated observations
    pub accentuation_factor: f64,

    /// Standard deviation cutoff for the near-perfect stability note
    pub near_stable_std_dev: f64,

    /// Results are padded up to this many adjustments, never fewer than
    /// [`MIN_ADJUSTMENTS`]
    pub min_adjustments: usize,
}

impl Default for VariationParameters {
    fn default() -> Self {
        Self {
            growth_threshold: GROWTH_THRESHOLD,
            decline_threshold: DECLINE_THRESHOLD,
            anomaly_sigma: ANOMALY_SIGMA,
            accentuation_factor: ACCENTUATION_FACTOR,
            near_stable_std_dev: NEAR_STABLE_STD_DEV,
            min_adjustments: MIN_ADJUSTMENTS,
        }
    }
}

impl VariationParameters {
    /// Check that the trend bands are well formed and multipliers are usable
    pub fn validate(&self) -> Result<()> {
        let floats = [
            ("growth_threshold", self.growth_threshold),
            ("decline_threshold", self.decline_threshold),
            ("anomaly_sigma", self.anomaly_sigma),
            ("accentuation_factor", self.accentuation_factor),
            ("near_stable_std_dev", self.near_stable_std_dev),
        ];
        if let Some((name, value)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "{name} must be finite, got {value}"
            )));
        }

        if self.decline_threshold > self.growth_threshold {
            return Err(Error::InvalidParameter(format!(
                "decline_threshold ({}) must not exceed growth_threshold ({})",
                self.decline_threshold, self.growth_threshold
            )));
        }
        if self.anomaly_sigma < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "anomaly_sigma must be non-negative, got {}",
                self.anomaly_sigma
            )));
        }
        if self.accentuation_factor < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "accentuation_factor must be non-negative, got {}",
                self.accentuation_factor
            )));
        }
        if self.near_stable_std_dev < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "near_stable_std_dev must be non-negative, got {}",
                self.near_stable_std_dev
            )));
        }
        if self.min_adjustments < MIN_ADJUSTMENTS {
            return Err(Error::InvalidParameter(format!(
                "min_adjustments must be at least {MIN_ADJUSTMENTS}, got {}",
                self.min_adjustments
            )));
        }
        Ok(())
    }

    /// Padding target, floored at [`MIN_ADJUSTMENTS`]
    pub fn adjustment_floor(&self) -> usize {
        self.min_adjustments.max(MIN_ADJUSTMENTS)
    }

    /// Mean variation above which growth is reported as accentuated
    pub fn accentuated_growth(&self) -> f64 {
        self.growth_threshold * self.accentuation_factor
    }

    /// Mean variation below which decline is reported as significant
    pub fn significant_decline(&self) -> f64 {
        self.decline_threshold * self.accentuation_factor
    }
}
