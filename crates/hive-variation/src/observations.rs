//! Diagnostic observations derived from variation statistics
//!
//! Observations are generated in a fixed order so results are reproducible:
//!
//! 1. accentuated growth (mild)
//! 2. significant reduction (critical)
//! 3. largest positive variation above the anomaly threshold (mild)
//! 4. sharpest drop above the anomaly threshold (critical)
//! 5. near-perfect stability (mild)
//! 6. period summary, critical only for a declining trend
//! 7. padding up to the minimum adjustment count

use crate::parameters::VariationParameters;
use crate::types::{Adjustment, Trend, VariationStatistics};
use tracing::debug;

/// Text used to pad results that have few findings
pub const NO_FURTHER_ANOMALIES: &str =
    "No further anomalies detected in this period. Keep monitoring the hive weight regularly.";

/// Build the ordered adjustments for one analysis
pub fn generate(
    stats: &VariationStatistics,
    trend: Trend,
    anomaly_threshold: f64,
    params: &VariationParameters,
) -> Vec<Adjustment> {
    let mut adjustments = Vec::with_capacity(params.adjustment_floor().max(6));

    if stats.mean > params.accentuated_growth() {
        adjustments.push(accentuated_growth(stats.mean));
    }

    if stats.mean < params.significant_decline() {
        adjustments.push(significant_reduction(stats.mean));
    }

    if stats.max > anomaly_threshold {
        debug!(max = stats.max, anomaly_threshold, "positive variation above anomaly threshold");
        adjustments.push(positive_spike(stats.max));
    }

    if stats.min.abs() > anomaly_threshold {
        debug!(min = stats.min, anomaly_threshold, "negative variation above anomaly threshold");
        adjustments.push(sharp_drop(stats.min, stats.std_dev));
    }

    if trend == Trend::Stability && stats.std_dev < params.near_stable_std_dev {
        adjustments.push(near_constant(stats.std_dev));
    }

    adjustments.push(summary(stats, trend));

    pad(&mut adjustments, params.adjustment_floor());
    adjustments
}

fn accentuated_growth(mean: f64) -> Adjustment {
    Adjustment::mild(format!(
        "Accentuated weight growth: average variation of {mean:.3} kg per period. \
         This points to a strong nectar inflow or a growing forager population. \
         Check the colony for swarming risk caused by overcrowding and add space if needed."
    ))
}

fn significant_reduction(mean: f64) -> Adjustment {
    Adjustment::critical(format!(
        "Significant weight reduction: average variation of {mean:.3} kg per period. \
         Possible causes are scarcity of bloom, excess humidity or accelerated honey consumption. \
         Check hive ventilation, look for pests and consider supplemental feeding."
    ))
}

fn positive_spike(max: f64) -> Adjustment {
    Adjustment::mild(format!(
        "Largest single increase of {max:.3} kg between consecutive readings, well above the usual variation. \
         It may reflect an intense single-day nectar flow or a measurement error. \
         Recalibrate the scale if the pattern does not repeat."
    ))
}

fn sharp_drop(min: f64, std_dev: f64) -> Adjustment {
    Adjustment::critical(format!(
        "Sharpest single drop of {min:.3} kg between consecutive readings (standard deviation {std_dev:.3} kg). \
         It may come from honey removal, rain interfering with the scale or increased consumption. \
         Inspect the hive immediately if the drop persists."
    ))
}

fn near_constant(std_dev: f64) -> Adjustment {
    Adjustment::mild(format!(
        "Weight nearly constant over the period (standard deviation {std_dev:.3} kg). \
         This is typical of low foraging activity or the off-season. \
         Check the available bloom and the health of the colony."
    ))
}

fn summary(stats: &VariationStatistics, trend: Trend) -> Adjustment {
    let text = format!(
        "Overall trend: {trend}, with an average variation of {:.3} kg and a standard deviation of {:.3} kg per period.",
        stats.mean, stats.std_dev
    );
    match trend {
        Trend::Decline => Adjustment::critical(text),
        Trend::Growth | Trend::Stability => Adjustment::mild(text),
    }
}

fn pad(adjustments: &mut Vec<Adjustment>, min_adjustments: usize) {
    while adjustments.len() < min_adjustments {
        adjustments.push(Adjustment::mild(NO_FURTHER_ANOMALIES));
    }
}
