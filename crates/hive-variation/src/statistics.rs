//! Variation series and its summary statistics

use crate::types::VariationStatistics;

/// Consecutive differences: `out[i] = readings[i + 1] - readings[i]`
pub fn variation_series(readings: &[f64]) -> Vec<f64> {
    readings.windows(2).map(|w| w[1] - w[0]).collect()
}

impl VariationStatistics {
    /// Summarize a non-empty variation series
    ///
    /// Returns `None` for an empty series. The variance is the population
    /// variance taken against the same mean that is reported.
    pub fn from_variations(variations: &[f64]) -> Option<Self> {
        if variations.is_empty() {
            return None;
        }

        let n = variations.len() as f64;
        let mean = variations.iter().sum::<f64>() / n;
        let variance = variations.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n;

        let (min, max) = variations
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &d| {
                (lo.min(d), hi.max(d))
            });

        Some(Self {
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
            count: variations.len(),
        })
    }

    /// Data-relative cutoff for flagging a single variation as anomalous
    pub fn anomaly_threshold(&self, sigma: f64) -> f64 {
        self.std_dev * sigma
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_variation_series() {
        let deltas = variation_series(&[10.0, 10.5, 10.25, 11.0]);
        assert_eq!(deltas, vec![0.5, -0.25, 0.75]);

        assert!(variation_series(&[]).is_empty());
        assert!(variation_series(&[3.0]).is_empty());
    }

    #[test]
    fn test_statistics_known_values() {
        let stats = VariationStatistics::from_variations(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_relative_eq!(stats.mean, 2.5);
        // population variance = 1.25
        assert_relative_eq!(stats.std_dev, 1.25_f64.sqrt());
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.count, 4);
        assert_relative_eq!(stats.anomaly_threshold(2.0), 2.0 * 1.25_f64.sqrt());
    }

    #[test]
    fn test_single_variation_has_zero_spread() {
        let stats = VariationStatistics::from_variations(&[-0.4]).unwrap();
        assert_eq!(stats.mean, -0.4);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.min, -0.4);
        assert_eq!(stats.max, -0.4);
    }

    #[test]
    fn test_uniform_variations() {
        let stats = VariationStatistics::from_variations(&[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.anomaly_threshold(2.0), 0.0);
    }

    #[test]
    fn test_empty_variations() {
        assert!(VariationStatistics::from_variations(&[]).is_none());
    }
}
