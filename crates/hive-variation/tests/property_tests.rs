//! Property-based tests for weight-variation analysis
//!
//! These hold for every valid sequence of readings regardless of shape.

#[cfg(test)]
mod property_tests {
    use hive_variation::observations::NO_FURTHER_ANOMALIES;
    use hive_variation::*;
    use proptest::prelude::*;

    fn readings() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-50.0..150.0f64, 2..200)
    }

    proptest! {
        // Property: the same input always produces the same result
        #[test]
        fn prop_deterministic(values in readings()) {
            let first = analyze(&values).unwrap();
            let second = analyze(&values).unwrap();
            prop_assert_eq!(first, second);
        }

        // Property: at least the minimum number of adjustments, at most one per gate
        #[test]
        fn prop_adjustment_count_bounds(values in readings()) {
            let result = analyze(&values).unwrap();
            let n = result.adjustments().len();
            prop_assert!(n >= MIN_ADJUSTMENTS, "only {} adjustments", n);
            // growth, decline and near-constant notes are mutually exclusive
            prop_assert!(n <= 4, "{} adjustments", n);
        }

        // Property: trend follows the mean-of-variations threshold rule
        #[test]
        fn prop_trend_matches_mean(values in readings()) {
            let report = VariationAnalyzer::default().analyze_detailed(&values).unwrap();
            let mean = report.statistics.mean;
            let expected = if mean > GROWTH_THRESHOLD {
                Trend::Growth
            } else if mean < DECLINE_THRESHOLD {
                Trend::Decline
            } else {
                Trend::Stability
            };
            prop_assert_eq!(report.result.trend(), expected);
        }

        // Property: exactly one summary, critical only when declining
        #[test]
        fn prop_single_summary(values in readings()) {
            let result = analyze(&values).unwrap();
            let summaries: Vec<_> = result
                .adjustments()
                .iter()
                .filter(|a| a.text.starts_with("Overall trend"))
                .collect();
            prop_assert_eq!(summaries.len(), 1);
            prop_assert_eq!(
                summaries[0].level == Level::Critical,
                result.trend() == Trend::Decline
            );
        }

        // Property: padding only ever trails real findings
        #[test]
        fn prop_padding_at_end(values in readings()) {
            let result = analyze(&values).unwrap();
            let texts: Vec<&str> = result.adjustments().iter().map(|a| a.text.as_str()).collect();
            if let Some(first_pad) = texts.iter().position(|t| *t == NO_FURTHER_ANOMALIES) {
                prop_assert!(texts[first_pad..].iter().all(|t| *t == NO_FURTHER_ANOMALIES));
                prop_assert_eq!(texts.len(), MIN_ADJUSTMENTS);
            }
        }

        // Property: spread is non-negative and bounds the extremes
        #[test]
        fn prop_statistics_consistent(values in readings()) {
            let report = VariationAnalyzer::default().analyze_detailed(&values).unwrap();
            let stats = report.statistics;
            prop_assert!(stats.std_dev >= 0.0);
            prop_assert!(stats.min <= stats.mean + 1e-9);
            prop_assert!(stats.mean <= stats.max + 1e-9);
            prop_assert_eq!(stats.count, values.len() - 1);
            prop_assert_eq!(report.anomaly_threshold, stats.std_dev * ANOMALY_SIGMA);
        }

        // Property: a constant offset does not change the analysis
        #[test]
        fn prop_level_invariant_trend(values in readings(), offset in -10.0..10.0f64) {
            let shifted: Vec<f64> = values.iter().map(|v| v + offset).collect();
            let base = VariationAnalyzer::default().analyze_detailed(&values).unwrap();
            let moved = VariationAnalyzer::default().analyze_detailed(&shifted).unwrap();
            // Deltas only move by rounding error
            prop_assert!((base.statistics.mean - moved.statistics.mean).abs() < 1e-9);
            if (base.statistics.mean - GROWTH_THRESHOLD).abs() > 1e-6
                && (base.statistics.mean - DECLINE_THRESHOLD).abs() > 1e-6
            {
                prop_assert_eq!(base.result.trend(), moved.result.trend());
            }
        }
    }

    #[test]
    fn test_random_walks_always_analyzable() {
        use rand::prelude::*;
        use rand_distr::Normal;

        let mut rng = StdRng::seed_from_u64(7);
        let step = Normal::new(0.0, 0.3).unwrap();
        for len in [2, 3, 10, 100, 1000] {
            let mut weight = 30.0;
            let walk: Vec<f64> = (0..len)
                .map(|_| {
                    weight += step.sample(&mut rng);
                    weight
                })
                .collect();
            let result = analyze(&walk).unwrap();
            assert!(result.adjustments().len() >= MIN_ADJUSTMENTS);
        }
    }
}
