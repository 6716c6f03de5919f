//! Weight chart summary for a box over a period

use crate::error::{Error, Result};
use crate::readings::WeightSeries;
use serde::{Deserialize, Serialize};

/// Chart-ready view of a weight series against the box's weight limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightChart {
    /// Configured weight limit of the box in kilograms (0 when unset)
    pub weight_limit: f64,
    /// 1-based positions of the four reference points along the period
    pub labels: Vec<String>,
    /// Recorded weights in kilograms
    pub data: Vec<f64>,
    pub legend: Vec<String>,
}

impl WeightChart {
    /// Build the chart for `series`; fails on an empty series
    pub fn new(series: &WeightSeries, weight_limit: f64) -> Result<Self> {
        if series.is_empty() {
            return Err(Error::InsufficientData {
                expected: 1,
                actual: 0,
            });
        }
        if !weight_limit.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "weight limit must be finite, got {weight_limit}"
            )));
        }

        let labels = reference_points(series.len())
            .iter()
            .map(|i| (i + 1).to_string())
            .collect();

        Ok(Self {
            weight_limit,
            labels,
            data: series.as_slice().to_vec(),
            legend: vec![
                "Recorded weight".to_string(),
                format!("Limit {weight_limit}kg"),
            ],
        })
    }

    /// Number of readings strictly above the limit; 0 when no limit is set
    pub fn exceeded_limit(&self) -> usize {
        if self.weight_limit <= 0.0 {
            return 0;
        }
        self.data.iter().filter(|&&w| w > self.weight_limit).count()
    }
}

/// Start, first quarter, midpoint and end of a series of length `n` (n >= 1)
fn reference_points(n: usize) -> [usize; 4] {
    [0, n / 4, n / 2, n - 1]
}
