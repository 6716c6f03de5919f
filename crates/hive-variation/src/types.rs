//! Types produced by weight-variation analysis

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse direction of the average variation over a period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Mean variation above the growth threshold
    Growth,
    /// Mean variation below the decline threshold
    Decline,
    /// Anything in between
    Stability,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Growth => write!(f, "growth"),
            Trend::Decline => write!(f, "decline"),
            Trend::Stability => write!(f, "stability"),
        }
    }
}

/// Severity of an adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Critical,
    Mild,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Critical => write!(f, "critical"),
            Level::Mild => write!(f, "mild"),
        }
    }
}

/// A single diagnostic observation with its severity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub text: String,
    pub level: Level,
}

impl Adjustment {
    pub fn new(text: impl Into<String>, level: Level) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }

    pub fn critical(text: impl Into<String>) -> Self {
        Self::new(text, Level::Critical)
    }

    pub fn mild(text: impl Into<String>) -> Self {
        Self::new(text, Level::Mild)
    }

    pub fn is_critical(&self) -> bool {
        self.level == Level::Critical
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.text)
    }
}

/// Aggregates of the variation series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariationStatistics {
    /// Mean variation per period
    pub mean: f64,
    /// Population standard deviation against `mean`
    pub std_dev: f64,
    /// Most negative variation
    pub min: f64,
    /// Largest positive variation
    pub max: f64,
    /// Number of variations (readings - 1)
    pub count: usize,
}

/// Trend plus ordered adjustments for one box over one period
///
/// Serializes to `{"trend": "...", "adjustments": [{"text": "...", "level": "..."}]}`.
/// Only the analyzer builds one, so every result carries at least three adjustments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    trend: Trend,
    adjustments: Vec<Adjustment>,
}

impl AnalysisResult {
    pub(crate) fn new(trend: Trend, adjustments: Vec<Adjustment>) -> Self {
        Self { trend, adjustments }
    }

    pub fn trend(&self) -> Trend {
        self.trend
    }

    /// Adjustments in generation order
    pub fn adjustments(&self) -> &[Adjustment] {
        &self.adjustments
    }

    pub fn critical_count(&self) -> usize {
        self.adjustments.iter().filter(|a| a.is_critical()).count()
    }

    pub fn has_critical(&self) -> bool {
        self.adjustments.iter().any(Adjustment::is_critical)
    }

    pub fn into_parts(self) -> (Trend, Vec<Adjustment>) {
        (self.trend, self.adjustments)
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Weight Variation Analysis:")?;
        writeln!(f, "  Trend: {}", self.trend)?;
        writeln!(f, "  Adjustments: {}", self.adjustments.len())?;
        for adjustment in &self.adjustments {
            writeln!(f, "    {}", adjustment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_wire_names() {
        assert_eq!(serde_json::to_string(&Trend::Growth).unwrap(), "\"growth\"");
        assert_eq!(serde_json::to_string(&Trend::Decline).unwrap(), "\"decline\"");
        assert_eq!(serde_json::to_string(&Trend::Stability).unwrap(), "\"stability\"");
        assert_eq!(Trend::Stability.to_string(), "stability");
    }

    #[test]
    fn test_result_wire_shape() {
        let result = AnalysisResult::new(
            Trend::Decline,
            vec![Adjustment::critical("drop"), Adjustment::mild("keep monitoring")],
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["trend"], "decline");
        assert_eq!(json["adjustments"][0]["text"], "drop");
        assert_eq!(json["adjustments"][0]["level"], "critical");
        assert_eq!(json["adjustments"][1]["level"], "mild");
    }

    #[test]
    fn test_critical_count() {
        let result = AnalysisResult::new(
            Trend::Stability,
            vec![
                Adjustment::mild("a"),
                Adjustment::critical("b"),
                Adjustment::mild("c"),
            ],
        );
        assert_eq!(result.critical_count(), 1);
        assert!(result.has_critical());
        assert_eq!(result.adjustments()[1].to_string(), "[critical] b");
    }
}
