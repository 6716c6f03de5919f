//! Normalization of raw weight readings
//!
//! Sensor rows arrive in loose shapes: bare numbers, numeric strings, or
//! records carrying a timestamp and a kind label. Everything is coerced here
//! into a [`WeightSeries`] of finite kilogram values before any analysis runs.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Unit the raw values were recorded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Values are already kilograms
    #[default]
    Kilograms,
    /// Scale output in grams, as stored by the sensors
    Grams,
}

impl WeightUnit {
    /// Convert a raw value in this unit to kilograms
    pub fn to_kilograms(self, value: f64) -> f64 {
        match self {
            WeightUnit::Kilograms => value,
            WeightUnit::Grams => value / 1000.0,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightUnit::Kilograms => write!(f, "kg"),
            WeightUnit::Grams => write!(f, "g"),
        }
    }
}

/// A weight value as found in a raw row: either a number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Coerce to a number, describing the failure on error
    pub fn as_f64(&self) -> std::result::Result<f64, String> {
        match self {
            RawValue::Number(v) => Ok(*v),
            RawValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("expected a number, got {s:?}")),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

/// One raw reading row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingRecord {
    /// Measured weight
    #[serde(alias = "peso", alias = "peso_atual")]
    pub value: RawValue,

    /// When the reading was taken, passed through untouched
    #[serde(default, alias = "criado_em", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Free-form kind label attached by the producer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ReadingRecord {
    pub fn new(value: impl Into<RawValue>) -> Self {
        Self {
            value: value.into(),
            timestamp: None,
            kind: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

/// Accepted JSON shapes for a batch of readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReadingsPayload {
    /// `[10.2, "10.4", ...]`
    Values(Vec<RawValue>),
    /// `[{"value": 10.2, "timestamp": "...", "kind": "..."}, ...]`
    Records(Vec<ReadingRecord>),
}

/// Ordered sequence of finite weights in kilograms for one box
///
/// Construction validates every value; an empty or single-reading series is
/// still a valid series, the cardinality requirement belongs to the analyzer.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct WeightSeries {
    values: Vec<f64>,
}

impl WeightSeries {
    /// Wrap kilogram values, rejecting NaN and infinities
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(Error::non_finite(index, value));
        }
        Ok(Self { values })
    }

    /// Coerce raw records, converting from `unit` to kilograms
    pub fn from_records(records: &[ReadingRecord], unit: WeightUnit) -> Result<Self> {
        let raw: Vec<&RawValue> = records.iter().map(|r| &r.value).collect();
        Self::from_raw(&raw, unit)
    }

    /// Parse a JSON array of numbers or of reading records
    pub fn from_json(json: &str, unit: WeightUnit) -> Result<Self> {
        let payload: ReadingsPayload = serde_json::from_str(json)?;
        Self::from_payload(&payload, unit)
    }

    /// Normalize an already-deserialized payload
    pub fn from_payload(payload: &ReadingsPayload, unit: WeightUnit) -> Result<Self> {
        match payload {
            ReadingsPayload::Values(values) => {
                let raw: Vec<&RawValue> = values.iter().collect();
                Self::from_raw(&raw, unit)
            }
            ReadingsPayload::Records(records) => Self::from_records(records, unit),
        }
    }

    fn from_raw(raw: &[&RawValue], unit: WeightUnit) -> Result<Self> {
        let values = raw
            .iter()
            .enumerate()
            .map(|(index, value)| {
                value
                    .as_f64()
                    .map(|v| unit.to_kilograms(v))
                    .map_err(|reason| Error::invalid_record(index, reason))
            })
            .collect::<Result<Vec<f64>>>()?;

        debug!(count = values.len(), %unit, "normalized weight readings");
        Self::from_values(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Net change between the first and last reading
    pub fn net_change(&self) -> Option<f64> {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) if self.values.len() >= 2 => Some(last - first),
            _ => None,
        }
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }
}

impl AsRef<[f64]> for WeightSeries {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl TryFrom<Vec<f64>> for WeightSeries {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::from_values(values)
    }
}
