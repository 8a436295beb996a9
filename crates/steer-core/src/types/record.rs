use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single observed action: an opaque mapping of metric names to values,
/// stamped with its arrival time. Only the keys relevant to the current goal
/// are ever interpreted; everything else rides along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Caller-supplied payload. Values are opaque JSON; numeric metrics are
    /// read through [`coerce_numeric`].
    pub fields: BTreeMap<String, Value>,
    /// When the action was observed. Stamped at construction when the caller
    /// does not provide one, so age-based retention always has a reference.
    pub recorded_at: DateTime<Utc>,
}

impl ActionRecord {
    /// Create a record stamped with the current time.
    pub fn new(fields: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self::at(fields, Utc::now())
    }

    /// Create a record with an explicit observation time.
    pub fn at(
        fields: impl IntoIterator<Item = (String, Value)>,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            fields: fields.into_iter().collect(),
            recorded_at,
        }
    }

    /// Convenience constructor for all-numeric records.
    pub fn from_metrics<'a>(metrics: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self::new(
            metrics
                .into_iter()
                .map(|(k, v)| (k.to_string(), Value::from(v))),
        )
    }

    /// Read a metric as a number, applying lenient coercion.
    pub fn numeric(&self, metric: &str) -> Option<f64> {
        self.fields.get(metric).and_then(coerce_numeric)
    }

    /// Whether the record carries the given metric at all (numeric or not).
    pub fn has_metric(&self, metric: &str) -> bool {
        self.fields.contains_key(metric)
    }
}

/// Lenient numeric coercion: JSON numbers pass through, numeric strings are
/// trimmed and parsed, everything else is `None`. Callers feed records from
/// heterogeneous pipelines, so string-wrapped numbers are common.
pub fn coerce_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()
        }
        _ => None,
    }
}
