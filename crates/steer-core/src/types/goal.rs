use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::record::coerce_numeric;

/// Caller-defined goal state: metric name to target value. Immutable per
/// call; callers may swap it between calls. Non-numeric targets are legal
/// input; they produce a `None` analysis for that metric instead of failing
/// the batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalState(pub BTreeMap<String, Value>);

impl GoalState {
    pub fn new(targets: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self(targets.into_iter().collect())
    }

    /// Convenience constructor for all-numeric goals.
    pub fn from_targets<'a>(targets: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self::new(
            targets
                .into_iter()
                .map(|(k, v)| (k.to_string(), Value::from(v))),
        )
    }

    /// An empty goal is a legitimate idle state, not an error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Metric names in the goal, in deterministic (sorted) order.
    pub fn metrics(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// The numeric target for a metric, if the metric is present and its
    /// target coerces to a number.
    pub fn numeric_target(&self, metric: &str) -> Option<f64> {
        self.0.get(metric).and_then(coerce_numeric)
    }
}
