use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Qualitative direction of the latest observation relative to baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// How a single metric is tracking against its goal.
///
/// A metric with no observations ever yields `current: None`, `gap: None`,
/// `trend: Flat`, `progress_ratio: 0`. A non-numeric goal target yields
/// `goal: None` with the same neutral fields: malformed goals degrade
/// per-metric instead of aborting the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricAnalysis {
    /// Numeric target, `None` when the goal value does not coerce to a number.
    pub goal: Option<f64>,
    /// Latest observed value for the metric.
    pub current: Option<f64>,
    /// `goal - current`; requires both to be numeric.
    pub gap: Option<f64>,
    /// Rolling reference value. Falls back to `current` on a metric's
    /// first-ever observation.
    pub baseline: Option<f64>,
    pub trend: Trend,
    /// `(current - baseline) / (goal - baseline)`, defined as 0 when
    /// `goal == baseline` or when there is no observation. Not clamped:
    /// values past the goal exceed 1.0, regressions go negative.
    pub progress_ratio: f64,
}

impl MetricAnalysis {
    /// The neutral analysis used for unobserved metrics and non-numeric
    /// goal targets.
    pub fn unobserved(goal: Option<f64>) -> Self {
        Self {
            goal,
            current: None,
            gap: None,
            baseline: None,
            trend: Trend::Flat,
            progress_ratio: 0.0,
        }
    }
}

/// Per-metric analytics for one `suggest_actions` cycle, keyed by metric name.
pub type AnalysisSnapshot = BTreeMap<String, MetricAnalysis>;
