use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use steer_core::config::{defaults, StrategyConfig};
use steer_core::errors::{ConfigError, StrategyError};
use steer_core::traits::IFeedbackStrategy;
use steer_core::types::{
    ActionRecord, AnalysisSnapshot, GoalFeedback, GoalState, Suggestion,
};

/// Proportional nudging: for each goal metric present in the action, suggest
/// a delta that closes a fixed fraction of the gap, optionally clamped to a
/// maximum step.
///
/// Metrics in `one_direction_layers` are decrease-only: they model
/// monotonic-improvement metrics like response time, which should only ever
/// be pushed down. For those, a positive delta is suppressed to 0: a metric
/// already past its goal is never nudged back toward worse.
#[derive(Debug, Clone)]
pub struct SimpleStrategy {
    step_fraction: f64,
    max_step: Option<f64>,
    one_direction_layers: BTreeSet<String>,
}

impl SimpleStrategy {
    pub fn from_config(config: &StrategyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            step_fraction: config.step_fraction,
            max_step: config.max_step,
            one_direction_layers: config.one_direction_layers.clone(),
        })
    }

    pub fn with_defaults() -> Self {
        Self {
            step_fraction: defaults::DEFAULT_STEP_FRACTION,
            max_step: None,
            one_direction_layers: BTreeSet::new(),
        }
    }

    fn delta_for(&self, metric: &str, gap: f64) -> f64 {
        let mut delta = gap * self.step_fraction;
        if let Some(max_step) = self.max_step {
            delta = delta.clamp(-max_step, max_step);
        }
        if delta > 0.0 && self.one_direction_layers.contains(metric) {
            delta = 0.0;
        }
        delta
    }
}

impl Default for SimpleStrategy {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl IFeedbackStrategy for SimpleStrategy {
    fn name(&self) -> &str {
        "simple"
    }

    fn suggest(
        &self,
        goal: &GoalState,
        analysis: &AnalysisSnapshot,
        action: &ActionRecord,
    ) -> Result<Suggestion, StrategyError> {
        // A goalless call is a legitimate idle state.
        if goal.is_empty() {
            return Ok(Suggestion::passthrough(action.clone()));
        }

        let mut adjusted = action.clone();
        let mut adjustments = BTreeMap::new();

        for (metric, metric_analysis) in analysis {
            if !action.has_metric(metric) {
                continue;
            }
            let (Some(gap), Some(current)) = (metric_analysis.gap, metric_analysis.current)
            else {
                // Unobserved metric or non-numeric target: nothing to nudge.
                continue;
            };

            let delta = self.delta_for(metric, gap);
            adjustments.insert(metric.clone(), delta);
            adjusted
                .fields
                .insert(metric.clone(), Value::from(current + delta));
        }

        Ok(Suggestion {
            action: adjusted,
            goal_feedback: GoalFeedback {
                analysis: analysis.clone(),
                adjustments,
            },
            note: None,
            error: None,
        })
    }
}
