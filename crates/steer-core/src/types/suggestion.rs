use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::analysis::AnalysisSnapshot;
use super::record::ActionRecord;

/// Analytics attached to a suggestion, nested under `goal_feedback` in the
/// serialized form so the REST layer can pass suggestions through verbatim:
/// `{"action": ..., "goal_feedback": {"analysis": {...}}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalFeedback {
    pub analysis: AnalysisSnapshot,
    /// Per-metric suggested deltas (`target_delta` hints) from the strategy.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub adjustments: BTreeMap<String, f64>,
}

/// A caller-supplied action enriched with goal feedback. The batch a caller
/// receives always matches its input in length and order; a strategy failure
/// for one action becomes an error-flagged pass-through suggestion rather
/// than a dropped entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The (possibly adjusted) action.
    pub action: ActionRecord,
    pub goal_feedback: GoalFeedback,
    /// Natural-language framing from personality-style strategies. Never
    /// changes the numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Set when the strategy computation for this action failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Suggestion {
    /// A no-op suggestion: the action unchanged, no analysis. This is what a
    /// goalless call produces for every action.
    pub fn passthrough(action: ActionRecord) -> Self {
        Self {
            action,
            goal_feedback: GoalFeedback::default(),
            note: None,
            error: None,
        }
    }

    /// An error-flagged pass-through for a failed strategy computation.
    pub fn failed(action: ActionRecord, analysis: AnalysisSnapshot, error: impl Into<String>) -> Self {
        Self {
            action,
            goal_feedback: GoalFeedback {
                analysis,
                adjustments: BTreeMap::new(),
            },
            note: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_to_the_rest_response_shape() {
        let action = ActionRecord::new([("progress".to_string(), json!(4))]);
        let suggestion = Suggestion::passthrough(action);
        let value = serde_json::to_value(&suggestion).unwrap();

        assert!(value.get("action").is_some());
        assert!(value["goal_feedback"].get("analysis").is_some());
        // Empty optional fields stay off the wire.
        assert!(value.get("note").is_none());
        assert!(value.get("error").is_none());
        assert!(value["goal_feedback"].get("adjustments").is_none());
    }
}
