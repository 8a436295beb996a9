use serde::{Deserialize, Serialize};

/// What an external listener sees after each `suggest_actions` cycle. Usage
/// accounting lives outside the core; this is only the hook point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleReport {
    /// Size of the input batch (always equals the output batch).
    pub actions_in: usize,
    /// Suggestions that carried an error marker.
    pub failed_actions: usize,
    /// Goal metrics analyzed this cycle.
    pub goal_metrics: usize,
    /// Retained history length after append + retention.
    pub history_len: usize,
    /// Whether the post-cycle save reached the backend.
    pub persisted: bool,
}

/// Observer hook for telemetry collaborators. Called synchronously after
/// every completed cycle; implementations should be cheap.
pub trait IFeedbackObserver: Send + Sync {
    fn on_cycle(&self, report: &CycleReport);
}
