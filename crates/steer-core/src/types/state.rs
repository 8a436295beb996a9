use serde::{Deserialize, Serialize};

use super::baseline::Baseline;
use super::record::ActionRecord;

/// The unit of state a persistence backend stores: the retained history plus
/// the baselines derived from it. Backends must round-trip this exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Ordered history, insertion order = chronological order.
    pub history: Vec<ActionRecord>,
    pub baseline: Baseline,
}

impl PersistedState {
    pub fn new(history: Vec<ActionRecord>, baseline: Baseline) -> Self {
        Self { history, baseline }
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty() && self.baseline.is_empty()
    }
}
