/// Errors raised by an individual strategy computation. The feedback loop
/// isolates these per action: a failed suggestion is error-flagged, sibling
/// actions in the same batch are unaffected.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error("strategy '{name}' failed: {reason}")]
    Failed { name: String, reason: String },

    #[error("metric '{metric}' has a non-numeric value")]
    NonNumericValue { metric: String },
}

impl StrategyError {
    pub fn failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Failed {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
