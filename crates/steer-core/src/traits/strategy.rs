use crate::errors::StrategyError;
use crate::types::{ActionRecord, AnalysisSnapshot, GoalState, Suggestion};

/// Maps one candidate action plus the cycle's analytics into a suggestion.
///
/// Implementations must be pure functions of their inputs (no hidden mutable
/// state) so they are trivially testable and swappable. An empty goal is a
/// legitimate idle state: return a pass-through suggestion, not an error.
pub trait IFeedbackStrategy: Send + Sync {
    /// Strategy name, used in error markers and logs.
    fn name(&self) -> &str;

    fn suggest(
        &self,
        goal: &GoalState,
        analysis: &AnalysisSnapshot,
        action: &ActionRecord,
    ) -> Result<Suggestion, StrategyError>;
}
