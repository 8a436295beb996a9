//! Core data model: action records, goal state, baselines, analysis
//! snapshots, suggestions, and the persisted-state unit backends round-trip.

pub mod analysis;
pub mod baseline;
pub mod goal;
pub mod record;
pub mod state;
pub mod suggestion;

pub use analysis::{AnalysisSnapshot, MetricAnalysis, Trend};
pub use baseline::Baseline;
pub use goal::GoalState;
pub use record::{coerce_numeric, ActionRecord};
pub use state::PersistedState;
pub use suggestion::{GoalFeedback, Suggestion};
