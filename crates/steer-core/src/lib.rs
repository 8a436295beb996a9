//! # steer-core
//!
//! Foundation crate for the steer goal-feedback system.
//! Defines all types, traits, errors, and config.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{PersistenceConfig, RetentionConfig, StrategyConfig, WorkerConfig};
pub use errors::{SteerError, SteerResult};
pub use types::{
    ActionRecord, AnalysisSnapshot, Baseline, GoalState, MetricAnalysis, PersistedState,
    Suggestion, Trend,
};
