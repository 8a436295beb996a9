//! # steer-analytics
//!
//! Pure analytics over retained history: per-metric baselines (arithmetic
//! mean of every observed value) and goal analysis (current, gap, trend,
//! progress ratio). Both functions are deterministic in their inputs: no
//! clocks, no hidden state.

pub mod baseline;
pub mod goal_analysis;

pub use baseline::compute_baseline;
pub use goal_analysis::analyze;
