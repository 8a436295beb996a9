//! Default configuration values shared across the workspace.

/// Fraction of the gap the simple strategy closes per suggestion.
pub const DEFAULT_STEP_FRACTION: f64 = 0.5;

/// Background worker poll interval (seconds).
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Cap for the worker's exponential backoff (seconds).
pub const DEFAULT_MAX_BACKOFF_SECS: u64 = 300;
