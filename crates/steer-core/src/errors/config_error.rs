/// Configuration errors. Caught eagerly at construction time, never deferred
/// to the first call.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("retention limit must be at least 1 entry")]
    ZeroRetentionLimit,

    #[error("retention window must be a positive duration")]
    ZeroRetentionWindow,

    #[error("step fraction must be in (0, 1], got {value}")]
    InvalidStepFraction { value: f64 },

    #[error("max step must be positive, got {value}")]
    InvalidMaxStep { value: f64 },

    #[error("unknown personality '{name}'")]
    UnknownPersonality { name: String },

    #[error("worker poll interval must be a positive duration")]
    ZeroPollInterval,

    #[error("worker max backoff must be at least the poll interval")]
    BackoffBelowPollInterval,
}
