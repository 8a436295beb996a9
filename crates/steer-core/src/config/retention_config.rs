use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Retention knobs bounding history growth. Both are optional and combinable;
/// when both are set the age filter runs first, then the count trim, so the
/// most restrictive outcome wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionConfig {
    /// Keep only the most recent N entries.
    pub max_entries: Option<usize>,
    /// Keep only entries recorded within this many seconds of now.
    pub max_age_secs: Option<u64>,
}

impl RetentionConfig {
    /// Unbounded retention.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            max_entries: Some(max_entries),
            max_age_secs: None,
        }
    }

    /// Reject degenerate knobs eagerly. A zero limit or zero window would
    /// silently discard every observation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_entries == Some(0) {
            return Err(ConfigError::ZeroRetentionLimit);
        }
        if self.max_age_secs == Some(0) {
            return Err(ConfigError::ZeroRetentionWindow);
        }
        Ok(())
    }
}
