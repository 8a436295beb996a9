use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Background worker configuration: poll cadence and failure backoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// How often the worker drains its pending queue (seconds).
    pub poll_interval_secs: u64,
    /// Cap for the exponential backoff applied after repeated failures
    /// (seconds). Backoff doubles from the poll interval up to this cap.
    pub max_backoff_secs: u64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: defaults::DEFAULT_POLL_INTERVAL_SECS,
            max_backoff_secs: defaults::DEFAULT_MAX_BACKOFF_SECS,
        }
    }
}

impl WorkerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_secs == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        if self.max_backoff_secs < self.poll_interval_secs {
            return Err(ConfigError::BackoffBelowPollInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_intervals() {
        assert!(WorkerConfig::default().validate().is_ok());
        assert!(WorkerConfig {
            poll_interval_secs: 0,
            ..Default::default()
        }
        .validate()
        .is_err());
        assert!(WorkerConfig {
            poll_interval_secs: 10,
            max_backoff_secs: 5,
        }
        .validate()
        .is_err());
    }
}
