//! # steer-retention
//!
//! Bounds history growth by count and/or age. `apply` is a pure function of
//! the log and the supplied clock, so pruning is deterministic under test.
//!
//! Age filtering runs first, then the count trim, which makes the most
//! restrictive outcome win when both knobs are configured. The age reference
//! is "now" (real time), not the newest entry's timestamp: retention is about
//! staleness relative to the wall clock.

use chrono::{DateTime, Duration, Utc};

use steer_core::config::RetentionConfig;
use steer_core::errors::ConfigError;
use steer_core::types::ActionRecord;

/// A validated retention policy. Construction fails on degenerate knobs
/// (zero limit, zero window); an unbounded policy is always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionPolicy {
    max_entries: Option<usize>,
    max_age: Option<Duration>,
}

impl RetentionPolicy {
    pub fn new(config: &RetentionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            max_entries: config.max_entries,
            max_age: config.max_age_secs.map(|secs| Duration::seconds(secs as i64)),
        })
    }

    /// A policy that never prunes.
    pub fn unbounded() -> Self {
        Self {
            max_entries: None,
            max_age: None,
        }
    }

    pub fn max_entries(&self) -> Option<usize> {
        self.max_entries
    }

    pub fn max_age(&self) -> Option<Duration> {
        self.max_age
    }

    /// Whether this policy can ever discard anything.
    pub fn is_unbounded(&self) -> bool {
        self.max_entries.is_none() && self.max_age.is_none()
    }

    /// Prune `history`, returning the retained suffix. Order is preserved;
    /// only the oldest entries are ever discarded. Callers must recompute
    /// baselines afterwards whenever the result is shorter than the input.
    pub fn apply(&self, history: &[ActionRecord], now: DateTime<Utc>) -> Vec<ActionRecord> {
        let mut retained: Vec<ActionRecord> = match self.max_age {
            Some(max_age) => {
                let cutoff = now - max_age;
                history
                    .iter()
                    .filter(|entry| entry.recorded_at >= cutoff)
                    .cloned()
                    .collect()
            }
            None => history.to_vec(),
        };

        if let Some(limit) = self.max_entries {
            if retained.len() > limit {
                retained.drain(..retained.len() - limit);
            }
        }

        retained
    }

    /// Whether `apply` would change the given history.
    pub fn would_prune(&self, history: &[ActionRecord], now: DateTime<Utc>) -> bool {
        if let Some(limit) = self.max_entries {
            if history.len() > limit {
                return true;
            }
        }
        if let Some(max_age) = self.max_age {
            let cutoff = now - max_age;
            if history.iter().any(|entry| entry.recorded_at < cutoff) {
                return true;
            }
        }
        false
    }
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self::unbounded()
    }
}
