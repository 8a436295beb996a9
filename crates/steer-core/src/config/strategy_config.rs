use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Feedback-strategy configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Fraction of the gap to close per suggestion, in (0, 1].
    pub step_fraction: f64,
    /// Absolute cap on a single suggested delta. `None` means unclamped.
    pub max_step: Option<f64>,
    /// Metrics that are decrease-only: a suggestion never nudges them upward,
    /// even when the raw gap points that way (e.g. response time is never
    /// artificially inflated).
    pub one_direction_layers: BTreeSet<String>,
    /// Named personality for tone annotations. `None` selects the plain
    /// simple strategy with no framing.
    pub personality: Option<String>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            step_fraction: defaults::DEFAULT_STEP_FRACTION,
            max_step: None,
            one_direction_layers: BTreeSet::new(),
            personality: None,
        }
    }
}

impl StrategyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.step_fraction > 0.0 && self.step_fraction <= 1.0) {
            return Err(ConfigError::InvalidStepFraction {
                value: self.step_fraction,
            });
        }
        if let Some(max_step) = self.max_step {
            if !(max_step > 0.0) {
                return Err(ConfigError::InvalidMaxStep { value: max_step });
            }
        }
        Ok(())
    }
}
