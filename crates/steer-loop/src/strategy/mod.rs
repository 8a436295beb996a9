//! Feedback strategies: pure functions from (goal, analytics, action) to a
//! suggestion. Swappable behind `IFeedbackStrategy`; selected by config.

pub mod personality;
pub mod simple;

pub use personality::{Personality, PersonalityStrategy};
pub use simple::SimpleStrategy;

use steer_core::config::StrategyConfig;
use steer_core::errors::ConfigError;
use steer_core::traits::IFeedbackStrategy;

/// Build the strategy named by the config: the plain simple strategy, or a
/// personality wrapper when a personality is configured.
pub fn build_strategy(config: &StrategyConfig) -> Result<Box<dyn IFeedbackStrategy>, ConfigError> {
    let simple = SimpleStrategy::from_config(config)?;
    match &config.personality {
        None => Ok(Box::new(simple)),
        Some(name) => {
            let personality =
                Personality::from_name(name).ok_or_else(|| ConfigError::UnknownPersonality {
                    name: name.clone(),
                })?;
            Ok(Box::new(PersonalityStrategy::new(simple, personality)))
        }
    }
}
