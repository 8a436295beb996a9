use serde::{Deserialize, Serialize};

use steer_core::errors::StrategyError;
use steer_core::traits::IFeedbackStrategy;
use steer_core::types::{ActionRecord, AnalysisSnapshot, GoalState, Suggestion};

use super::simple::SimpleStrategy;

/// Fixed tone descriptors. A personality only changes the natural-language
/// framing attached to a suggestion, never the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    Encouraging,
    Terse,
    Cautious,
}

impl Personality {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "encouraging" => Some(Self::Encouraging),
            "terse" => Some(Self::Terse),
            "cautious" => Some(Self::Cautious),
            _ => None,
        }
    }

    fn framing(self) -> &'static str {
        match self {
            Self::Encouraging => "Good momentum; these adjustments keep you on track.",
            Self::Terse => "Apply the suggested deltas.",
            Self::Cautious => "Conservative adjustments; review before applying.",
        }
    }
}

/// Wraps [`SimpleStrategy`] and annotates each non-idle suggestion with the
/// personality's framing.
#[derive(Debug, Clone)]
pub struct PersonalityStrategy {
    inner: SimpleStrategy,
    personality: Personality,
}

impl PersonalityStrategy {
    pub fn new(inner: SimpleStrategy, personality: Personality) -> Self {
        Self { inner, personality }
    }

    pub fn personality(&self) -> Personality {
        self.personality
    }
}

impl IFeedbackStrategy for PersonalityStrategy {
    fn name(&self) -> &str {
        "personality"
    }

    fn suggest(
        &self,
        goal: &GoalState,
        analysis: &AnalysisSnapshot,
        action: &ActionRecord,
    ) -> Result<Suggestion, StrategyError> {
        let mut suggestion = self.inner.suggest(goal, analysis, action)?;
        if !goal.is_empty() {
            suggestion.note = Some(self.personality.framing().to_string());
        }
        Ok(suggestion)
    }
}
