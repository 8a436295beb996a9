//! FeedbackLoop: owns history + baselines, coordinates analytics, strategy,
//! retention, and best-effort persistence. One instance per goal.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use steer_analytics::{analyze, compute_baseline};
use steer_core::config::{PersistenceConfig, RetentionConfig, StrategyConfig};
use steer_core::errors::SteerResult;
use steer_core::traits::{CycleReport, IFeedbackObserver, IFeedbackStrategy, IStatePersistence};
use steer_core::types::{
    ActionRecord, AnalysisSnapshot, Baseline, GoalState, PersistedState, Suggestion,
};
use steer_retention::RetentionPolicy;
use steer_storage::build_backend;

/// Loop lifecycle. `Cold` until the first call loads (or initializes) state;
/// `Analyzing` only transiently inside a call; `Warm` otherwise. There is no
/// terminal state; the loop lives as long as the owning process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Cold,
    Warm,
    Analyzing,
}

/// The goal-driven feedback loop.
///
/// Exclusively owns its in-process history and baselines; the persistence
/// backend is a passive store read once at warm-up and written after each
/// mutation. Persistence problems never fail a call; they only cost
/// durability for that cycle.
pub struct FeedbackLoop {
    strategy: Box<dyn IFeedbackStrategy>,
    persistence: Box<dyn IStatePersistence>,
    retention: RetentionPolicy,
    default_goal: GoalState,
    state: LoopState,
    history: Vec<ActionRecord>,
    baseline: Baseline,
    last_suggestions: Vec<Suggestion>,
    last_analysis: AnalysisSnapshot,
    last_cycle: Option<CycleReport>,
    observers: Vec<Arc<dyn IFeedbackObserver>>,
}

impl FeedbackLoop {
    pub fn new(
        strategy: Box<dyn IFeedbackStrategy>,
        persistence: Box<dyn IStatePersistence>,
        retention: RetentionPolicy,
    ) -> Self {
        Self {
            strategy,
            persistence,
            retention,
            default_goal: GoalState::default(),
            state: LoopState::Cold,
            history: Vec::new(),
            baseline: Baseline::new(),
            last_suggestions: Vec::new(),
            last_analysis: AnalysisSnapshot::new(),
            last_cycle: None,
            observers: Vec::new(),
        }
    }

    /// Assemble a loop from configuration. All knobs validate here, so
    /// misconfiguration fails construction, not the first call.
    pub fn from_configs(
        strategy: &StrategyConfig,
        persistence: &PersistenceConfig,
        retention: &RetentionConfig,
    ) -> SteerResult<Self> {
        let strategy = super::strategy::build_strategy(strategy)?;
        let backend = build_backend(persistence)?;
        let policy = RetentionPolicy::new(retention)?;
        Ok(Self::new(strategy, backend, policy))
    }

    /// Set the default goal used when a call passes no goal state.
    pub fn set_goal_state(&mut self, goal: GoalState) {
        self.default_goal = goal;
    }

    pub fn with_goal_state(mut self, goal: GoalState) -> Self {
        self.default_goal = goal;
        self
    }

    /// Register a telemetry observer, called after every completed cycle.
    pub fn add_observer(&mut self, observer: Arc<dyn IFeedbackObserver>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// The retained history (read-only view).
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    /// Suggestions generated by the most recent call.
    pub fn last_suggestions(&self) -> &[Suggestion] {
        &self.last_suggestions
    }

    /// Analytics from the most recent call (last action analyzed).
    pub fn last_analysis(&self) -> &AnalysisSnapshot {
        &self.last_analysis
    }

    /// Report of the most recent cycle, if any call has completed.
    pub fn last_cycle(&self) -> Option<&CycleReport> {
        self.last_cycle.as_ref()
    }

    /// Produce suggestions for `current_actions` against the goal state.
    ///
    /// A non-empty `history_override` REPLACES the in-memory history for this
    /// call and onward: a deliberate "reset window" capability, not a merge.
    /// `goal_state: None` falls back to the loop's default goal; an empty
    /// goal is an idle state producing pass-through suggestions.
    ///
    /// The output always matches the input in length and order. A strategy
    /// failure for one action is isolated: that suggestion carries an error
    /// marker, siblings are unaffected.
    pub fn suggest_actions(
        &mut self,
        history_override: Option<Vec<ActionRecord>>,
        current_actions: Vec<ActionRecord>,
        goal_state: Option<&GoalState>,
    ) -> Vec<Suggestion> {
        self.warm_up();

        if let Some(override_history) = history_override.filter(|h| !h.is_empty()) {
            debug!(
                replaced = self.history.len(),
                incoming = override_history.len(),
                "history override: replacing retained window"
            );
            self.history = override_history;
        }

        self.state = LoopState::Analyzing;
        self.baseline = compute_baseline(&self.history);

        let goal = goal_state.unwrap_or(&self.default_goal).clone();

        let mut suggestions = Vec::with_capacity(current_actions.len());
        let mut failed_actions = 0usize;
        let mut cycle_analysis = AnalysisSnapshot::new();

        for action in &current_actions {
            let analysis = analyze(&goal, &self.baseline, action, &self.history);
            match self.strategy.suggest(&goal, &analysis, action) {
                Ok(suggestion) => suggestions.push(suggestion),
                Err(err) => {
                    failed_actions += 1;
                    warn!(
                        strategy = self.strategy.name(),
                        error = %err,
                        "strategy failed for one action; continuing with the batch"
                    );
                    suggestions.push(Suggestion::failed(
                        action.clone(),
                        analysis.clone(),
                        err.to_string(),
                    ));
                }
            }
            cycle_analysis = analysis;
        }

        self.history.extend(current_actions);
        self.apply_retention();
        let persisted = self.persist();

        self.last_suggestions = suggestions.clone();
        self.last_analysis = cycle_analysis;
        self.state = LoopState::Warm;

        let report = CycleReport {
            actions_in: suggestions.len(),
            failed_actions,
            goal_metrics: goal.len(),
            history_len: self.history.len(),
            persisted,
        };
        for observer in &self.observers {
            observer.on_cycle(&report);
        }
        self.last_cycle = Some(report);

        suggestions
    }

    /// Append entries to the retained history without producing suggestions.
    pub fn extend_history(&mut self, entries: Vec<ActionRecord>) {
        if entries.is_empty() {
            return;
        }
        self.warm_up();
        self.history.extend(entries);
        self.apply_retention();
        self.persist();
    }

    /// Clear history and baselines, and persist the empty state.
    pub fn reset_history(&mut self) {
        self.warm_up();
        self.history.clear();
        self.baseline = Baseline::new();
        self.persist();
    }

    // ------------------------------------------------------------------
    // Internal helpers
    // ------------------------------------------------------------------

    /// One-time state load. Load failure is a cold start, never fatal.
    fn warm_up(&mut self) {
        if self.state != LoopState::Cold {
            return;
        }
        match self.persistence.load() {
            Ok(Some(state)) => {
                debug!(
                    history_len = state.history.len(),
                    baseline_metrics = state.baseline.len(),
                    "rehydrated feedback state"
                );
                self.history = state.history;
                self.baseline = state.baseline;
                // Persisted state may predate the current retention knobs.
                if self.retention.would_prune(&self.history, Utc::now()) {
                    self.apply_retention();
                    self.persist();
                }
            }
            Ok(None) => {}
            Err(err) => {
                warn!(error = %err, "persistence load failed; starting cold");
            }
        }
        self.state = LoopState::Warm;
    }

    /// Prune history and recompute baselines; any metric's reference point
    /// may shift when entries fall out of the window.
    fn apply_retention(&mut self) {
        self.history = self.retention.apply(&self.history, Utc::now());
        self.baseline = compute_baseline(&self.history);
    }

    /// Best-effort save. Returns whether the write reached the backend.
    fn persist(&mut self) -> bool {
        let state = PersistedState::new(self.history.clone(), self.baseline.clone());
        match self.persistence.save(&state) {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    error = %err,
                    history_len = state.history.len(),
                    "persistence save failed; continuing in-memory"
                );
                false
            }
        }
    }
}
