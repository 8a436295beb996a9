use proptest::prelude::*;

use steer_core::config::RetentionConfig;
use steer_core::types::{ActionRecord, GoalState};
use steer_loop::{FeedbackLoop, SimpleStrategy};
use steer_retention::RetentionPolicy;
use steer_storage::MemoryStore;

fn fresh_loop(limit: Option<usize>) -> FeedbackLoop {
    let retention = match limit {
        Some(limit) => {
            RetentionPolicy::new(&RetentionConfig::with_max_entries(limit)).unwrap()
        }
        None => RetentionPolicy::unbounded(),
    };
    FeedbackLoop::new(
        Box::new(SimpleStrategy::with_defaults()),
        Box::new(MemoryStore::new()),
        retention,
    )
}

fn indexed_actions(values: &[f64]) -> Vec<ActionRecord> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| ActionRecord::from_metrics([("progress", *v), ("index", i as f64)]))
        .collect()
}

proptest! {
    #[test]
    fn suggestions_match_the_batch_in_length_and_order(
        values in prop::collection::vec(-1e6f64..1e6, 0..30),
        target in -1e6f64..1e6,
    ) {
        let mut feedback = fresh_loop(None);
        let goal = GoalState::from_targets([("progress", target)]);
        let actions = indexed_actions(&values);

        let suggestions = feedback.suggest_actions(None, actions.clone(), Some(&goal));
        prop_assert_eq!(suggestions.len(), actions.len());
        for (i, suggestion) in suggestions.iter().enumerate() {
            prop_assert_eq!(suggestion.action.numeric("index"), Some(i as f64));
            prop_assert!(suggestion.error.is_none());
        }
    }

    #[test]
    fn history_stays_bounded_across_calls(
        batches in prop::collection::vec(
            prop::collection::vec(-1e3f64..1e3, 0..8),
            1..12,
        ),
        limit in 1usize..10,
    ) {
        let mut feedback = fresh_loop(Some(limit));
        let goal = GoalState::from_targets([("progress", 10.0)]);

        for batch in &batches {
            feedback.suggest_actions(None, indexed_actions(batch), Some(&goal));
            prop_assert!(feedback.history().len() <= limit);
        }
    }

    #[test]
    fn baselines_are_reproducible_from_the_retained_history(
        values in prop::collection::vec(-1e3f64..1e3, 1..20),
    ) {
        let mut feedback = fresh_loop(None);
        let goal = GoalState::from_targets([("progress", 10.0)]);
        feedback.suggest_actions(None, indexed_actions(&values), Some(&goal));

        let recomputed = steer_analytics::compute_baseline(feedback.history());
        prop_assert_eq!(feedback.baseline(), &recomputed);
    }
}
