use chrono::{Duration, Utc};
use proptest::prelude::*;

use steer_core::config::RetentionConfig;
use steer_core::types::ActionRecord;
use steer_retention::RetentionPolicy;

fn make_history(ages_secs: &[u32]) -> Vec<ActionRecord> {
    let now = Utc::now();
    let mut history: Vec<ActionRecord> = ages_secs
        .iter()
        .enumerate()
        .map(|(i, age)| {
            ActionRecord::at(
                [("progress".to_string(), serde_json::json!(i as f64))],
                now - Duration::seconds(*age as i64),
            )
        })
        .collect();
    // Insertion order is chronological order.
    history.sort_by_key(|entry| entry.recorded_at);
    history
}

proptest! {
    #[test]
    fn retained_length_never_exceeds_the_limit(
        ages in prop::collection::vec(0u32..100_000, 0..50),
        limit in 1usize..20,
    ) {
        let history = make_history(&ages);
        let policy = RetentionPolicy::new(&RetentionConfig::with_max_entries(limit)).unwrap();

        let retained = policy.apply(&history, Utc::now());
        prop_assert!(retained.len() <= limit);
        prop_assert!(retained.len() <= history.len());
    }

    #[test]
    fn retained_entries_are_a_suffix_of_the_input(
        ages in prop::collection::vec(0u32..100_000, 0..50),
        limit in 1usize..20,
        window_secs in 1u64..100_000,
    ) {
        let history = make_history(&ages);
        let policy = RetentionPolicy::new(&RetentionConfig {
            max_entries: Some(limit),
            max_age_secs: Some(window_secs),
        }).unwrap();

        let retained = policy.apply(&history, Utc::now());
        // Pruning only ever discards from the old end.
        let suffix = &history[history.len() - retained.len()..];
        prop_assert_eq!(&retained[..], suffix);
    }

    #[test]
    fn age_filter_keeps_exactly_the_in_window_entries(
        ages in prop::collection::vec(0u32..100_000, 0..50),
        window_secs in 1u64..100_000,
    ) {
        let now = Utc::now();
        let history = make_history(&ages);
        let policy = RetentionPolicy::new(&RetentionConfig {
            max_entries: None,
            max_age_secs: Some(window_secs),
        }).unwrap();

        let retained = policy.apply(&history, now);
        let cutoff = now - Duration::seconds(window_secs as i64);
        for entry in &retained {
            prop_assert!(entry.recorded_at >= cutoff);
        }
        let expected = history.iter().filter(|e| e.recorded_at >= cutoff).count();
        prop_assert_eq!(retained.len(), expected);
    }

    #[test]
    fn apply_is_idempotent(
        ages in prop::collection::vec(0u32..100_000, 0..50),
        limit in 1usize..20,
    ) {
        let history = make_history(&ages);
        let policy = RetentionPolicy::new(&RetentionConfig::with_max_entries(limit)).unwrap();

        let now = Utc::now();
        let once = policy.apply(&history, now);
        let twice = policy.apply(&once, now);
        prop_assert_eq!(once, twice);
    }
}
