use proptest::prelude::*;

use steer_analytics::{analyze, compute_baseline};
use steer_core::types::{ActionRecord, GoalState, Trend};

fn history_of(values: &[f64]) -> Vec<ActionRecord> {
    values
        .iter()
        .map(|v| ActionRecord::from_metrics([("progress", *v)]))
        .collect()
}

proptest! {
    #[test]
    fn baseline_is_deterministic(values in prop::collection::vec(-1e6f64..1e6, 0..40)) {
        let history = history_of(&values);
        let first = compute_baseline(&history);
        let second = compute_baseline(&history);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn baseline_lies_within_the_observed_range(
        values in prop::collection::vec(-1e6f64..1e6, 1..40),
    ) {
        let history = history_of(&values);
        let baseline = compute_baseline(&history);
        let mean = baseline.get("progress").unwrap();

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(mean >= min - 1e-9 && mean <= max + 1e-9);
    }

    #[test]
    fn gap_is_goal_minus_current(
        target in -1e6f64..1e6,
        current in -1e6f64..1e6,
        values in prop::collection::vec(-1e6f64..1e6, 0..20),
    ) {
        let goal = GoalState::from_targets([("progress", target)]);
        let history = history_of(&values);
        let baseline = compute_baseline(&history);
        let action = ActionRecord::from_metrics([("progress", current)]);

        let snapshot = analyze(&goal, &baseline, &action, &history);
        let m = &snapshot["progress"];
        prop_assert_eq!(m.gap, Some(target - current));
        prop_assert_eq!(m.current, Some(current));
    }

    #[test]
    fn trend_matches_the_sign_of_current_minus_baseline(
        target in -1e3f64..1e3,
        current in -1e3f64..1e3,
        values in prop::collection::vec(-1e3f64..1e3, 1..20),
    ) {
        let goal = GoalState::from_targets([("progress", target)]);
        let history = history_of(&values);
        let baseline = compute_baseline(&history);
        let action = ActionRecord::from_metrics([("progress", current)]);

        let snapshot = analyze(&goal, &baseline, &action, &history);
        let reference = baseline.get("progress").unwrap();
        let expected = if current > reference {
            Trend::Up
        } else if current < reference {
            Trend::Down
        } else {
            Trend::Flat
        };
        prop_assert_eq!(snapshot["progress"].trend, expected);
    }

    #[test]
    fn every_goal_metric_appears_in_the_snapshot(
        metric_count in 0usize..10,
    ) {
        let targets: Vec<(String, serde_json::Value)> = (0..metric_count)
            .map(|i| (format!("metric_{i}"), serde_json::json!(i as f64)))
            .collect();
        let goal = GoalState::new(targets);
        let action = ActionRecord::from_metrics([("metric_0", 1.0)]);

        let snapshot = analyze(&goal, &compute_baseline(&[]), &action, &[]);
        prop_assert_eq!(snapshot.len(), metric_count);
        for metric in goal.metrics() {
            prop_assert!(snapshot.contains_key(metric));
        }
    }
}
