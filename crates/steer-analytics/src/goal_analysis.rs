use steer_core::types::{
    ActionRecord, AnalysisSnapshot, Baseline, GoalState, MetricAnalysis, Trend,
};

/// Analyze one action against the goal state.
///
/// For every metric present in `goal`:
/// - `current` is the metric's value in `latest` when present, else the most
///   recent historical observation, else `None`;
/// - a metric with no observations ever yields the neutral analysis
///   (`current: None`, `gap: None`, `trend: Flat`, `progress_ratio: 0`);
/// - a non-numeric goal target yields the neutral analysis with `goal: None`
///   rather than aborting the batch;
/// - a metric's first-ever observation has `baseline == current`, hence
///   trend `Flat` and ratio 0, while the gap is computed normally.
pub fn analyze(
    goal: &GoalState,
    baseline: &Baseline,
    latest: &ActionRecord,
    history: &[ActionRecord],
) -> AnalysisSnapshot {
    let mut snapshot = AnalysisSnapshot::new();

    for metric in goal.metrics() {
        let analysis = match goal.numeric_target(metric) {
            Some(target) => analyze_metric(metric, target, baseline, latest, history),
            // Malformed target: degrade this metric, keep the batch alive.
            None => MetricAnalysis::unobserved(None),
        };
        snapshot.insert(metric.to_string(), analysis);
    }

    snapshot
}

fn analyze_metric(
    metric: &str,
    target: f64,
    baseline: &Baseline,
    latest: &ActionRecord,
    history: &[ActionRecord],
) -> MetricAnalysis {
    let current = latest
        .numeric(metric)
        .or_else(|| last_observation(metric, history));

    let Some(current) = current else {
        return MetricAnalysis::unobserved(Some(target));
    };

    // First observation of a metric: the reference point is the value itself.
    let reference = baseline.get(metric).unwrap_or(current);

    let trend = if current > reference {
        Trend::Up
    } else if current < reference {
        Trend::Down
    } else {
        Trend::Flat
    };

    let span = target - reference;
    let progress_ratio = if span == 0.0 {
        0.0
    } else {
        (current - reference) / span
    };

    MetricAnalysis {
        goal: Some(target),
        current: Some(current),
        gap: Some(target - current),
        baseline: Some(reference),
        trend,
        progress_ratio,
    }
}

/// Most recent historical value for a metric, scanning from the newest entry.
fn last_observation(metric: &str, history: &[ActionRecord]) -> Option<f64> {
    history.iter().rev().find_map(|entry| entry.numeric(metric))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_baseline;

    #[test]
    fn first_observation_is_flat_with_zero_progress() {
        // Goal 10, empty history, action progress=4: baseline initializes to
        // the first observation, trend flat, gap 6, ratio 0.
        let goal = GoalState::from_targets([("progress", 10.0)]);
        let history: Vec<ActionRecord> = vec![];
        let baseline = compute_baseline(&history);
        let action = ActionRecord::from_metrics([("progress", 4.0)]);

        let snapshot = analyze(&goal, &baseline, &action, &history);
        let m = &snapshot["progress"];
        assert_eq!(m.goal, Some(10.0));
        assert_eq!(m.current, Some(4.0));
        assert_eq!(m.baseline, Some(4.0));
        assert_eq!(m.gap, Some(6.0));
        assert_eq!(m.trend, Trend::Flat);
        assert_eq!(m.progress_ratio, 0.0);
    }

    #[test]
    fn trend_and_progress_against_the_mean_baseline() {
        // History [2, 4], goal 10, action 6: baseline 3, trend up, gap 4,
        // ratio (6-3)/(10-3).
        let goal = GoalState::from_targets([("progress", 10.0)]);
        let history = vec![
            ActionRecord::from_metrics([("progress", 2.0)]),
            ActionRecord::from_metrics([("progress", 4.0)]),
        ];
        let baseline = compute_baseline(&history);
        let action = ActionRecord::from_metrics([("progress", 6.0)]);

        let snapshot = analyze(&goal, &baseline, &action, &history);
        let m = &snapshot["progress"];
        assert_eq!(m.baseline, Some(3.0));
        assert_eq!(m.trend, Trend::Up);
        assert_eq!(m.gap, Some(4.0));
        assert!((m.progress_ratio - 3.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn falls_back_to_the_last_historical_value() {
        let goal = GoalState::from_targets([("latency", 50.0)]);
        let history = vec![
            ActionRecord::from_metrics([("latency", 90.0)]),
            ActionRecord::from_metrics([("latency", 70.0)]),
        ];
        let baseline = compute_baseline(&history);
        // The action itself does not carry the metric.
        let action = ActionRecord::from_metrics([("progress", 1.0)]);

        let snapshot = analyze(&goal, &baseline, &action, &history);
        let m = &snapshot["latency"];
        assert_eq!(m.current, Some(70.0));
        assert_eq!(m.baseline, Some(80.0));
        assert_eq!(m.trend, Trend::Down);
    }

    #[test]
    fn unobserved_metric_yields_the_neutral_analysis() {
        let goal = GoalState::from_targets([("throughput", 100.0)]);
        let history: Vec<ActionRecord> = vec![];
        let action = ActionRecord::from_metrics([("progress", 1.0)]);

        let snapshot = analyze(&goal, &compute_baseline(&history), &action, &history);
        let m = &snapshot["throughput"];
        assert_eq!(m.goal, Some(100.0));
        assert_eq!(m.current, None);
        assert_eq!(m.gap, None);
        assert_eq!(m.trend, Trend::Flat);
        assert_eq!(m.progress_ratio, 0.0);
    }

    #[test]
    fn non_numeric_target_degrades_per_metric() {
        let goal = GoalState::new([
            ("progress".to_string(), serde_json::json!(10.0)),
            ("response_time".to_string(), serde_json::json!("<5m")),
        ]);
        let history = vec![ActionRecord::from_metrics([("progress", 2.0)])];
        let action = ActionRecord::from_metrics([("progress", 4.0), ("response_time", 3.0)]);

        let snapshot = analyze(&goal, &compute_baseline(&history), &action, &history);
        assert_eq!(snapshot["response_time"].goal, None);
        assert_eq!(snapshot["response_time"].gap, None);
        // The well-formed metric is still analyzed.
        assert_eq!(snapshot["progress"].current, Some(4.0));
    }

    #[test]
    fn progress_ratio_is_zero_when_goal_equals_baseline() {
        let goal = GoalState::from_targets([("progress", 4.0)]);
        let history = vec![ActionRecord::from_metrics([("progress", 4.0)])];
        let action = ActionRecord::from_metrics([("progress", 4.0)]);

        let snapshot = analyze(&goal, &compute_baseline(&history), &action, &history);
        assert_eq!(snapshot["progress"].progress_ratio, 0.0);
    }
}
