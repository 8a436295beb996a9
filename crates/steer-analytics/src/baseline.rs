use std::collections::BTreeMap;

use steer_core::types::{coerce_numeric, ActionRecord, Baseline};

/// Compute per-metric baselines from retained history.
///
/// For each metric key appearing in any entry, the baseline is the arithmetic
/// mean of all numeric values observed for it. Deterministic: the same log
/// always produces the same baseline, regardless of how it was assembled.
pub fn compute_baseline(history: &[ActionRecord]) -> Baseline {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for entry in history {
        for (metric, value) in &entry.fields {
            if let Some(numeric) = coerce_numeric(value) {
                let slot = sums.entry(metric.as_str()).or_insert((0.0, 0));
                slot.0 += numeric;
                slot.1 += 1;
            }
        }
    }

    sums.into_iter()
        .map(|(metric, (sum, count))| (metric.to_string(), sum / count as f64))
        .collect()
}
