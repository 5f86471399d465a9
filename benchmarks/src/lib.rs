//! Shared helpers for bisect benchmark suites.

use bisect_harness::scenario::ScenarioV1;

/// Sizes every search benchmark sweeps over.
pub const SEQUENCE_SIZES: [usize; 4] = [16, 1_024, 65_536, 1_048_576];

/// `[0, 3, 6, ...]` of length `len`. Multiples of 3 leave room for misses.
#[must_use]
pub fn stepped_sequence(len: usize) -> Vec<u64> {
    (0..len as u64).map(|i| i * 3).collect()
}

/// Targets spread across the sequence: every `stride`-th element (hits)
/// interleaved with the value just after it (misses).
#[must_use]
pub fn mixed_targets(sequence: &[u64], count: usize) -> Vec<u64> {
    let stride = (sequence.len() / count.max(1)).max(1);
    sequence
        .iter()
        .step_by(stride)
        .take(count)
        .flat_map(|&v| [v, v + 1])
        .collect()
}

/// A scenario with `len` elements and `target_count` targets, for
/// end-to-end runner benchmarks.
#[must_use]
pub fn scenario_of_size(len: usize, target_count: usize) -> ScenarioV1 {
    let sequence: Vec<i64> = (0..len)
        .map(|i| i64::try_from(i).unwrap_or(i64::MAX) * 2)
        .collect();
    let targets = (0..target_count)
        .map(|i| i64::try_from(i * len / target_count.max(1)).unwrap_or(0))
        .collect();
    ScenarioV1 {
        scenario_id: format!("bench_{len}_{target_count}"),
        sequence,
        targets,
    }
}
