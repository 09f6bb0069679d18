//! Gantt run-length encoding.
//!
//! Collapses a unit-by-unit [`Timeline`] into maximal runs of identical
//! labels for chart rendering. [`expand_runs`] is the exact inverse.

use crate::models::{Run, Timeline};

/// Merges consecutive equal labels into runs.
pub fn compress_timeline(timeline: &Timeline) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();

    for (t, &label) in timeline.iter().enumerate() {
        match runs.last_mut() {
            Some(run) if run.label == label => run.duration += 1,
            _ => runs.push(Run::new(label, t, 1)),
        }
    }

    runs
}

/// Expands runs back into a unit timeline.
///
/// Runs are laid out back to back in order; `start` is not consulted.
pub fn expand_runs(runs: &[Run]) -> Timeline {
    runs.iter()
        .flat_map(|run| std::iter::repeat(run.label).take(run.duration))
        .collect()
}

/// Boundaries of the runs (`0`, every run end), as drawn on a Gantt axis.
pub fn boundaries(runs: &[Run]) -> Vec<usize> {
    let mut ticks = Vec::with_capacity(runs.len() + 1);
    ticks.push(runs.first().map_or(0, |r| r.start));
    ticks.extend(runs.iter().map(Run::end));
    ticks
}
