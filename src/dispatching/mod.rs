//! Dispatching rules and next-process selection.
//!
//! Every discipline picks its next process the same way: filter the
//! process arena by an eligibility predicate, then take the minimum by a
//! rule-specific key. Ties are broken by lower arrival time, then lower
//! id, so selection is deterministic for every rule.
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::dispatching::{rules, select_next};
//! use cpu_sched_sim::models::Process;
//!
//! let arena = vec![Process::new(1, 0, 8), Process::new(2, 1, 4)];
//! let next = select_next(&arena, &rules::ShortestBurst, |p| p.is_ready(1));
//! assert_eq!(next, Some(1));
//! ```

pub mod rules;

use crate::models::Process;
use std::fmt::Debug;

/// Key returned by a dispatching rule.
///
/// Lower keys = higher priority (dispatched first).
pub type RuleKey = i64;

/// A dispatching rule that ranks processes.
///
/// # Key Convention
/// **Lower key = dispatched first.** Ties on the key fall through to
/// arrival time and then id, never to slice position.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Ranking key for a process.
    fn evaluate(&self, process: &Process) -> RuleKey;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Full ordering key: rule key, then arrival time, then id.
#[inline]
fn rank<R: DispatchingRule + ?Sized>(rule: &R, process: &Process) -> (RuleKey, i64, u32) {
    (rule.evaluate(process), process.arrival_time, process.id)
}

/// Returns the arena index of the best eligible process.
///
/// `None` when no process satisfies `eligible`.
pub fn select_next<R, F>(processes: &[Process], rule: &R, eligible: F) -> Option<usize>
where
    R: DispatchingRule + ?Sized,
    F: Fn(&Process) -> bool,
{
    processes
        .iter()
        .enumerate()
        .filter(|(_, p)| eligible(p))
        .min_by_key(|(_, p)| rank(rule, p))
        .map(|(idx, _)| idx)
}

/// Returns all arena indices sorted by the rule (with the uniform tie-break).
pub fn sort_indices<R: DispatchingRule + ?Sized>(processes: &[Process], rule: &R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by_key(|&idx| rank(rule, &processes[idx]));
    indices
}
