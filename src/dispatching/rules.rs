//! Built-in dispatching rules.
//!
//! All rules return lower keys for processes that should run first.

use super::{DispatchingRule, RuleKey};
use crate::models::Process;

/// First come, first served.
///
/// Ranks purely by arrival; the shared tie-break then orders by id.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalOrder;

impl DispatchingRule for ArrivalOrder {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &Process) -> RuleKey {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

/// Shortest burst (total CPU demand) first.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process) -> RuleKey {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest remaining time first.
///
/// Equivalent to [`ShortestBurst`] for processes that have not run yet.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, process: &Process) -> RuleKey {
        process.remaining_time
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}
