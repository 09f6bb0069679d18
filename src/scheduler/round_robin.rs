//! Round Robin.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival (ties by id) and admit the first one.
//! 2. Dequeue the head; if it has never run and has not arrived yet, idle
//!    until it does.
//! 3. Run it for `min(quantum, remaining)` units.
//! 4. Admit every process that has arrived by the new clock value,
//!    *then* re-enqueue the process just run if it still has work.
//! 5. If the queue drained while processes are still pending, admit the
//!    next one (step 2 covers the idle gap).
//! 6. Charge overhead whenever the queue is non-empty afterwards.

use std::collections::VecDeque;

use super::engine::Engine;
use crate::dispatching::{rules, sort_indices};

pub(super) fn run(engine: &mut Engine, quantum: i64) {
    let mut arrivals = sort_indices(engine.processes(), &rules::ArrivalOrder)
        .into_iter()
        .peekable();
    let mut ready: VecDeque<usize> = VecDeque::new();
    ready.extend(arrivals.next());

    engine.charge_overhead();

    while let Some(idx) = ready.pop_front() {
        let process = engine.process(idx);
        if process.is_untouched() {
            let arrival = process.arrival_time;
            engine.idle_until(arrival);
        }

        let slice = quantum.min(engine.process(idx).remaining_time);
        let completed = engine.execute(idx, slice);

        let now = engine.now();
        while let Some(next) = arrivals.next_if(|&i| engine.process(i).has_arrived(now)) {
            ready.push_back(next);
        }
        if !completed {
            ready.push_back(idx);
        }
        if ready.is_empty() {
            ready.extend(arrivals.next());
        }

        if !ready.is_empty() {
            engine.charge_overhead();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Label, ProcessInput};
    use crate::scheduler::Algorithm;

    fn labels(inputs: &[ProcessInput], quantum: i64, overhead: i64) -> Vec<String> {
        let mut e = Engine::new(inputs, overhead);
        run(&mut e, quantum);
        e.into_outcome(Algorithm::RoundRobin)
            .timeline
            .iter()
            .map(Label::to_string)
            .collect()
    }

    #[test]
    fn test_new_arrivals_queue_before_requeued_process() {
        // P2 arrives at t=1 while P1 runs; at t=2 the queue is [P2, P1].
        let units = labels(&[ProcessInput::new(0, 4), ProcessInput::new(1, 5)], 2, 0);
        assert_eq!(
            units,
            vec!["P1", "P1", "P2", "P2", "P1", "P1", "P2", "P2", "P2"]
        );
    }

    #[test]
    fn test_arrival_exactly_at_slice_end_is_admitted_first() {
        let units = labels(&[ProcessInput::new(0, 3), ProcessInput::new(2, 1)], 2, 0);
        assert_eq!(units, vec!["P1", "P1", "P2", "P1"]);
    }

    #[test]
    fn test_quantum_larger_than_burst() {
        let units = labels(&[ProcessInput::new(0, 2), ProcessInput::new(0, 1)], 10, 0);
        assert_eq!(units, vec!["P1", "P1", "P2"]);
    }

    #[test]
    fn test_gap_in_arrivals_still_completes() {
        let mut e = Engine::new(&[ProcessInput::new(0, 1), ProcessInput::new(5, 2)], 0);
        run(&mut e, 2);
        assert!(!e.has_pending());
        assert_eq!(e.process(0).completion_time, Some(1));
        assert_eq!(e.process(1).completion_time, Some(7));
    }

    #[test]
    fn test_gap_with_overhead() {
        let units = labels(&[ProcessInput::new(0, 1), ProcessInput::new(4, 1)], 1, 1);
        assert_eq!(units, vec!["Overhead", "P1", "Overhead", "Idle", "P2"]);
    }

    #[test]
    fn test_overhead_between_slices_not_after_last() {
        let units = labels(&[ProcessInput::new(0, 3)], 2, 1);
        // Single process: the queue is non-empty after the first slice.
        assert_eq!(units, vec!["Overhead", "P1", "P1", "Overhead", "P1"]);
    }
}
