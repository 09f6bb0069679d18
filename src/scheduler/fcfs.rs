//! First-Come-First-Served.
//!
//! Processes run to completion in arrival order (ties by id). Overhead is
//! charged before the first process and between processes, never after
//! the last one.

use super::engine::Engine;
use crate::dispatching::{rules, sort_indices};

pub(super) fn run(engine: &mut Engine) {
    let order = sort_indices(engine.processes(), &rules::ArrivalOrder);
    engine.charge_overhead();

    for (pos, &idx) in order.iter().enumerate() {
        let arrival = engine.process(idx).arrival_time;
        engine.idle_until(arrival);

        let burst = engine.process(idx).remaining_time;
        engine.execute(idx, burst);

        if pos + 1 < order.len() {
            engine.charge_overhead();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Label, ProcessInput};

    #[test]
    fn test_fcfs_idle_gap() {
        let mut e = Engine::new(&[ProcessInput::new(3, 2)], 0);
        run(&mut e);
        let outcome = e.into_outcome(crate::scheduler::Algorithm::Fcfs);
        assert_eq!(outcome.timeline.idle_time(), 3);
        assert_eq!(outcome.timeline.label_at(3), Some(Label::Process(1)));
        assert_eq!(outcome.processes[0].completion_time, Some(5));
    }

    #[test]
    fn test_fcfs_orders_by_arrival_not_submission() {
        let mut e = Engine::new(&[ProcessInput::new(4, 1), ProcessInput::new(0, 2)], 0);
        run(&mut e);
        assert_eq!(e.process(1).completion_time, Some(2));
        // P1 arrives at 4; the CPU idles from 2 to 4.
        assert_eq!(e.process(0).completion_time, Some(5));
    }

    #[test]
    fn test_fcfs_overhead_precedes_idle() {
        let mut e = Engine::new(&[ProcessInput::new(3, 1)], 1);
        run(&mut e);
        let outcome = e.into_outcome(crate::scheduler::Algorithm::Fcfs);
        let units: Vec<String> = outcome.timeline.iter().map(|l| l.to_string()).collect();
        assert_eq!(units, vec!["Overhead", "Idle", "Idle", "P1"]);
    }
}
