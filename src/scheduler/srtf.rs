//! Preemptive Shortest-Job-First (Shortest Remaining Time First).
//!
//! Time advances one unit at a time; every unit goes to the ready process
//! with the least remaining time. A full overhead block follows each
//! completion while other processes remain.

use super::engine::Engine;
use crate::dispatching::{rules, select_next};

pub(super) fn run(engine: &mut Engine) {
    engine.charge_overhead();

    while engine.has_pending() {
        let now = engine.now();
        match select_next(engine.processes(), &rules::ShortestRemaining, |p| {
            p.is_ready(now)
        }) {
            Some(idx) => {
                if engine.execute(idx, 1) && engine.has_pending() {
                    engine.charge_overhead();
                }
            }
            None => engine.idle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Label, ProcessInput};
    use crate::scheduler::Algorithm;

    #[test]
    fn test_srtf_preempts_longer_job() {
        let mut e = Engine::new(&[ProcessInput::new(0, 5), ProcessInput::new(1, 2)], 0);
        run(&mut e);
        let outcome = e.into_outcome(Algorithm::SjfPreemptive);
        let labels: Vec<Label> = outcome.timeline.iter().copied().collect();
        assert_eq!(
            labels,
            vec![
                Label::Process(1),
                Label::Process(2),
                Label::Process(2),
                Label::Process(1),
                Label::Process(1),
                Label::Process(1),
                Label::Process(1),
            ]
        );
        assert_eq!(outcome.processes[1].completion_time, Some(3));
        assert_eq!(outcome.processes[0].completion_time, Some(7));
    }

    #[test]
    fn test_srtf_equal_remaining_keeps_earlier_arrival() {
        // At t=1 both have 3 units left; P1 arrived first and keeps the CPU.
        let mut e = Engine::new(&[ProcessInput::new(0, 4), ProcessInput::new(1, 3)], 0);
        run(&mut e);
        assert_eq!(e.process(0).completion_time, Some(4));
        assert_eq!(e.process(1).completion_time, Some(7));
    }

    #[test]
    fn test_srtf_overhead_after_each_completion_only() {
        let mut e = Engine::new(&[ProcessInput::new(0, 1), ProcessInput::new(0, 2)], 1);
        run(&mut e);
        let outcome = e.into_outcome(Algorithm::SjfPreemptive);
        let units: Vec<String> = outcome.timeline.iter().map(|l| l.to_string()).collect();
        assert_eq!(units, vec!["Overhead", "P1", "Overhead", "P2", "P2"]);
    }
}
