//! Simulation state shared by every discipline.
//!
//! Owns the process arena (indexed by position, in submission order),
//! the unit timeline and the logical clock. Disciplines only decide
//! *which* arena index runs next and for how long.

use log::trace;

use super::{Algorithm, SimulationOutcome};
use crate::models::{Label, Process, ProcessInput, Timeline};

#[derive(Debug)]
pub(super) struct Engine {
    processes: Vec<Process>,
    timeline: Timeline,
    now: i64,
    overhead: i64,
}

impl Engine {
    /// Builds fresh working copies; ids are assigned 1.. in input order.
    pub(super) fn new(inputs: &[ProcessInput], overhead: i64) -> Self {
        let processes = inputs
            .iter()
            .zip(1u32..)
            .map(|(input, id)| Process::from_input(id, input))
            .collect();
        Self {
            processes,
            timeline: Timeline::new(),
            now: 0,
            overhead,
        }
    }

    #[inline]
    pub(super) fn now(&self) -> i64 {
        self.now
    }

    #[inline]
    pub(super) fn processes(&self) -> &[Process] {
        &self.processes
    }

    #[inline]
    pub(super) fn process(&self, idx: usize) -> &Process {
        &self.processes[idx]
    }

    /// Whether any process is still incomplete.
    pub(super) fn has_pending(&self) -> bool {
        self.processes.iter().any(|p| !p.completed)
    }

    /// Emits one full overhead block. No-op when overhead is zero.
    pub(super) fn charge_overhead(&mut self) {
        if self.overhead == 0 {
            return;
        }
        trace!("t={}: overhead x{}", self.now, self.overhead);
        self.timeline.push_n(Label::Overhead, self.overhead);
        self.now += self.overhead;
    }

    /// Emits a single idle unit.
    pub(super) fn idle(&mut self) {
        trace!("t={}: idle", self.now);
        self.timeline.push(Label::Idle);
        self.now += 1;
    }

    /// Idles unit by unit until the clock reaches `t`.
    pub(super) fn idle_until(&mut self, t: i64) {
        while self.now < t {
            self.idle();
        }
    }

    /// Runs the process at `idx` for `units` time units.
    ///
    /// Returns `true` if the process completed. `units` must not exceed
    /// the remaining time.
    pub(super) fn execute(&mut self, idx: usize, units: i64) -> bool {
        let now = self.now + units;
        let process = &mut self.processes[idx];
        debug_assert!(units > 0 && units <= process.remaining_time);
        trace!("t={}: run P{} x{}", self.now, process.id, units);

        self.timeline.push_n(Label::Process(process.id), units);
        process.remaining_time -= units;
        self.now = now;

        if process.remaining_time == 0 {
            process.finalize(now);
            trace!("t={}: P{} completed", now, process.id);
            true
        } else {
            false
        }
    }

    pub(super) fn into_outcome(self, algorithm: Algorithm) -> SimulationOutcome {
        SimulationOutcome {
            algorithm,
            timeline: self.timeline,
            processes: self.processes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(overhead: i64) -> Engine {
        Engine::new(
            &[ProcessInput::new(2, 3), ProcessInput::new(0, 1)],
            overhead,
        )
    }

    #[test]
    fn test_ids_follow_input_order() {
        let e = engine(0);
        assert_eq!(e.process(0).id, 1);
        assert_eq!(e.process(1).id, 2);
        assert_eq!(e.now(), 0);
    }

    #[test]
    fn test_overhead_and_idle_advance_clock() {
        let mut e = engine(2);
        e.charge_overhead();
        e.idle_until(3);
        assert_eq!(e.now(), 3);
        let units: Vec<Label> = e.timeline.iter().copied().collect();
        assert_eq!(units, vec![Label::Overhead, Label::Overhead, Label::Idle]);
    }

    #[test]
    fn test_zero_overhead_is_noop() {
        let mut e = engine(0);
        e.charge_overhead();
        assert_eq!(e.now(), 0);
        assert!(e.timeline.is_empty());
    }

    #[test]
    fn test_execute_partial_then_complete() {
        let mut e = engine(0);
        e.idle_until(2);
        assert!(!e.execute(0, 2));
        assert_eq!(e.process(0).remaining_time, 1);
        assert!(e.has_pending());

        assert!(e.execute(0, 1));
        let p = e.process(0);
        assert!(p.completed);
        assert_eq!(p.completion_time, Some(5));
        assert_eq!(p.turnaround_time, Some(3));
        assert_eq!(p.waiting_time, Some(0));
    }
}
