//! Process model.
//!
//! A process is the unit of work handed to the CPU scheduler. The caller
//! supplies only `(arrival, burst)` pairs; the engine creates its own
//! working [`Process`] records from them for every run.
//!
//! # Time Representation
//! All times are integer logical time units relative to t=0.

use serde::{Deserialize, Serialize};

/// Caller-supplied description of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInput {
    /// Time unit at which the process becomes eligible to run (>= 0).
    pub arrival_time: i64,
    /// Total CPU time required (> 0).
    pub burst_time: i64,
}

impl ProcessInput {
    /// Creates a new process input.
    pub fn new(arrival_time: i64, burst_time: i64) -> Self {
        Self {
            arrival_time,
            burst_time,
        }
    }
}

impl From<(i64, i64)> for ProcessInput {
    fn from((arrival_time, burst_time): (i64, i64)) -> Self {
        Self::new(arrival_time, burst_time)
    }
}

/// Identity and simulation state of one schedulable process.
///
/// Completion fields stay `None` until the process finishes; once set,
/// `turnaround = completion - arrival` and `waiting = turnaround - burst`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Submission-order identifier, starting at 1.
    pub id: u32,
    /// Arrival time.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// CPU time still owed.
    pub remaining_time: i64,
    /// Whether `remaining_time` has reached zero.
    pub completed: bool,
    /// Time unit at which the last unit of work ended.
    pub completion_time: Option<i64>,
    /// Completion minus arrival.
    pub turnaround_time: Option<i64>,
    /// Turnaround minus burst.
    pub waiting_time: Option<i64>,
}

impl Process {
    /// Creates a fresh, unexecuted process.
    pub fn new(id: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            completed: false,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
        }
    }

    /// Creates a fresh process from caller input.
    pub fn from_input(id: u32, input: &ProcessInput) -> Self {
        Self::new(id, input.arrival_time, input.burst_time)
    }

    /// Display label, e.g. `P3`.
    pub fn label(&self) -> String {
        format!("P{}", self.id)
    }

    /// Whether the process has arrived by time `now`.
    #[inline]
    pub fn has_arrived(&self, now: i64) -> bool {
        self.arrival_time <= now
    }

    /// Whether the process can be dispatched at time `now`.
    #[inline]
    pub fn is_ready(&self, now: i64) -> bool {
        !self.completed && self.has_arrived(now)
    }

    /// Whether the process has never been executed.
    #[inline]
    pub fn is_untouched(&self) -> bool {
        self.remaining_time == self.burst_time
    }

    /// Marks the process complete at time `now` and fills in its metrics.
    pub fn finalize(&mut self, now: i64) {
        let turnaround = now - self.arrival_time;
        self.remaining_time = 0;
        self.completed = true;
        self.completion_time = Some(now);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_process_is_fresh() {
        let p = Process::new(1, 2, 5);
        assert_eq!(p.remaining_time, 5);
        assert!(!p.completed);
        assert!(p.is_untouched());
        assert!(p.completion_time.is_none());
        assert_eq!(p.label(), "P1");
    }

    #[test]
    fn test_readiness() {
        let mut p = Process::new(1, 3, 2);
        assert!(!p.is_ready(2));
        assert!(p.is_ready(3));
        p.finalize(5);
        assert!(!p.is_ready(10));
    }

    #[test]
    fn test_finalize_metrics() {
        let mut p = Process::new(2, 1, 3);
        p.finalize(8);
        assert!(p.completed);
        assert_eq!(p.remaining_time, 0);
        assert_eq!(p.completion_time, Some(8));
        assert_eq!(p.turnaround_time, Some(7));
        assert_eq!(p.waiting_time, Some(4));
    }

    #[test]
    fn test_from_tuple() {
        let input: ProcessInput = (4, 9).into();
        let p = Process::from_input(7, &input);
        assert_eq!(p.id, 7);
        assert_eq!(p.arrival_time, 4);
        assert_eq!(p.burst_time, 9);
    }
}
