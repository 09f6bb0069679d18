//! CPU scheduling disciplines and the simulation entry point.
//!
//! `Scheduler` validates a request, builds a private arena of fresh
//! [`Process`] records, and replays the chosen discipline in logical time.
//! The caller's inputs are never mutated, so the same process set can be
//! simulated any number of times.
//!
//! # Disciplines
//!
//! | Algorithm | Preemptive | Selection key |
//! |-----------|-----------|---------------|
//! | FCFS | no | arrival time |
//! | Non-Preemptive SJF | no | burst time |
//! | Preemptive SJF (SRTF) | yes, every unit | remaining time |
//! | Round Robin | yes, every quantum | FIFO ready queue |
//!
//! # Overhead
//!
//! `overhead` units of [`Label::Overhead`] are charged before the first
//! execution and between scheduling decisions, never after the last
//! process completes.

mod engine;
mod fcfs;
mod round_robin;
mod sjf;
mod srtf;

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::SimulationConfig;
use crate::error::{SimError, SimResult};
use crate::gantt;
use crate::models::{Label, Process, ProcessInput, Run, Timeline};
use crate::report::Report;
use crate::validation::validate_input;
use engine::Engine;

/// Scheduling discipline selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "FCFS")]
    Fcfs,
    #[serde(rename = "SJF_NP")]
    SjfNonPreemptive,
    #[serde(rename = "SJF_P")]
    SjfPreemptive,
    #[serde(rename = "RR")]
    RoundRobin,
}

impl Algorithm {
    /// All disciplines, in presentation order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::SjfNonPreemptive,
        Algorithm::SjfPreemptive,
        Algorithm::RoundRobin,
    ];

    /// Short selector code (`FCFS`, `SJF_NP`, `SJF_P`, `RR`).
    pub fn code(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::SjfNonPreemptive => "SJF_NP",
            Algorithm::SjfPreemptive => "SJF_P",
            Algorithm::RoundRobin => "RR",
        }
    }

    /// Human-readable name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::SjfNonPreemptive => "Non-Preemptive SJF",
            Algorithm::SjfPreemptive => "Preemptive SJF",
            Algorithm::RoundRobin => "Round Robin",
        }
    }

    /// Whether the discipline can interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::SjfPreemptive | Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SimError;

    /// Accepts the short code or the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| {
                a.code().eq_ignore_ascii_case(wanted) || a.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| SimError::UnknownAlgorithm(s.to_string()))
    }
}

/// Result of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Discipline that produced this outcome.
    pub algorithm: Algorithm,
    /// Unit-by-unit execution record.
    pub timeline: Timeline,
    /// Completed processes, ordered by id.
    pub processes: Vec<Process>,
}

impl SimulationOutcome {
    /// Latest completion time; equals the timeline length.
    pub fn total_time(&self) -> i64 {
        self.processes
            .iter()
            .filter_map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Finds a process by id.
    pub fn process(&self, id: u32) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Compressed timeline for Gantt rendering.
    pub fn runs(&self) -> Vec<Run> {
        gantt::compress_timeline(&self.timeline)
    }

    /// Ids in order of first execution.
    pub fn dispatch_order(&self) -> Vec<u32> {
        let mut order = Vec::new();
        for label in self.timeline.iter() {
            if let Label::Process(id) = *label {
                if !order.contains(&id) {
                    order.push(id);
                }
            }
        }
        order
    }

    /// Metrics report, including the idle/overhead split.
    pub fn report(&self) -> SimResult<Report> {
        let report = Report::calculate(&self.processes, self.algorithm.name())?;
        Ok(report.with_timeline(&self.timeline))
    }
}

/// Discrete-time CPU scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::scheduler::{Algorithm, Scheduler};
/// use cpu_sched_sim::models::ProcessInput;
///
/// let inputs = vec![ProcessInput::new(0, 5), ProcessInput::new(1, 3)];
/// let outcome = Scheduler::new(Algorithm::Fcfs).simulate(&inputs).unwrap();
///
/// assert_eq!(outcome.timeline.len(), 8);
/// assert_eq!(outcome.process(2).unwrap().waiting_time, Some(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    config: SimulationConfig,
}

impl Scheduler {
    /// Creates a scheduler with zero overhead.
    pub fn new(algorithm: Algorithm) -> Self {
        Self::from_config(SimulationConfig::new(algorithm))
    }

    /// Creates a scheduler from a configuration.
    pub fn from_config(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Sets the context-switch overhead.
    pub fn with_overhead(mut self, overhead: i64) -> Self {
        self.config.overhead = overhead;
        self
    }

    /// Sets the Round Robin time quantum.
    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.config.time_quantum = Some(time_quantum);
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs the configured discipline over a fresh copy of `inputs`.
    ///
    /// Fails before producing any timeline if the request is invalid;
    /// the first detected issue is returned.
    pub fn simulate(&self, inputs: &[ProcessInput]) -> SimResult<SimulationOutcome> {
        if let Err(errors) = validate_input(inputs, &self.config) {
            return Err(errors
                .into_iter()
                .next()
                .unwrap_or_else(|| SimError::invalid("invalid request")));
        }

        let algorithm = self.config.algorithm;
        debug!(
            "simulating {} over {} processes (overhead={}, quantum={:?})",
            algorithm,
            inputs.len(),
            self.config.overhead,
            self.config.time_quantum
        );

        let mut engine = Engine::new(inputs, self.config.overhead);
        match algorithm {
            Algorithm::Fcfs => fcfs::run(&mut engine),
            Algorithm::SjfNonPreemptive => sjf::run(&mut engine),
            Algorithm::SjfPreemptive => srtf::run(&mut engine),
            Algorithm::RoundRobin => {
                let quantum = self.config.require_time_quantum()?;
                round_robin::run(&mut engine, quantum);
            }
        }

        let outcome = engine.into_outcome(algorithm);
        debug!(
            "{} finished at t={} ({} units)",
            algorithm,
            outcome.total_time(),
            outcome.timeline.len()
        );
        Ok(outcome)
    }
}

/// Simulates `processes` under `algorithm`.
///
/// `time_quantum` is required for Round Robin and ignored otherwise.
pub fn simulate(
    algorithm: Algorithm,
    processes: &[ProcessInput],
    overhead: i64,
    time_quantum: Option<i64>,
) -> SimResult<SimulationOutcome> {
    let config = SimulationConfig {
        algorithm,
        overhead,
        time_quantum,
    };
    Scheduler::from_config(config).simulate(processes)
}
