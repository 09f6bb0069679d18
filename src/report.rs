//! Simulation metrics report.
//!
//! Aggregates per-process metrics from a completed process set.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Useful time | Σ burst |
//! | Total time | max(completion) |
//! | Wasted time | total - useful (idle + overhead) |
//! | Efficiency | useful / total, in (0, 1] |
//!
//! Efficiency is returned as the raw ratio; rounding and percentage
//! formatting belong to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::models::{Process, Timeline};

/// Metrics of one completed process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    pub id: u32,
    pub arrival_time: i64,
    pub burst_time: i64,
    pub completion_time: i64,
    pub turnaround_time: i64,
    pub waiting_time: i64,
}

impl ProcessMetrics {
    /// Extracts metrics from a completed process.
    ///
    /// Fails with `InvalidParameter` if the process has not completed.
    pub fn from_process(process: &Process) -> SimResult<Self> {
        let not_done = || SimError::invalid(format!("P{} has not completed", process.id));
        if !process.completed {
            return Err(not_done());
        }
        Ok(Self {
            id: process.id,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            completion_time: process.completion_time.ok_or_else(not_done)?,
            turnaround_time: process.turnaround_time.ok_or_else(not_done)?,
            waiting_time: process.waiting_time.ok_or_else(not_done)?,
        })
    }
}

/// Aggregate performance report for one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Algorithm name.
    pub algorithm: String,
    /// Per-process rows, in input order.
    pub processes: Vec<ProcessMetrics>,
    pub average_turnaround_time: f64,
    pub average_waiting_time: f64,
    /// Σ burst time.
    pub useful_time: i64,
    /// Latest completion time.
    pub total_time: i64,
    /// `total_time - useful_time`.
    pub wasted_time: i64,
    /// `useful_time / total_time`.
    pub efficiency: f64,
    /// Idle share of the wasted time; known only with a timeline.
    pub idle_time: Option<i64>,
    /// Overhead share of the wasted time; known only with a timeline.
    pub overhead_time: Option<i64>,
}

impl Report {
    /// Computes the report from a completed process set.
    ///
    /// # Errors
    /// - `EmptyInput` if `processes` is empty.
    /// - `InvalidParameter` if any process is incomplete.
    pub fn calculate(processes: &[Process], algorithm: impl Into<String>) -> SimResult<Self> {
        if processes.is_empty() {
            return Err(SimError::EmptyInput);
        }

        let rows = processes
            .iter()
            .map(ProcessMetrics::from_process)
            .collect::<SimResult<Vec<_>>>()?;

        let mut total_turnaround: i64 = 0;
        let mut total_waiting: i64 = 0;
        let mut useful_time: i64 = 0;
        let mut total_time: i64 = 0;
        for row in &rows {
            total_turnaround += row.turnaround_time;
            total_waiting += row.waiting_time;
            useful_time += row.burst_time;
            total_time = total_time.max(row.completion_time);
        }

        if total_time <= 0 {
            return Err(SimError::invalid("total time must be > 0"));
        }

        let count = rows.len() as f64;
        Ok(Self {
            algorithm: algorithm.into(),
            processes: rows,
            average_turnaround_time: total_turnaround as f64 / count,
            average_waiting_time: total_waiting as f64 / count,
            useful_time,
            total_time,
            wasted_time: total_time - useful_time,
            efficiency: useful_time as f64 / total_time as f64,
            idle_time: None,
            overhead_time: None,
        })
    }

    /// Splits wasted time into idle and overhead using the run's timeline.
    pub fn with_timeline(mut self, timeline: &Timeline) -> Self {
        self.idle_time = Some(timeline.idle_time() as i64);
        self.overhead_time = Some(timeline.overhead_time() as i64);
        self
    }

    /// Efficiency as a percentage (unrounded).
    pub fn efficiency_percent(&self) -> f64 {
        self.efficiency * 100.0
    }

    /// Row for a process id.
    pub fn metrics_for(&self, id: u32) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|m| m.id == id)
    }
}

/// Computes a report for `processes` under the given algorithm name.
pub fn report(processes: &[Process], algorithm: &str) -> SimResult<Report> {
    Report::calculate(processes, algorithm)
}
