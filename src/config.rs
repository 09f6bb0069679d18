use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::error::{SimError, SimResult};
use crate::scheduler::Algorithm;

/// Parameters of one simulation run.
///
/// `time_quantum` is only read by Round Robin; other disciplines ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct SimulationConfig {
    pub algorithm: Algorithm,
    /// Context-switch cost in time units (>= 0).
    #[serde(default)]
    pub overhead: i64,
    #[serde(default)]
    pub time_quantum: Option<i64>,
}

impl SimulationConfig {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    pub fn with_overhead(mut self, overhead: i64) -> Self {
        self.overhead = overhead;
        self
    }

    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.time_quantum = Some(time_quantum);
        self
    }

    /// Checks the parameters against the selected algorithm.
    pub fn validate(&self) -> SimResult<()> {
        if self.overhead < 0 {
            return Err(SimError::invalid(format!(
                "overhead must be >= 0, got {}",
                self.overhead
            )));
        }
        if self.algorithm == Algorithm::RoundRobin {
            self.require_time_quantum()?;
        }
        Ok(())
    }

    /// The Round Robin quantum, or `InvalidParameter` if missing or non-positive.
    pub fn require_time_quantum(&self) -> SimResult<i64> {
        match self.time_quantum {
            Some(q) if q > 0 => Ok(q),
            Some(q) => Err(SimError::invalid(format!(
                "time quantum must be > 0, got {q}"
            ))),
            None => Err(SimError::invalid("Round Robin requires a time quantum")),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Fcfs,
            overhead: 0,
            time_quantum: None,
        }
    }
}
