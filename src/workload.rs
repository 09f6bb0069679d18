//! Synthetic workload generation.
//!
//! Produces random but reproducible process sets for demos, benchmarks
//! and property tests. Generation is driven by a caller-supplied RNG;
//! [`WorkloadProfile::generate_seeded`] uses a seeded `StdRng` so a given
//! seed always yields the same workload.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::ProcessInput;

/// Shape of a generated workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadProfile {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival time (inclusive).
    pub max_arrival: i64,
    /// Shortest possible burst (inclusive, >= 1).
    pub min_burst: i64,
    /// Longest possible burst (inclusive).
    pub max_burst: i64,
}

impl WorkloadProfile {
    /// Creates a profile with arrivals in `0..=10` and bursts in `1..=10`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
        }
    }

    /// Sets the latest arrival time (clamped to >= 0).
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the burst range (clamped so that `1 <= min <= max`).
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst.max(1);
        self.max_burst = max_burst.max(self.min_burst);
        self
    }

    /// Generates a workload using `rng`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessInput> {
        let max_arrival = self.max_arrival.max(0);
        let min_burst = self.min_burst.max(1);
        let max_burst = self.max_burst.max(min_burst);

        (0..self.count)
            .map(|_| {
                ProcessInput::new(
                    rng.random_range(0..=max_arrival),
                    rng.random_range(min_burst..=max_burst),
                )
            })
            .collect()
    }

    /// Generates a workload from a fixed seed.
    pub fn generate_seeded(&self, seed: u64) -> Vec<ProcessInput> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}

impl Default for WorkloadProfile {
    fn default() -> Self {
        Self::new(5)
    }
}
