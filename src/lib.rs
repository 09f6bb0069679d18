//! Discrete-time CPU scheduling simulator.
//!
//! Replays a known set of processes under a classic scheduling discipline
//! in logical time and reports the resulting timeline and metrics.
//! Output is fully deterministic: no wall clock, no randomness.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessInput`, `Process`, `Label`,
//!   `Timeline`, `Run`
//! - **`dispatching`**: Selection rules and the uniform tie-break
//! - **`scheduler`**: FCFS, non-preemptive SJF, SRTF and Round Robin
//! - **`gantt`**: Timeline run-length encoding for charts
//! - **`report`**: Turnaround, waiting, wasted time and efficiency
//! - **`validation`**: Input integrity checks
//! - **`workload`**: Seeded random workloads
//!
//! # Pipeline
//!
//! ```
//! use cpu_sched_sim::{compress_timeline, simulate, Algorithm, ProcessInput};
//!
//! let inputs = vec![ProcessInput::new(0, 4), ProcessInput::new(1, 5)];
//! let outcome = simulate(Algorithm::RoundRobin, &inputs, 0, Some(2)).unwrap();
//! let runs = compress_timeline(&outcome.timeline);
//! let report = outcome.report().unwrap();
//!
//! assert_eq!(runs.len(), 4);
//! assert_eq!(report.total_time, 9);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod gantt;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use config::SimulationConfig;
pub use error::{SimError, SimResult};
pub use gantt::{compress_timeline, expand_runs};
pub use models::{Label, Process, ProcessInput, Run, Timeline};
pub use report::{report, ProcessMetrics, Report};
pub use scheduler::{simulate, Algorithm, Scheduler, SimulationOutcome};
