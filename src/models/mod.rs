//! CPU scheduling domain models.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `ProcessInput` | Caller-supplied `(arrival, burst)` pair |
//! | `Process` | Engine-owned working record with completion metrics |
//! | `Label` | What the CPU did in one time unit |
//! | `Timeline` | Unit-by-unit execution record (Gantt data) |
//! | `Run` | Compressed stretch of identical labels |

mod process;
mod timeline;

pub use process::{Process, ProcessInput};
pub use timeline::{Label, Run, Timeline};
