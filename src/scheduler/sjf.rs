//! Non-preemptive Shortest-Job-First.
//!
//! At each decision point the ready process with the smallest burst runs
//! to completion. With nothing ready the CPU idles one unit and the
//! decision is retried.

use super::engine::Engine;
use crate::dispatching::{rules, select_next};

pub(super) fn run(engine: &mut Engine) {
    engine.charge_overhead();

    while engine.has_pending() {
        let now = engine.now();
        match select_next(engine.processes(), &rules::ShortestBurst, |p| p.is_ready(now)) {
            Some(idx) => {
                let burst = engine.process(idx).remaining_time;
                engine.execute(idx, burst);
                if engine.has_pending() {
                    engine.charge_overhead();
                }
            }
            None => engine.idle(),
        }
    }
}
