//! First-Come, First-Served scheduling.
//!
//! Non-preemptive: processes run to completion in (arrival, id)
//! order. When the next process arrives after the current clock, the
//! gap becomes a single idle entry.

use std::collections::HashMap;

use super::engine::by_arrival;
use super::metrics::ProcessStats;
use super::SimulationRun;
use crate::models::{Process, Schedule};

pub(crate) fn simulate(processes: &[Process]) -> SimulationRun {
    let procs = by_arrival(processes);
    let mut schedule = Schedule::new();
    let mut completions: HashMap<String, i64> = HashMap::new();
    let mut now = 0;

    for p in &procs {
        if now < p.arrival_time {
            schedule.push_slice(None, now, p.arrival_time);
            now = p.arrival_time;
        }
        schedule.push_slice(Some(&p.id), now, now + p.burst_time);
        now += p.burst_time;
        completions.insert(p.id.clone(), now);
    }

    SimulationRun {
        stats: ProcessStats::from_completions(&procs, &completions),
        schedule,
    }
}
