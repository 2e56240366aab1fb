//! Round Robin scheduling.
//!
//! Preemptive, FIFO: each ready process runs for at most one quantum,
//! then rejoins the back of the queue if unfinished. Processes that
//! arrive during a slice are enqueued *before* the preempted process
//! is re-enqueued, so a just-run process never cuts ahead of an
//! arrival from the same slice. That ordering is the fairness
//! invariant of this discipline.
//!
//! The quantum is validated by the `run` dispatch before this module
//! is reached; `simulate` assumes a positive value.

use std::collections::{HashMap, VecDeque};

use super::engine::{by_arrival, ArrivalCursor};
use super::metrics::ProcessStats;
use super::SimulationRun;
use crate::models::{Process, Schedule};

pub(crate) fn simulate(processes: &[Process], quantum: i64) -> SimulationRun {
    let procs = by_arrival(processes);
    let mut remaining: Vec<i64> = procs.iter().map(|p| p.burst_time).collect();
    let mut cursor = ArrivalCursor::new();
    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut schedule = Schedule::new();
    let mut completions: HashMap<String, i64> = HashMap::new();
    let mut now = 0;

    while completions.len() < procs.len() {
        if ready.is_empty() {
            if let Some(next) = cursor.next_arrival(&procs) {
                if now < next {
                    schedule.push_slice(None, now, next);
                    now = next;
                }
            }
        }
        ready.extend(cursor.admit(&procs, now));

        let Some(idx) = ready.pop_front() else {
            break;
        };

        let slice = quantum.min(remaining[idx]);
        schedule.push_slice(Some(&procs[idx].id), now, now + slice);
        now += slice;
        remaining[idx] -= slice;

        // Arrivals from this slice enter the queue ahead of the
        // preempted process.
        ready.extend(cursor.admit(&procs, now));

        if remaining[idx] > 0 {
            ready.push_back(idx);
        } else {
            completions.insert(procs[idx].id.clone(), now);
        }
    }

    SimulationRun {
        stats: ProcessStats::from_completions(&procs, &completions),
        schedule,
    }
}
