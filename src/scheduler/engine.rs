//! Shared simulation primitives.
//!
//! Every discipline except FCFS drives the same machinery: a clone of
//! the process set sorted by arrival, a cursor over the
//! not-yet-arrived tail, and a ready queue selected from by a
//! three-level tie-break (primary criterion, then arrival time, then
//! id). The two generic engines in this module capture the
//! non-preemptive decide-once-per-process loop and the preemptive
//! unit-stepping loop; each discipline supplies only its selection
//! criterion.
//!
//! The tie-break tuple is a total order because ids are unique, so
//! picking the minimum is deterministic regardless of ready-queue
//! order and reproduces a stable full re-sort at every decision point.

use std::collections::HashMap;

use super::metrics::ProcessStats;
use super::SimulationRun;
use crate::models::{Process, Schedule};

/// Returns the processes cloned and sorted by (arrival_time, id).
pub(crate) fn by_arrival(processes: &[Process]) -> Vec<Process> {
    let mut procs = processes.to_vec();
    procs.sort_by(|a, b| {
        a.arrival_time
            .cmp(&b.arrival_time)
            .then_with(|| a.id.cmp(&b.id))
    });
    procs
}

/// Cursor over the not-yet-admitted tail of an arrival-sorted list.
pub(crate) struct ArrivalCursor {
    next: usize,
}

impl ArrivalCursor {
    pub(crate) fn new() -> Self {
        Self { next: 0 }
    }

    /// Advances past every process with `arrival_time <= now` and
    /// returns the range of newly admitted indices, in arrival order.
    pub(crate) fn admit(&mut self, procs: &[Process], now: i64) -> std::ops::Range<usize> {
        let start = self.next;
        while self.next < procs.len() && procs[self.next].arrival_time <= now {
            self.next += 1;
        }
        start..self.next
    }

    /// Arrival tick of the next process yet to arrive.
    pub(crate) fn next_arrival(&self, procs: &[Process]) -> Option<i64> {
        procs.get(self.next).map(|p| p.arrival_time)
    }
}

/// Position in `ready` of the process minimizing
/// (key, arrival_time, id).
pub(crate) fn select_min(
    ready: &[usize],
    procs: &[Process],
    key: impl Fn(usize) -> i64,
) -> Option<usize> {
    (0..ready.len()).min_by(|&a, &b| {
        let (ia, ib) = (ready[a], ready[b]);
        key(ia)
            .cmp(&key(ib))
            .then_with(|| procs[ia].arrival_time.cmp(&procs[ib].arrival_time))
            .then_with(|| procs[ia].id.cmp(&procs[ib].id))
    })
}

/// Non-preemptive engine: at each decision point, admit all arrived
/// processes, pick the ready process minimizing `criterion`, and run
/// it to completion. When no process is ready the clock jumps to the
/// next arrival behind one idle entry.
pub(crate) fn run_nonpreemptive<F>(processes: &[Process], criterion: F) -> SimulationRun
where
    F: Fn(&Process) -> i64,
{
    let procs = by_arrival(processes);
    let mut cursor = ArrivalCursor::new();
    let mut ready: Vec<usize> = Vec::new();
    let mut schedule = Schedule::new();
    let mut completions: HashMap<String, i64> = HashMap::new();
    let mut now = 0;

    while completions.len() < procs.len() {
        ready.extend(cursor.admit(&procs, now));

        if ready.is_empty() {
            match cursor.next_arrival(&procs) {
                Some(next) => {
                    schedule.push_slice(None, now, next);
                    now = next;
                    continue;
                }
                None => break,
            }
        }

        let Some(pos) = select_min(&ready, &procs, |i| criterion(&procs[i])) else {
            break;
        };
        let idx = ready.remove(pos);
        let p = &procs[idx];
        schedule.push_slice(Some(&p.id), now, now + p.burst_time);
        now += p.burst_time;
        completions.insert(p.id.clone(), now);
    }

    SimulationRun {
        stats: ProcessStats::from_completions(&procs, &completions),
        schedule,
    }
}

/// Preemptive engine: unit-stepping. At every tick, admit arrivals,
/// pick the ready process minimizing `criterion` (which also sees the
/// process's remaining time), run it for exactly one tick, and record
/// completion when its remaining time reaches zero. Same-owner ticks
/// and back-to-back idle gaps collapse into single schedule entries.
pub(crate) fn run_preemptive<F>(processes: &[Process], criterion: F) -> SimulationRun
where
    F: Fn(&Process, i64) -> i64,
{
    let procs = by_arrival(processes);
    let mut remaining: Vec<i64> = procs.iter().map(|p| p.burst_time).collect();
    let mut cursor = ArrivalCursor::new();
    let mut ready: Vec<usize> = Vec::new();
    let mut schedule = Schedule::new();
    let mut completions: HashMap<String, i64> = HashMap::new();
    let mut now = 0;

    while completions.len() < procs.len() {
        ready.extend(cursor.admit(&procs, now));

        if ready.is_empty() {
            match cursor.next_arrival(&procs) {
                Some(next) => {
                    schedule.push_slice(None, now, next);
                    now = next;
                    continue;
                }
                None => break,
            }
        }

        let Some(pos) = select_min(&ready, &procs, |i| criterion(&procs[i], remaining[i])) else {
            break;
        };
        let idx = ready[pos];
        schedule.push_slice(Some(&procs[idx].id), now, now + 1);
        remaining[idx] -= 1;
        now += 1;

        if remaining[idx] == 0 {
            completions.insert(procs[idx].id.clone(), now);
            ready.remove(pos);
        }
    }

    SimulationRun {
        stats: ProcessStats::from_completions(&procs, &completions),
        schedule,
    }
}
