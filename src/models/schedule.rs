//! Schedule (CPU timeline) model.
//!
//! A schedule is the Gantt-chart view of one simulation run: a
//! sequence of contiguous CPU-occupancy intervals, each owned by one
//! process or marking the CPU as idle.
//!
//! # Invariants
//!
//! Across a full schedule: entries are contiguous and non-overlapping,
//! ordered by start, cover `[0, makespan)` with no gaps, and no two
//! adjacent entries share an owner (consecutive same-process or
//! consecutive idle intervals are merged). `push_slice` is the single
//! write path every algorithm uses, so these hold by construction.

use serde::{Deserialize, Serialize};

/// One contiguous CPU-occupancy interval.
///
/// `pid == None` marks an idle interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Owning process id, or `None` when the CPU is idle.
    pub pid: Option<String>,
    /// Start tick (inclusive).
    pub start: i64,
    /// End tick (exclusive). Always greater than `start`.
    pub end: i64,
}

impl ScheduleEntry {
    /// Interval length (end - start) in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether this interval marks an idle CPU.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.pid.is_none()
    }
}

/// A complete CPU timeline for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Intervals ordered by start time.
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a CPU slice, merging into the previous entry when it
    /// has the same owner (or both are idle) and is contiguous.
    ///
    /// Zero-length slices are dropped, so the `end > start` entry
    /// invariant always holds.
    pub fn push_slice(&mut self, pid: Option<&str>, start: i64, end: i64) {
        if end <= start {
            return;
        }
        if let Some(last) = self.entries.last_mut() {
            if last.end == start && last.pid.as_deref() == pid {
                last.end = end;
                return;
            }
        }
        self.entries.push(ScheduleEntry {
            pid: pid.map(str::to_owned),
            start,
            end,
        });
    }

    /// Makespan: end tick of the last interval (0 for an empty schedule).
    pub fn makespan(&self) -> i64 {
        self.entries.last().map(|e| e.end).unwrap_or(0)
    }

    /// Total time the CPU spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.entries
            .iter()
            .filter(|e| !e.is_idle())
            .map(ScheduleEntry::duration)
            .sum()
    }

    /// Total time the CPU spent idle.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// All intervals during which `pid` held the CPU, in time order.
    pub fn entries_for(&self, pid: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.pid.as_deref() == Some(pid))
            .collect()
    }

    /// Number of intervals.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule has no intervals.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks the full-schedule invariants: entries start at 0, are
    /// contiguous and non-empty, and no two adjacent entries share an
    /// owner.
    pub fn is_contiguous(&self) -> bool {
        let mut now = 0;
        let mut prev: Option<&ScheduleEntry> = None;
        for entry in &self.entries {
            if entry.start != now || entry.end <= entry.start {
                return false;
            }
            if let Some(p) = prev {
                if p.pid == entry.pid {
                    return false;
                }
            }
            now = entry.end;
            prev = Some(entry);
        }
        true
    }
}
