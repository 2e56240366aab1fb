//! Per-process and aggregate performance metrics.
//!
//! Computes standard scheduling performance indicators from a
//! completed run. All values are read-only snapshots, recomputed from
//! scratch for every run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround time | completion - arrival |
//! | Waiting time | turnaround - burst |
//! | CPU utilization | busy_time / makespan |
//! | Throughput | completed processes / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Process, Schedule};

/// Derived timing facts for one process in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// Process id.
    pub pid: String,
    /// Input arrival tick (echoed for display).
    pub arrival_time: i64,
    /// Input burst time (echoed for display).
    pub burst_time: i64,
    /// Input priority (echoed for display).
    pub priority: i32,
    /// First tick at which the whole burst has been consumed.
    pub completion_time: i64,
    /// completion - arrival.
    pub turnaround_time: i64,
    /// turnaround - burst. Never negative for a correct scheduler.
    pub waiting_time: i64,
}

impl ProcessStats {
    /// Derives the stats for one process from its completion tick.
    pub fn derive(process: &Process, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            pid: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
        }
    }

    /// Derives stats for a whole run, sorted by pid for stable display.
    pub(crate) fn from_completions(
        processes: &[Process],
        completions: &HashMap<String, i64>,
    ) -> Vec<Self> {
        let mut stats: Vec<Self> = processes
            .iter()
            .filter_map(|p| completions.get(&p.id).map(|&ct| Self::derive(p, ct)))
            .collect();
        stats.sort_by(|a, b| a.pid.cmp(&b.pid));
        stats
    }
}

/// Aggregate metrics of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    /// Mean waiting time across all processes.
    pub avg_waiting_time: f64,
    /// Mean turnaround time across all processes.
    pub avg_turnaround_time: f64,
    /// busy_time / makespan (0.0..1.0). 0.0 for an empty run.
    pub cpu_utilization: f64,
    /// Completed processes per tick of makespan. 0.0 for an empty run.
    pub throughput: f64,
    /// Smallest per-process waiting time.
    pub min_waiting_time: i64,
    /// Largest per-process waiting time.
    pub max_waiting_time: i64,
}

/// Computes aggregate metrics from a schedule and its per-process stats.
///
/// A zero-process or zero-makespan run short-circuits every ratio to
/// 0.0 rather than dividing by zero.
pub fn aggregate(schedule: &Schedule, stats: &[ProcessStats]) -> AggregateMetrics {
    if stats.is_empty() {
        return AggregateMetrics::default();
    }

    let n = stats.len() as f64;
    let avg_waiting_time = stats.iter().map(|s| s.waiting_time as f64).sum::<f64>() / n;
    let avg_turnaround_time = stats.iter().map(|s| s.turnaround_time as f64).sum::<f64>() / n;

    let makespan = schedule.makespan();
    let (cpu_utilization, throughput) = if makespan > 0 {
        (
            schedule.busy_time() as f64 / makespan as f64,
            n / makespan as f64,
        )
    } else {
        (0.0, 0.0)
    };

    let min_waiting_time = stats.iter().map(|s| s.waiting_time).min().unwrap_or(0);
    let max_waiting_time = stats.iter().map(|s| s.waiting_time).max().unwrap_or(0);

    AggregateMetrics {
        avg_waiting_time,
        avg_turnaround_time,
        cpu_utilization,
        throughput,
        min_waiting_time,
        max_waiting_time,
    }
}
