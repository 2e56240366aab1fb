//! Scheduling disciplines, run dispatch, and metrics.
//!
//! Six classic single-CPU disciplines over one shared process model:
//!
//! | Identifier | Discipline | Preemptive |
//! |------------|-----------|------------|
//! | `FCFS` | First-Come, First-Served | no |
//! | `SJF` | Shortest Job First | no |
//! | `SJF_PREEMPTIVE` | Shortest Remaining Time First | yes |
//! | `PRIORITY` | Priority (lower value first) | no |
//! | `PRIORITY_PREEMPTIVE` | Priority | yes |
//! | `RR` | Round Robin | yes |
//!
//! Each invocation of [`run`] is a self-contained simulation from a
//! fresh ready queue and remaining-time map; no scheduler state
//! persists between runs, so repeated runs on the same input return
//! structurally equal results.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod compare;
mod engine;
mod fcfs;
mod metrics;
mod priority;
mod round_robin;
mod sjf;

pub use compare::compare_all;
pub use metrics::{aggregate, AggregateMetrics, ProcessStats};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Process, Schedule};
use crate::validation::{
    validate_processes, validate_quantum, ValidationError, ValidationErrorKind,
};

/// The closed set of scheduling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Job First, non-preemptive.
    Sjf,
    /// Shortest Remaining Time First.
    SjfPreemptive,
    /// Priority, non-preemptive.
    Priority,
    /// Priority, preemptive.
    PriorityPreemptive,
    /// Round Robin.
    RoundRobin,
}

impl Algorithm {
    /// All disciplines, in comparison-table order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::SjfPreemptive,
        Algorithm::Priority,
        Algorithm::PriorityPreemptive,
        Algorithm::RoundRobin,
    ];

    /// Stable identifier (e.g. `"SJF_PREEMPTIVE"`).
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::SjfPreemptive => "SJF_PREEMPTIVE",
            Algorithm::Priority => "PRIORITY",
            Algorithm::PriorityPreemptive => "PRIORITY_PREEMPTIVE",
            Algorithm::RoundRobin => "RR",
        }
    }

    /// Whether the discipline consumes a time quantum.
    pub fn needs_quantum(self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| {
                ValidationError::new(
                    ValidationErrorKind::UnknownAlgorithm,
                    format!("Unknown algorithm identifier: {s}"),
                )
            })
    }
}

/// Output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    /// The CPU timeline.
    pub schedule: Schedule,
    /// Per-process timing facts, sorted by pid.
    pub stats: Vec<ProcessStats>,
}

/// Runs one scheduling discipline over a process set.
///
/// All validation happens before any simulation: duplicate ids,
/// non-positive bursts, negative arrivals, and (for Round Robin) a
/// missing or non-positive quantum fail fast with every detected
/// issue. An empty process set is not an error and yields empty
/// outputs. The quantum is ignored by every discipline except Round
/// Robin.
pub fn run(
    algorithm: Algorithm,
    processes: &[Process],
    quantum: Option<i64>,
) -> Result<SimulationRun, Vec<ValidationError>> {
    let mut errors = Vec::new();
    if let Err(errs) = validate_processes(processes) {
        errors = errs;
    }

    let mut quantum_ticks = 0;
    if algorithm.needs_quantum() {
        match validate_quantum(quantum) {
            Ok(q) => quantum_ticks = q,
            Err(e) => errors.push(e),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(match algorithm {
        Algorithm::Fcfs => fcfs::simulate(processes),
        Algorithm::Sjf => sjf::simulate(processes),
        Algorithm::SjfPreemptive => sjf::simulate_preemptive(processes),
        Algorithm::Priority => priority::simulate(processes),
        Algorithm::PriorityPreemptive => priority::simulate_preemptive(processes),
        Algorithm::RoundRobin => round_robin::simulate(processes, quantum_ticks),
    })
}
