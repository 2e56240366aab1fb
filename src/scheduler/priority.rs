//! Priority scheduling, non-preemptive and preemptive.
//!
//! Lower numeric priority value means higher precedence (priority 1
//! runs before priority 2). The non-preemptive variant picks once per
//! process; the preemptive variant re-decides every tick, so a newly
//! arrived higher-precedence process preempts the running one at its
//! arrival instant. Control structure is identical to SJF with the
//! selection criterion swapped.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use super::engine::{run_nonpreemptive, run_preemptive};
use super::SimulationRun;
use crate::models::Process;

pub(crate) fn simulate(processes: &[Process]) -> SimulationRun {
    run_nonpreemptive(processes, |p| i64::from(p.priority))
}

pub(crate) fn simulate_preemptive(processes: &[Process]) -> SimulationRun {
    run_preemptive(processes, |p, _| i64::from(p.priority))
}
