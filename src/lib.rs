//! Classic CPU scheduling disciplines over a finite process set.
//!
//! Simulates FCFS, SJF (non-preemptive and preemptive), priority
//! scheduling (non-preemptive and preemptive), and Round Robin,
//! producing a Gantt-style timeline of CPU-occupancy intervals plus
//! per-process and aggregate performance metrics. Presentation is the
//! caller's job; everything here is in-memory data.
//!
//! # Modules
//!
//! - **`models`**: domain types — `Process`, `Schedule`, `ScheduleEntry`
//! - **`scheduler`**: the six disciplines, the `run` dispatch,
//!   metrics, and the all-algorithms comparison
//! - **`validation`**: input integrity checks (duplicate ids, burst
//!   and arrival bounds, quantum)
//! - **`generator`**: random workload generation for experiments
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::Process;
//! use cpu_schedule::scheduler::{run, Algorithm};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 8),
//!     Process::new("P2", 1, 4),
//! ];
//! let result = run(Algorithm::Fcfs, &processes, None).unwrap();
//! assert_eq!(result.schedule.makespan(), 12);
//! assert_eq!(result.stats[1].waiting_time, 7);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod generator;
pub mod models;
pub mod scheduler;
pub mod validation;
