//! Process model.
//!
//! A process is the immutable input record of one simulated job: when
//! it arrives, how much CPU time it needs, and its priority. Remaining
//! burst time during a run is tracked by the simulator, never on the
//! record itself.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 3

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Lower `priority` value means *higher* scheduling precedence
/// (priority 1 runs before priority 2).
///
/// # Time Representation
/// All times are integer ticks relative to simulation start (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (e.g. "P1").
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required (ticks). Must be positive.
    pub burst_time: i64,
    /// Scheduling priority (lower = higher precedence).
    pub priority: i32,
}

impl Process {
    /// Creates a process with the default priority (0).
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 3, 7).with_priority(2);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, 2);
    }

    #[test]
    fn test_process_default_priority() {
        let p = Process::new("P1", 0, 1);
        assert_eq!(p.priority, 0);
    }

    #[test]
    fn test_process_serde_round_trip() {
        let p = Process::new("P1", 2, 5).with_priority(1);
        let json = serde_json::to_string(&p).unwrap();
        let back: Process = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
