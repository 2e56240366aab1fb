//! Shortest Job First scheduling, non-preemptive and preemptive.
//!
//! The non-preemptive variant decides once per process: among the
//! ready processes, run the one with the smallest total burst to
//! completion. The preemptive variant (Shortest Remaining Time First)
//! re-decides every tick on the smallest *remaining* time, so a newly
//! arrived shorter job preempts the running one at its arrival
//! instant.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use super::engine::{run_nonpreemptive, run_preemptive};
use super::SimulationRun;
use crate::models::Process;

pub(crate) fn simulate(processes: &[Process]) -> SimulationRun {
    run_nonpreemptive(processes, |p| p.burst_time)
}

pub(crate) fn simulate_preemptive(processes: &[Process]) -> SimulationRun {
    run_preemptive(processes, |_, remaining| remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleEntry;

    fn entry(pid: &str, start: i64, end: i64) -> ScheduleEntry {
        ScheduleEntry {
            pid: Some(pid.into()),
            start,
            end,
        }
    }

    #[test]
    fn test_sjf_picks_shortest_ready() {
        // At t=7 (P1 done) both P2 and P3 have arrived; P3 is shorter.
        let procs = vec![
            Process::new("P1", 0, 7),
            Process::new("P2", 2, 4),
            Process::new("P3", 4, 1),
        ];
        let run = simulate(&procs);

        let order: Vec<_> = run
            .schedule
            .entries
            .iter()
            .map(|e| e.pid.as_deref())
            .collect();
        assert_eq!(order, [Some("P1"), Some("P3"), Some("P2")]);
    }

    #[test]
    fn test_sjf_never_revisits_running_job() {
        // P2 (burst 1) arrives at t=1 while P1 (burst 10) is running;
        // non-preemptive SJF lets P1 finish.
        let procs = vec![Process::new("P1", 0, 10), Process::new("P2", 1, 1)];
        let run = simulate(&procs);

        assert_eq!(run.schedule.entries[0], entry("P1", 0, 10));
        assert_eq!(run.schedule.entries[1], entry("P2", 10, 11));
    }

    #[test]
    fn test_sjf_idle_jump_to_next_arrival() {
        let procs = vec![Process::new("P1", 5, 2)];
        let run = simulate(&procs);

        assert_eq!(run.schedule.entry_count(), 2);
        assert!(run.schedule.entries[0].is_idle());
        assert_eq!(run.schedule.entries[0].end, 5);
        assert!(run.schedule.is_contiguous());
    }

    #[test]
    fn test_sjf_equal_bursts_fall_back_to_arrival_then_id() {
        let procs = vec![
            Process::new("P3", 0, 4),
            Process::new("P2", 0, 4),
            Process::new("P1", 1, 4),
        ];
        let run = simulate(&procs);

        let order: Vec<_> = run
            .schedule
            .entries
            .iter()
            .map(|e| e.pid.as_deref())
            .collect();
        assert_eq!(order, [Some("P2"), Some("P3"), Some("P1")]);
    }

    #[test]
    fn test_srtf_demo_set() {
        // The classic staircase: each arrival is shorter than what is
        // left of P1, so P1 starts first and finishes last.
        let procs = vec![
            Process::new("P1", 0, 8),
            Process::new("P2", 1, 4),
            Process::new("P3", 2, 2),
            Process::new("P4", 3, 1),
        ];
        let run = simulate_preemptive(&procs);

        assert_eq!(
            run.schedule.entries,
            vec![
                entry("P1", 0, 1),
                entry("P2", 1, 2),
                entry("P3", 2, 4),
                entry("P4", 4, 5),
                entry("P2", 5, 8),
                entry("P1", 8, 15),
            ]
        );

        let completion: Vec<_> = run.stats.iter().map(|s| s.completion_time).collect();
        assert_eq!(completion, [15, 8, 4, 5]);

        // P1 started first but completes after everyone else.
        let p1_done = run.stats[0].completion_time;
        assert!(run.stats[1..].iter().all(|s| s.completion_time < p1_done));
    }

    #[test]
    fn test_srtf_merges_uninterrupted_ticks() {
        // No competition: the unit-stepping run must still collapse to
        // one bar per process.
        let procs = vec![Process::new("P1", 0, 5), Process::new("P2", 5, 3)];
        let run = simulate_preemptive(&procs);

        assert_eq!(
            run.schedule.entries,
            vec![entry("P1", 0, 5), entry("P2", 5, 8)]
        );
    }

    #[test]
    fn test_srtf_idle_gaps_are_single_entries() {
        let procs = vec![Process::new("P1", 3, 2), Process::new("P2", 9, 1)];
        let run = simulate_preemptive(&procs);

        let idles: Vec<_> = run
            .schedule
            .entries
            .iter()
            .filter(|e| e.is_idle())
            .collect();
        assert_eq!(idles.len(), 2);
        assert!(run.schedule.is_contiguous());
    }

    #[test]
    fn test_srtf_waiting_times_non_negative() {
        let procs = vec![
            Process::new("P1", 0, 8),
            Process::new("P2", 1, 4),
            Process::new("P3", 2, 2),
        ];
        let run = simulate_preemptive(&procs);
        assert!(run.stats.iter().all(|s| s.waiting_time >= 0));
    }

    #[test]
    fn test_sjf_empty() {
        assert!(simulate(&[]).schedule.is_empty());
        assert!(simulate_preemptive(&[]).stats.is_empty());
    }
}
