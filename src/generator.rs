//! Random workload generation.
//!
//! Produces process sets for experiments and property tests. Ids are
//! assigned sequentially ("P1", "P2", ...), so generated sets always
//! pass validation, and generation is reproducible from a seeded RNG.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::models::Process;

/// Configurable random process-set generator.
///
/// # Example
/// ```
/// use cpu_schedule::generator::Workload;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let processes = Workload::new(5).with_bursts(1..=8).generate(&mut rng);
/// assert_eq!(processes.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Workload {
    count: usize,
    arrival_range: RangeInclusive<i64>,
    burst_range: RangeInclusive<i64>,
    priority_range: RangeInclusive<i32>,
}

impl Workload {
    /// Creates a workload of `count` processes with default ranges
    /// (arrivals 0..=10, bursts 1..=10, priorities 0..=4).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival_range: 0..=10,
            burst_range: 1..=10,
            priority_range: 0..=4,
        }
    }

    /// Sets the arrival-time range.
    pub fn with_arrivals(mut self, range: RangeInclusive<i64>) -> Self {
        self.arrival_range = range;
        self
    }

    /// Sets the burst-time range. Drawn values are clamped to at
    /// least 1, keeping every generated process valid.
    pub fn with_bursts(mut self, range: RangeInclusive<i64>) -> Self {
        self.burst_range = range;
        self
    }

    /// Sets the priority range.
    pub fn with_priorities(mut self, range: RangeInclusive<i32>) -> Self {
        self.priority_range = range;
        self
    }

    /// Generates the process set.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (1..=self.count)
            .map(|n| {
                Process::new(
                    format!("P{n}"),
                    rng.random_range(self.arrival_range.clone()).max(0),
                    rng.random_range(self.burst_range.clone()).max(1),
                )
                .with_priority(rng.random_range(self.priority_range.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_count_and_ids() {
        let mut rng = SmallRng::seed_from_u64(1);
        let procs = Workload::new(4).generate(&mut rng);

        let ids: Vec<&str> = procs.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["P1", "P2", "P3", "P4"]);
    }

    #[test]
    fn test_generate_respects_ranges() {
        let mut rng = SmallRng::seed_from_u64(2);
        let procs = Workload::new(50)
            .with_arrivals(3..=6)
            .with_bursts(2..=4)
            .with_priorities(-1..=1)
            .generate(&mut rng);

        for p in &procs {
            assert!((3..=6).contains(&p.arrival_time));
            assert!((2..=4).contains(&p.burst_time));
            assert!((-1..=1).contains(&p.priority));
        }
    }

    #[test]
    fn test_generated_workload_always_validates() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..10 {
            let procs = Workload::new(20).generate(&mut rng);
            assert!(validate_processes(&procs).is_ok());
        }
    }

    #[test]
    fn test_generate_reproducible_from_seed() {
        let a = Workload::new(8).generate(&mut SmallRng::seed_from_u64(9));
        let b = Workload::new(8).generate(&mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_empty() {
        let mut rng = SmallRng::seed_from_u64(4);
        assert!(Workload::new(0).generate(&mut rng).is_empty());
    }
}
