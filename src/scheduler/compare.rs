//! Side-by-side comparison of all disciplines.
//!
//! Runs every algorithm over the same process set and reduces each
//! result to one aggregate row. The six runs share no mutable state;
//! each gets its own ready queue and remaining-time map.

use super::metrics::{aggregate, AggregateMetrics};
use super::{run, Algorithm};
use crate::models::Process;
use crate::validation::{validate_processes, validate_quantum, ValidationError};

/// Runs all six disciplines and returns one aggregate row per
/// algorithm, in [`Algorithm::ALL`] order.
///
/// A missing or non-positive quantum drops the Round Robin row rather
/// than failing the comparison; the five quantum-free disciplines
/// still produce rows. An invalid process set fails the whole
/// comparison.
pub fn compare_all(
    processes: &[Process],
    quantum: Option<i64>,
) -> Result<Vec<(Algorithm, AggregateMetrics)>, Vec<ValidationError>> {
    validate_processes(processes)?;

    let mut rows = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        if algorithm.needs_quantum() && validate_quantum(quantum).is_err() {
            continue;
        }
        let result = run(algorithm, processes, quantum)?;
        rows.push((algorithm, aggregate(&result.schedule, &result.stats)));
    }
    Ok(rows)
}
