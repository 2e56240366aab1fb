//! Input validation for simulation runs.
//!
//! Checks structural integrity of a process set (and, for Round
//! Robin, the time quantum) before any scheduling happens. Detects:
//! - Duplicate process ids
//! - Non-positive burst times
//! - Negative arrival times
//! - Missing or non-positive quanta
//!
//! Validation always runs to completion and reports every issue it
//! finds; simulation starts only on a clean input, so no partial
//! schedule is ever produced.

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same id.
    DuplicateId,
    /// A process has a zero or negative burst time.
    NonPositiveBurst,
    /// A process has a negative arrival time.
    NegativeArrival,
    /// Round Robin quantum is missing, zero, or negative.
    InvalidQuantum,
    /// An algorithm identifier does not name a known discipline.
    UnknownAlgorithm,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process set before simulation.
///
/// Checks:
/// 1. No duplicate process ids
/// 2. Every burst time is positive
/// 3. Every arrival time is non-negative
///
/// An empty process set passes: it is a trivial input, not an error.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process id: {}", p.id),
            ));
        }
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }
        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks a Round Robin time quantum, returning the validated value.
///
/// `None` and non-positive values are both rejected.
pub fn validate_quantum(quantum: Option<i64>) -> Result<i64, ValidationError> {
    match quantum {
        Some(q) if q > 0 => Ok(q),
        Some(q) => Err(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Time quantum must be a positive integer, got {q}"),
        )),
        None => Err(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            "Round Robin requires a time quantum",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 2, 3).with_priority(1),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let procs = vec![Process::new("P1", 0, 5), Process::new("P1", 1, 2)];
        let errors = validate_processes(&procs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_zero_burst() {
        let procs = vec![Process::new("P1", 0, 0)];
        let errors = validate_processes(&procs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_negative_arrival() {
        let procs = vec![Process::new("P1", -1, 5)];
        let errors = validate_processes(&procs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_multiple_errors_reported() {
        let procs = vec![
            Process::new("P1", -3, 0),
            Process::new("P1", 1, 2),
        ];
        let errors = validate_processes(&procs).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_quantum_valid() {
        assert_eq!(validate_quantum(Some(2)), Ok(2));
    }

    #[test]
    fn test_quantum_rejects_zero_and_negative() {
        assert_eq!(
            validate_quantum(Some(0)).unwrap_err().kind,
            ValidationErrorKind::InvalidQuantum
        );
        assert_eq!(
            validate_quantum(Some(-4)).unwrap_err().kind,
            ValidationErrorKind::InvalidQuantum
        );
    }

    #[test]
    fn test_quantum_rejects_missing() {
        let err = validate_quantum(None).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidQuantum);
        assert!(err.to_string().contains("quantum"));
    }
}
