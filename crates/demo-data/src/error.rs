//! Error types for the demo-data crate.
//!
//! This module defines semantic error enums for configuration checks and
//! batch generation, following the project's error handling conventions with
//! `thiserror`. Generators never panic: every failure mode is returned as a
//! value for the caller to decide next steps.

use thiserror::Error;

/// Errors raised when a [`crate::GeneratorConfig`] is inconsistent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A per-student count range has `min` greater than `max`.
    #[error("{field} range is inverted: min {min} exceeds max {max}")]
    InvertedRange {
        /// Name of the offending configuration field.
        field: &'static str,
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A rate field falls outside the unit interval.
    #[error("{field} must be within 0.0..=1.0, got {value}")]
    RateOutOfRange {
        /// Name of the offending configuration field.
        field: &'static str,
        /// Configured value.
        value: f64,
    },
}

/// Errors raised during batch generation.
///
/// A generator either returns a complete, validated batch or one of these
/// errors; partially valid batches are never surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The requested user total was zero.
    #[error("no users requested; target count must be at least 1")]
    NoUsersRequested,

    /// No source users with the student role were provided.
    #[error("no users with the student role were provided")]
    NoStudentUsers,

    /// No source users with the faculty role were provided.
    #[error("no users with the faculty role were provided")]
    NoFacultyUsers,

    /// Post-generation validation found invariant violations; the whole
    /// batch is rejected.
    #[error("batch validation rejected {} violation(s): {}", violations.len(), violations.join("; "))]
    BatchValidation {
        /// Human-readable description of every violating record.
        violations: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_student_users_formats_correctly() {
        let err = GenerationError::NoStudentUsers;
        assert_eq!(
            err.to_string(),
            "no users with the student role were provided"
        );
    }

    #[test]
    fn batch_validation_aggregates_violations() {
        let err = GenerationError::BatchValidation {
            violations: vec![
                "user 0: duplicate email".to_owned(),
                "user 3: malformed email".to_owned(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "batch validation rejected 2 violation(s): user 0: duplicate email; user 3: malformed email"
        );
    }

    #[test]
    fn config_rate_error_formats_correctly() {
        let err = ConfigError::RateOutOfRange {
            field: "verification_rate",
            value: 1.2,
        };
        assert_eq!(
            err.to_string(),
            "verification_rate must be within 0.0..=1.0, got 1.2"
        );
    }

    #[test]
    fn config_range_error_formats_correctly() {
        let err = ConfigError::InvertedRange {
            field: "skills_per_student",
            min: 9,
            max: 3,
        };
        assert_eq!(
            err.to_string(),
            "skills_per_student range is inverted: min 9 exceeds max 3"
        );
    }
}
