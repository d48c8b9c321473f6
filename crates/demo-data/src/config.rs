//! Generation run configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// An inclusive `min..=max` count range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    /// Inclusive lower bound.
    pub min: usize,
    /// Inclusive upper bound.
    pub max: usize,
}

impl CountRange {
    /// Construct a range without validating ordering; use
    /// [`GeneratorConfig::validate`] before generating.
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

/// Configuration for a generation run.
///
/// Only `student_count` and `faculty_count` are consumed by the user, student,
/// and faculty generators; the remaining knobs are reserved for the sibling
/// certificate/skill/portfolio generators that share this configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Target number of student-role users.
    pub student_count: usize,
    /// Target number of faculty-role users.
    pub faculty_count: usize,
    /// Certificates generated per student.
    pub certificates_per_student: CountRange,
    /// Skills generated per student.
    pub skills_per_student: CountRange,
    /// Recommendations generated per student.
    pub recommendations_per_student: CountRange,
    /// Share of certificates marked verified, in `0.0..=1.0`.
    pub verification_rate: f64,
    /// Share of portfolios made public, in `0.0..=1.0`.
    pub public_portfolio_rate: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            student_count: 50,
            faculty_count: 10,
            certificates_per_student: CountRange::new(1, 5),
            skills_per_student: CountRange::new(3, 8),
            recommendations_per_student: CountRange::new(0, 2),
            verification_rate: 0.7,
            public_portfolio_rate: 0.4,
        }
    }
}

impl GeneratorConfig {
    /// Total users requested from the user generator.
    ///
    /// The role split inside the user generator carves this total into
    /// student, faculty, and admin accounts; the student and faculty
    /// generators then consume whatever the split produced.
    #[must_use]
    pub const fn user_total(&self) -> usize {
        self.student_count + self.faculty_count
    }

    /// Check ranges and rates for consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an inverted count range or a rate outside
    /// the unit interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_range("certificates_per_student", self.certificates_per_student)?;
        validate_range("skills_per_student", self.skills_per_student)?;
        validate_range("recommendations_per_student", self.recommendations_per_student)?;
        validate_rate("verification_rate", self.verification_rate)?;
        validate_rate("public_portfolio_rate", self.public_portfolio_rate)?;
        Ok(())
    }
}

fn validate_range(field: &'static str, range: CountRange) -> Result<(), ConfigError> {
    if range.min > range.max {
        return Err(ConfigError::InvertedRange {
            field,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

fn validate_rate(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::RateOutOfRange { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.user_total(), 60);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let config = GeneratorConfig {
            skills_per_student: CountRange::new(9, 3),
            ..GeneratorConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedRange {
                field: "skills_per_student",
                min: 9,
                max: 3,
            })
        );
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.01)]
    fn out_of_range_rate_is_rejected(#[case] rate: f64) {
        let config = GeneratorConfig {
            verification_rate: rate,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RateOutOfRange {
                field: "verification_rate",
                ..
            })
        ));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = GeneratorConfig::default();
        let json = serde_json::to_string(&config).expect("serialize");
        let back: GeneratorConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"student_count": 5}"#).expect("deserialize");
        assert_eq!(config.student_count, 5);
        assert_eq!(config.faculty_count, 10);
    }
}
