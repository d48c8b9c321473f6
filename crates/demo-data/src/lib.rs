//! Deterministic demo data generation for the student achievement platform.
//!
//! This crate produces believable, reproducible seed records (users, students,
//! faculty) for populating a development database. It is independent of the
//! backend persistence layer to avoid circular dependencies: generators emit
//! plain records, and the backend maps them to storage at the point of use.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Deterministic generation from a `u64` seed (`ChaCha8` RNG)
//! - Weighted categorical allocation with exact-sum reconciliation
//! - Semantically valid field values (emails, student IDs, CGPA, phone
//!   numbers) with uniqueness enforcement
//! - Whole-batch invariant validation and structured distribution reporting
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use demo_data::{generate_students, generate_users, rng_for_seed};
//!
//! let now = Utc::now();
//! let mut rng = rng_for_seed(42);
//!
//! let users = generate_users(20, now, &mut rng).expect("generation succeeds");
//! let students = generate_students(&users, now, &mut rng).expect("generation succeeds");
//!
//! assert_eq!(users.len(), 20);
//! assert!(!students.is_empty());
//! ```

mod config;
mod distribution;
mod error;
mod generators;
mod records;
mod reference;
mod report;
mod rng;
mod validation;
pub mod values;

pub use config::{CountRange, GeneratorConfig};
pub use distribution::{allocate, assignment_pool};
pub use error::{ConfigError, GenerationError};
pub use generators::{generate_faculty, generate_students, generate_users};
pub use records::{FacultyRecord, Role, StudentRecord, UserRecord};
pub use reference::{
    ACADEMIC_TITLES, DEPARTMENTS, DESIGNATIONS, Department, Designation, YEAR_WEIGHTS,
    department_by_code, designation_by_title,
};
pub use report::DistributionReport;
pub use rng::{resolve_seed, rng_for_seed};
pub use validation::{validate_faculty, validate_students, validate_users};
