//! Domain-value generators.
//!
//! Pure functions producing semantically valid field values from an injected
//! RNG. Uniqueness is never enforced here; callers track collisions across a
//! batch and retry.

use rand::Rng;

/// Default email domain for student accounts.
pub const DEFAULT_EMAIL_DOMAIN: &str = "university.edu";

/// Build a `first.last@domain` address, lower-cased.
///
/// # Examples
///
/// ```
/// use demo_data::values::{DEFAULT_EMAIL_DOMAIN, email};
///
/// assert_eq!(email("John", "Doe", DEFAULT_EMAIL_DOMAIN), "john.doe@university.edu");
/// assert_eq!(email("Jane", "Smith", "example.com"), "jane.smith@example.com");
/// ```
#[must_use]
pub fn email(first: &str, last: &str, domain: &str) -> String {
    format!("{first}.{last}@{domain}").to_lowercase()
}

/// Build a student ID: department code, enrolment year, 3-digit sequence.
///
/// `student_id("CS", 2021, rng)` matches `^CS2021\d{3}$`.
pub fn student_id<R: Rng>(dept_code: &str, enroll_year: i32, rng: &mut R) -> String {
    format!("{dept_code}{enroll_year}{:03}", rng.random_range(0..1000_u32))
}

/// Build an employee ID: prefix plus 3-digit sequence.
pub fn employee_id<R: Rng>(prefix: &str, rng: &mut R) -> String {
    format!("{prefix}{:03}", rng.random_range(0..1000_u32))
}

/// Draw a CGPA for the given academic year, rounded to two decimals.
///
/// Later-year students trend higher: the range is
/// `[6.0 + 0.2*(year-1), min(9.5 + 0.1*(year-1), 10.0)]`.
#[expect(
    clippy::float_arithmetic,
    reason = "CGPA bounds are derived arithmetically from the academic year"
)]
pub fn cgpa<R: Rng>(year: u8, rng: &mut R) -> f64 {
    let offset = f64::from(year.saturating_sub(1));
    let lower = 6.0 + 0.2 * offset;
    let upper = (9.5 + 0.1 * offset).min(10.0);
    round_to_two_decimals(rng.random_range(lower..=upper))
}

/// Draw a phone number in the fixed `+1-###-###-####` pattern.
pub fn phone_number<R: Rng>(rng: &mut R) -> String {
    format!(
        "+1-{:03}-{:03}-{:04}",
        rng.random_range(200..1000_u32),
        rng.random_range(100..1000_u32),
        rng.random_range(0..10000_u32),
    )
}

#[expect(
    clippy::float_arithmetic,
    reason = "scale-round-rescale is the intended rounding method"
)]
fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
