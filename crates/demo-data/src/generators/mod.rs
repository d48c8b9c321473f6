//! Entity generators.
//!
//! Each generator is stateless between calls: the only per-call state is the
//! uniqueness-tracking set and the shuffled assignment pools, all constructed
//! locally and consumed by index. Generators validate the full batch after
//! generation and reject it wholesale on any violation.

mod faculty;
mod students;
mod users;

pub use faculty::generate_faculty;
pub use students::generate_students;
pub use users::generate_users;

/// Bounded retries before forcing uniqueness on a natural-key collision.
pub(crate) const MAX_KEY_ATTEMPTS: usize = 25;

/// Probability that a generated profile carries a phone number.
pub(crate) const PHONE_COVERAGE: f64 = 0.85;
