//! Faculty profile generation from faculty-role users.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::distribution::{allocate, assignment_pool};
use crate::error::GenerationError;
use crate::generators::{MAX_KEY_ATTEMPTS, PHONE_COVERAGE};
use crate::records::{FacultyRecord, Role, UserRecord};
use crate::reference::{ACADEMIC_TITLES, DEPARTMENTS, DESIGNATIONS};
use crate::validation::{all_have_role, validate_faculty};
use crate::values;

/// Employee ID prefix for faculty.
const EMPLOYEE_ID_PREFIX: &str = "FAC";

/// Probability that a faculty name receives an academic title prefix.
const TITLE_PROBABILITY: f64 = 0.8;

/// Generate one faculty profile per faculty-role user in `users`.
///
/// Departments and designations are drawn from shuffled assignment pools so
/// realised distributions match the weight tables exactly; experience years
/// fall within the assigned designation's range. 80% of names receive an
/// academic title prefix chosen independently of rank. Employee IDs are
/// `FAC` plus a 3-digit sequence, with bounded retry on collision before
/// uniqueness is forced by a timestamp-derived suffix.
///
/// # Errors
///
/// Returns [`GenerationError::NoFacultyUsers`] when `users` holds no
/// faculty-role records, or [`GenerationError::BatchValidation`] when the
/// finished batch violates an invariant.
#[expect(
    clippy::indexing_slicing,
    reason = "both pools hold one entry per faculty user, so the enumeration index is in bounds"
)]
pub fn generate_faculty<R: Rng>(
    users: &[UserRecord],
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<Vec<FacultyRecord>, GenerationError> {
    let faculty_users: Vec<&UserRecord> = users.iter().filter(|u| u.role == Role::Faculty).collect();
    if faculty_users.is_empty() {
        return Err(GenerationError::NoFacultyUsers);
    }
    debug_assert!(all_have_role(&faculty_users, Role::Faculty));

    let count = faculty_users.len();
    let department_weights: Vec<u32> = DEPARTMENTS.iter().map(|d| d.weight).collect();
    let department_pool = assignment_pool(&DEPARTMENTS, &allocate(count, &department_weights), rng);

    let designation_weights: Vec<u32> = DESIGNATIONS.iter().map(|d| d.weight).collect();
    let designation_pool =
        assignment_pool(&DESIGNATIONS, &allocate(count, &designation_weights), rng);

    let mut used_employee_ids = HashSet::new();
    let mut faculty = Vec::with_capacity(count);

    for (index, user) in faculty_users.iter().enumerate() {
        let department = department_pool[index];
        let designation = designation_pool[index];

        let employee_id = unique_employee_id(now, &mut used_employee_ids, rng);
        let experience_years =
            rng.random_range(designation.min_experience..=designation.max_experience);
        let full_name = titled_name(&user.full_name, rng);
        let phone = rng.random_bool(PHONE_COVERAGE).then(|| values::phone_number(rng));

        faculty.push(FacultyRecord {
            user_id: user.id,
            employee_id,
            full_name,
            department: department.code.to_owned(),
            designation: designation.title.to_owned(),
            experience_years,
            phone,
        });
    }

    let violations = validate_faculty(&faculty);
    if !violations.is_empty() {
        return Err(GenerationError::BatchValidation { violations });
    }

    Ok(faculty)
}

/// Prefix an academic title onto 80% of names, independent of rank.
#[expect(
    clippy::indexing_slicing,
    reason = "the index is drawn from 0..ACADEMIC_TITLES.len()"
)]
fn titled_name<R: Rng>(name: &str, rng: &mut R) -> String {
    if rng.random_bool(TITLE_PROBABILITY) {
        let title = ACADEMIC_TITLES[rng.random_range(0..ACADEMIC_TITLES.len())];
        format!("{title} {name}")
    } else {
        name.to_owned()
    }
}

/// Draw an employee ID unique within this batch.
fn unique_employee_id<R: Rng>(
    now: DateTime<Utc>,
    used: &mut HashSet<String>,
    rng: &mut R,
) -> String {
    for _ in 0..MAX_KEY_ATTEMPTS {
        let candidate = values::employee_id(EMPLOYEE_ID_PREFIX, rng);
        if used.insert(candidate.clone()) {
            return candidate;
        }
    }

    let base = values::employee_id(EMPLOYEE_ID_PREFIX, rng);
    let mut fragment = u64::try_from(now.timestamp_millis().rem_euclid(1000)).unwrap_or(0);
    loop {
        let candidate = format!("{base}{fragment:03}");
        if used.insert(candidate.clone()) {
            return candidate;
        }
        fragment += 1;
    }
}
