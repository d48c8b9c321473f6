//! Whole-batch invariant validation.
//!
//! Generators run these checks over the complete batch after generation.
//! Every violation is collected as a description; a non-empty result rejects
//! the entire batch rather than accepting the valid subset.

use std::collections::HashSet;

use crate::records::{FacultyRecord, Role, StudentRecord, UserRecord};
use crate::reference::{department_by_code, designation_by_title};

/// Validate a generated user batch.
///
/// Checks: non-empty names, well-formed lower-case emails, roles in the
/// allowed set (guaranteed by the type), and pairwise-unique emails and IDs.
#[must_use]
pub fn validate_users(users: &[UserRecord]) -> Vec<String> {
    let mut violations = Vec::new();
    let mut seen_emails = HashSet::new();
    let mut seen_ids = HashSet::new();

    for (index, user) in users.iter().enumerate() {
        if user.full_name.trim().is_empty() {
            violations.push(format!("user {index}: empty full name"));
        }
        if !is_well_formed_email(&user.email) {
            violations.push(format!("user {index}: malformed email '{}'", user.email));
        }
        if !seen_emails.insert(user.email.as_str()) {
            violations.push(format!("user {index}: duplicate email '{}'", user.email));
        }
        if !seen_ids.insert(user.id) {
            violations.push(format!("user {index}: duplicate id '{}'", user.id));
        }
        if user.updated_at < user.created_at {
            violations.push(format!("user {index}: updated_at precedes created_at"));
        }
    }

    violations
}

/// Validate a generated student batch.
///
/// Checks: unique student IDs, known department codes, year within 1..=4,
/// academic-progression semester bound, and CGPA range when present.
#[must_use]
pub fn validate_students(students: &[StudentRecord]) -> Vec<String> {
    let mut violations = Vec::new();
    let mut seen_student_ids = HashSet::new();

    for (index, student) in students.iter().enumerate() {
        if !seen_student_ids.insert(student.student_id.as_str()) {
            violations.push(format!(
                "student {index}: duplicate student_id '{}'",
                student.student_id
            ));
        }
        if department_by_code(&student.department).is_none() {
            violations.push(format!(
                "student {index}: unknown department '{}'",
                student.department
            ));
        }
        if !(1..=4).contains(&student.year) {
            violations.push(format!("student {index}: year {} out of range", student.year));
        } else {
            let lower = (student.year - 1) * 2 + 1;
            let upper = student.year * 2;
            if !(lower..=upper).contains(&student.semester) {
                violations.push(format!(
                    "student {index}: semester {} outside {lower}..={upper} for year {}",
                    student.semester, student.year
                ));
            }
        }
        if let Some(cgpa) = student.cgpa {
            if !(6.0..=10.0).contains(&cgpa) {
                violations.push(format!("student {index}: cgpa {cgpa} out of range"));
            }
        }
    }

    violations
}

/// Validate a generated faculty batch.
///
/// Checks: unique `FAC`-prefixed employee IDs, known department codes, known
/// designations, and experience within the designation's range.
#[must_use]
pub fn validate_faculty(faculty: &[FacultyRecord]) -> Vec<String> {
    let mut violations = Vec::new();
    let mut seen_employee_ids = HashSet::new();

    for (index, member) in faculty.iter().enumerate() {
        if !member.employee_id.starts_with("FAC") {
            violations.push(format!(
                "faculty {index}: employee_id '{}' lacks FAC prefix",
                member.employee_id
            ));
        }
        if !seen_employee_ids.insert(member.employee_id.as_str()) {
            violations.push(format!(
                "faculty {index}: duplicate employee_id '{}'",
                member.employee_id
            ));
        }
        if department_by_code(&member.department).is_none() {
            violations.push(format!(
                "faculty {index}: unknown department '{}'",
                member.department
            ));
        }
        match designation_by_title(&member.designation) {
            None => violations.push(format!(
                "faculty {index}: unknown designation '{}'",
                member.designation
            )),
            Some(designation) => {
                if !(designation.min_experience..=designation.max_experience)
                    .contains(&member.experience_years)
                {
                    violations.push(format!(
                        "faculty {index}: {} years of experience outside {}..={} for {}",
                        member.experience_years,
                        designation.min_experience,
                        designation.max_experience,
                        designation.title
                    ));
                }
            }
        }
    }

    violations
}

/// Cheap structural email check: one `@`, non-empty lower-case parts, and a
/// dotted domain. Intentionally not RFC-complete; generated addresses only
/// need to satisfy the application's own parser.
fn is_well_formed_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return false;
    }
    let local_ok = local
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.');
    let domain_ok = domain
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-');
    local_ok && domain_ok
}

/// Ensure every user in `users` carries the expected role.
///
/// Used by downstream generators to assert their input slice was filtered
/// correctly.
#[must_use]
pub(crate) fn all_have_role(users: &[&UserRecord], role: Role) -> bool {
    users.iter().all(|u| u.role == role)
}
