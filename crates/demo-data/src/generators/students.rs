//! Student profile generation from student-role users.

use std::collections::HashSet;

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;

use crate::distribution::{allocate, assignment_pool};
use crate::error::GenerationError;
use crate::generators::{MAX_KEY_ATTEMPTS, PHONE_COVERAGE};
use crate::records::{Role, StudentRecord, UserRecord};
use crate::reference::{DEPARTMENTS, YEAR_WEIGHTS};
use crate::validation::{all_have_role, validate_students};
use crate::values;

/// Generate one student profile per student-role user in `users`.
///
/// Departments and academic years are drawn from shuffled assignment pools
/// built with [`allocate`], so the realised distribution matches the weight
/// tables exactly. Enrolment is simulated with January/July intakes: the
/// intake month fixes semester parity, which keeps the academic-progression
/// invariant `(year-1)*2+1 <= semester <= year*2` by construction. Student
/// IDs combine the department code, the enrolment year, and a 3-digit
/// sequence, with bounded retry on collision before uniqueness is forced by
/// a timestamp-derived suffix.
///
/// First-semester students carry no CGPA; everyone else receives one biased
/// upward with year.
///
/// # Errors
///
/// Returns [`GenerationError::NoStudentUsers`] when `users` holds no
/// student-role records, or [`GenerationError::BatchValidation`] when the
/// finished batch violates an invariant.
#[expect(
    clippy::indexing_slicing,
    reason = "both pools hold one entry per student user, so the enumeration index is in bounds"
)]
pub fn generate_students<R: Rng>(
    users: &[UserRecord],
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<Vec<StudentRecord>, GenerationError> {
    let student_users: Vec<&UserRecord> = users.iter().filter(|u| u.role == Role::Student).collect();
    if student_users.is_empty() {
        return Err(GenerationError::NoStudentUsers);
    }
    debug_assert!(all_have_role(&student_users, Role::Student));

    let count = student_users.len();
    let department_weights: Vec<u32> = DEPARTMENTS.iter().map(|d| d.weight).collect();
    let department_pool = assignment_pool(&DEPARTMENTS, &allocate(count, &department_weights), rng);

    let years: Vec<u8> = YEAR_WEIGHTS.iter().map(|(year, _)| *year).collect();
    let year_weights: Vec<u32> = YEAR_WEIGHTS.iter().map(|(_, weight)| *weight).collect();
    let year_pool = assignment_pool(&years, &allocate(count, &year_weights), rng);

    let mut used_student_ids = HashSet::new();
    let mut students = Vec::with_capacity(count);

    for (index, user) in student_users.iter().enumerate() {
        let department = department_pool[index];
        let year = *year_pool[index];

        // July intake starts the odd semester, January the even one.
        let july_intake = rng.random_bool(0.5);
        let semester = (year - 1) * 2 + if july_intake { 1 } else { 2 };
        let enroll_year = now.year() - i32::from(year - 1);

        let student_id =
            unique_student_id(department.code, enroll_year, now, &mut used_student_ids, rng);
        let cgpa = (semester > 1).then(|| values::cgpa(year, rng));
        let phone = rng.random_bool(PHONE_COVERAGE).then(|| values::phone_number(rng));

        students.push(StudentRecord {
            user_id: user.id,
            student_id,
            department: department.code.to_owned(),
            year,
            semester,
            cgpa,
            phone,
        });
    }

    let violations = validate_students(&students);
    if !violations.is_empty() {
        return Err(GenerationError::BatchValidation { violations });
    }

    Ok(students)
}

/// Draw a student ID unique within this batch.
///
/// Bounded random retries first; on exhaustion a millisecond fragment of
/// `now` is appended and bumped until free (last-resort forced uniqueness).
fn unique_student_id<R: Rng>(
    dept_code: &str,
    enroll_year: i32,
    now: DateTime<Utc>,
    used: &mut HashSet<String>,
    rng: &mut R,
) -> String {
    for _ in 0..MAX_KEY_ATTEMPTS {
        let candidate = values::student_id(dept_code, enroll_year, rng);
        if used.insert(candidate.clone()) {
            return candidate;
        }
    }

    let base = values::student_id(dept_code, enroll_year, rng);
    let mut fragment = u64::try_from(now.timestamp_millis().rem_euclid(1000)).unwrap_or(0);
    loop {
        let candidate = format!("{base}{fragment:03}");
        if used.insert(candidate.clone()) {
            return candidate;
        }
        fragment += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use rstest::{fixture, rstest};

    use crate::generators::generate_users;
    use crate::reference::department_by_code;
    use crate::rng_for_seed;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-08-28T12:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc)
    }

    #[fixture]
    fn users() -> Vec<UserRecord> {
        generate_users(100, fixed_now(), &mut rng_for_seed(42)).expect("generated")
    }

    #[rstest]
    fn generates_one_student_per_student_user(users: Vec<UserRecord>) {
        let expected = users.iter().filter(|u| u.role == Role::Student).count();
        let students =
            generate_students(&users, fixed_now(), &mut rng_for_seed(1)).expect("generated");
        assert_eq!(students.len(), expected);
    }

    #[test]
    fn rejects_input_without_student_users() {
        let faculty_only: Vec<UserRecord> = generate_users(100, fixed_now(), &mut rng_for_seed(2))
            .expect("generated")
            .into_iter()
            .filter(|u| u.role != Role::Student)
            .collect();

        let result = generate_students(&faculty_only, fixed_now(), &mut rng_for_seed(3));
        assert_eq!(result, Err(GenerationError::NoStudentUsers));
        assert!(
            result
                .expect_err("must fail")
                .to_string()
                .contains("student role")
        );
    }

    #[rstest]
    fn semester_respects_academic_progression(users: Vec<UserRecord>) {
        let students =
            generate_students(&users, fixed_now(), &mut rng_for_seed(4)).expect("generated");
        for student in &students {
            assert!((1..=4).contains(&student.year));
            let lower = (student.year - 1) * 2 + 1;
            let upper = student.year * 2;
            assert!(
                (lower..=upper).contains(&student.semester),
                "semester {} for year {}",
                student.semester,
                student.year
            );
        }
    }

    #[rstest]
    fn cgpa_present_after_first_semester_and_in_range(users: Vec<UserRecord>) {
        let students =
            generate_students(&users, fixed_now(), &mut rng_for_seed(5)).expect("generated");
        for student in &students {
            match student.cgpa {
                None => assert_eq!(student.semester, 1, "missing cgpa beyond semester 1"),
                Some(cgpa) => assert!((6.0..=10.0).contains(&cgpa), "cgpa {cgpa}"),
            }
        }
    }

    #[rstest]
    fn student_ids_are_unique_and_well_formed(users: Vec<UserRecord>) {
        let students =
            generate_students(&users, fixed_now(), &mut rng_for_seed(6)).expect("generated");

        let mut seen = HashSet::new();
        for student in &students {
            assert!(seen.insert(student.student_id.as_str()), "{}", student.student_id);
            assert!(student.student_id.starts_with(&student.department));
            let digits = &student.student_id[student.department.len()..];
            assert!(digits.len() >= 7, "{}", student.student_id);
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[rstest]
    fn departments_resolve_in_reference_table(users: Vec<UserRecord>) {
        let students =
            generate_students(&users, fixed_now(), &mut rng_for_seed(7)).expect("generated");
        for student in &students {
            assert!(
                department_by_code(&student.department).is_some(),
                "orphan department {}",
                student.department
            );
        }
    }

    #[rstest]
    fn realised_department_distribution_matches_allocation(users: Vec<UserRecord>) {
        let students =
            generate_students(&users, fixed_now(), &mut rng_for_seed(8)).expect("generated");

        let weights: Vec<u32> = DEPARTMENTS.iter().map(|d| d.weight).collect();
        let expected = allocate(students.len(), &weights);

        let mut realised: HashMap<&str, usize> = HashMap::new();
        for student in &students {
            *realised.entry(student.student_id.split_at(2).0).or_default() += 1;
        }
        for (department, &target) in DEPARTMENTS.iter().zip(&expected) {
            assert_eq!(
                realised.get(department.code).copied().unwrap_or(0),
                target,
                "department {}",
                department.code
            );
        }
    }

    #[rstest]
    fn enrolment_year_reflects_academic_year(users: Vec<UserRecord>) {
        let now = fixed_now();
        let students = generate_students(&users, now, &mut rng_for_seed(9)).expect("generated");
        for student in &students {
            let expected_year = now.year() - i32::from(student.year - 1);
            let id_year = &student.student_id[student.department.len()..student.department.len() + 4];
            assert_eq!(id_year, expected_year.to_string(), "{}", student.student_id);
        }
    }

    #[rstest]
    fn generation_is_deterministic(users: Vec<UserRecord>) {
        let now = fixed_now();
        let a = generate_students(&users, now, &mut rng_for_seed(10)).expect("generated");
        let b = generate_students(&users, now, &mut rng_for_seed(10)).expect("generated");
        assert_eq!(a, b);
    }

    #[test]
    fn forced_student_id_suffix_keeps_uniqueness() {
        let mut used: HashSet<String> = (0..1000).map(|n| format!("CS2026{n:03}")).collect();
        let mut rng = rng_for_seed(11);

        let id = unique_student_id("CS", 2026, fixed_now(), &mut used, &mut rng);
        assert!(id.starts_with("CS2026"));
        assert!(id.len() > "CS2026".len() + 3, "expected forced suffix in {id}");
    }
}
