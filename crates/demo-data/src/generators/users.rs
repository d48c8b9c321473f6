//! User account generation with role split and email uniqueness.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::Rng;

use crate::error::GenerationError;
use crate::records::{Role, UserRecord};
use crate::validation::validate_users;
use crate::values::{DEFAULT_EMAIL_DOMAIN, email};

/// Retries before forcing email uniqueness with a timestamp fragment.
const MAX_EMAIL_ATTEMPTS: usize = 10;

/// Role allocation for a requested user total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RoleSplit {
    pub students: usize,
    pub faculty: usize,
    pub admins: usize,
}

/// Split a total into 80% students, 15% faculty, remainder admins, with a
/// guaranteed minimum of one admin.
pub(crate) fn role_split(total: usize) -> RoleSplit {
    let mut students = total * 80 / 100;
    let mut faculty = total * 15 / 100;
    let mut admins = total - students - faculty;
    if admins == 0 {
        if students > 0 {
            students -= 1;
        } else {
            faculty -= 1;
        }
        admins = 1;
    }
    RoleSplit {
        students,
        faculty,
        admins,
    }
}

/// Generate `total` user accounts.
///
/// Roles follow the fixed 80/15/remainder split with at least one admin.
/// Emails derive from `fake` first/last names on a role-specific domain;
/// collisions within the batch retry with a fresh name up to
/// `MAX_EMAIL_ATTEMPTS` times before uniqueness is forced by appending a
/// fragment of `now` (a documented imprecision of the format). UUIDs come
/// from the RNG, so the whole batch is deterministic for a given seed and
/// timestamp.
///
/// # Errors
///
/// Returns [`GenerationError::NoUsersRequested`] for a zero total, or
/// [`GenerationError::BatchValidation`] when the finished batch violates an
/// invariant.
pub fn generate_users<R: Rng>(
    total: usize,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<Vec<UserRecord>, GenerationError> {
    if total == 0 {
        return Err(GenerationError::NoUsersRequested);
    }

    let split = role_split(total);
    let mut used_emails = HashSet::new();
    let mut users = Vec::with_capacity(total);

    for (role, count) in [
        (Role::Student, split.students),
        (Role::Faculty, split.faculty),
        (Role::Admin, split.admins),
    ] {
        for _ in 0..count {
            users.push(generate_single_user(role, now, &mut used_emails, rng));
        }
    }

    let violations = validate_users(&users);
    if !violations.is_empty() {
        return Err(GenerationError::BatchValidation { violations });
    }

    Ok(users)
}

fn generate_single_user<R: Rng>(
    role: Role,
    now: DateTime<Utc>,
    used_emails: &mut HashSet<String>,
    rng: &mut R,
) -> UserRecord {
    let (full_name, address) = unique_identity(role, now, used_emails, rng);
    UserRecord {
        // Builder stamps the v4 version/variant bits onto RNG bytes, so ids
        // stay deterministic per seed while remaining well-formed UUIDs.
        id: uuid::Builder::from_random_bytes(rng.random()).into_uuid(),
        email: address,
        full_name,
        role,
        created_at: now,
        updated_at: now,
    }
}

/// Generate a name and a batch-unique email for it.
///
/// Collisions regenerate the name; after the retry cap, uniqueness is forced
/// by suffixing the mailbox with a millisecond fragment of `now`, bumped
/// until free.
fn unique_identity<R: Rng>(
    role: Role,
    now: DateTime<Utc>,
    used_emails: &mut HashSet<String>,
    rng: &mut R,
) -> (String, String) {
    let mut first = String::new();
    let mut last = String::new();

    for _ in 0..MAX_EMAIL_ATTEMPTS {
        first = FirstName(EN).fake_with_rng(rng);
        last = LastName(EN).fake_with_rng(rng);
        let candidate = email(&mailbox_part(&first), &mailbox_part(&last), domain_for(role));
        if used_emails.insert(candidate.clone()) {
            return (format!("{first} {last}"), candidate);
        }
    }

    let mut fragment = u64::try_from(now.timestamp_millis().rem_euclid(100_000)).unwrap_or(0);
    loop {
        let suffixed = format!("{}{fragment}", mailbox_part(&last));
        let candidate = email(&mailbox_part(&first), &suffixed, domain_for(role));
        if used_emails.insert(candidate.clone()) {
            return (format!("{first} {last}"), candidate);
        }
        fragment += 1;
    }
}

/// Strip characters that do not belong in a mailbox (apostrophes, hyphens,
/// spaces in double-barrelled fake names).
fn mailbox_part(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

const fn domain_for(role: Role) -> &'static str {
    match role {
        Role::Student => DEFAULT_EMAIL_DOMAIN,
        Role::Faculty => "faculty.university.edu",
        Role::Admin => "admin.university.edu",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use crate::rng_for_seed;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-08-28T12:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc)
    }

    #[rstest]
    #[case(1, 0, 0, 1)]
    #[case(2, 1, 0, 1)]
    #[case(10, 8, 1, 1)]
    #[case(20, 16, 3, 1)]
    #[case(100, 80, 15, 5)]
    fn role_split_matches_expected_counts(
        #[case] total: usize,
        #[case] students: usize,
        #[case] faculty: usize,
        #[case] admins: usize,
    ) {
        let split = role_split(total);
        assert_eq!(split.students, students);
        assert_eq!(split.faculty, faculty);
        assert_eq!(split.admins, admins);
        assert_eq!(split.students + split.faculty + split.admins, total);
    }

    #[test]
    fn zero_total_is_rejected() {
        let mut rng = rng_for_seed(1);
        let result = generate_users(0, fixed_now(), &mut rng);
        assert_eq!(result, Err(GenerationError::NoUsersRequested));
    }

    #[test]
    fn generates_requested_count() {
        let mut rng = rng_for_seed(42);
        let users = generate_users(50, fixed_now(), &mut rng).expect("generated");
        assert_eq!(users.len(), 50);
    }

    #[test]
    fn emails_and_ids_are_unique() {
        let mut rng = rng_for_seed(42);
        let users = generate_users(200, fixed_now(), &mut rng).expect("generated");

        let emails: HashSet<_> = users.iter().map(|u| u.email.as_str()).collect();
        let ids: HashSet<_> = users.iter().map(|u| u.id).collect();
        assert_eq!(emails.len(), users.len());
        assert_eq!(ids.len(), users.len());
    }

    #[test]
    fn emails_use_role_specific_domains() {
        let mut rng = rng_for_seed(42);
        let users = generate_users(40, fixed_now(), &mut rng).expect("generated");

        for user in &users {
            let expected = domain_for(user.role);
            assert!(
                user.email.ends_with(expected),
                "email {} for role {:?}",
                user.email,
                user.role
            );
        }
    }

    #[test]
    fn ids_are_well_formed_version_4_uuids() {
        let mut rng = rng_for_seed(42);
        let users = generate_users(60, fixed_now(), &mut rng).expect("generated");
        for user in &users {
            assert_eq!(user.id.get_version_num(), 4, "id {}", user.id);
            assert_eq!(
                user.id.get_variant(),
                uuid::Variant::RFC4122,
                "id {}",
                user.id
            );
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let now = fixed_now();
        let a = generate_users(30, now, &mut rng_for_seed(7)).expect("generated");
        let b = generate_users(30, now, &mut rng_for_seed(7)).expect("generated");
        assert_eq!(a, b);
    }

    #[test]
    fn forced_uniqueness_appends_timestamp_fragment() {
        let mut used = HashSet::new();
        let mut rng = rng_for_seed(3);

        // Occupy the first identity this RNG would produce, plus every retry,
        // by pre-generating from an identical stream.
        let mut probe_rng = rng_for_seed(3);
        for _ in 0..MAX_EMAIL_ATTEMPTS {
            let first: String = FirstName(EN).fake_with_rng(&mut probe_rng);
            let last: String = LastName(EN).fake_with_rng(&mut probe_rng);
            used.insert(email(
                &mailbox_part(&first),
                &mailbox_part(&last),
                DEFAULT_EMAIL_DOMAIN,
            ));
        }

        let (_, address) = unique_identity(Role::Student, fixed_now(), &mut used, &mut rng);
        let local = address.split('@').next().expect("local part");
        assert!(
            local.chars().rev().take_while(|c| c.is_ascii_digit()).count() > 0,
            "expected numeric suffix in {address}"
        );
    }

    #[test]
    fn timestamps_match_the_supplied_clock() {
        let now = fixed_now();
        let users = generate_users(5, now, &mut rng_for_seed(11)).expect("generated");
        assert!(users.iter().all(|u| u.created_at == now && u.updated_at == now));
    }
}
