//! Generated record types.
//!
//! These are the plain, behaviour-free records produced by the entity
//! generators. They are created once per generation run, held in memory, and
//! never mutated afterwards; the backend converts them to storage rows at the
//! point of use.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role for a generated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Uploads certificates and achievements.
    Student,
    /// Reviews and approves student submissions.
    Faculty,
    /// Views analytics and compliance reports.
    Admin,
}

impl Role {
    /// Stable lowercase name, matching the serialised form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Faculty => "faculty",
            Self::Admin => "admin",
        }
    }
}

/// A generated user account.
///
/// `id` and `email` are globally unique within a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Opaque unique identifier.
    pub id: Uuid,
    /// Unique lower-case email derived from the generated name.
    pub email: String,
    /// Human-readable full name.
    pub full_name: String,
    /// Account role.
    pub role: Role,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A generated student profile, backed 1:1 by a [`UserRecord`] with the
/// student role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Backing user identifier.
    pub user_id: Uuid,
    /// Unique natural key: department code, enrolment year, 3-digit sequence.
    pub student_id: String,
    /// Department code from the fixed department table.
    pub department: String,
    /// Academic year, 1 through 4.
    pub year: u8,
    /// Current semester; always within `(year-1)*2+1 ..= year*2`.
    pub semester: u8,
    /// Cumulative grade point average in `6.0..=10.0`; absent for
    /// first-semester students who have no results yet.
    pub cgpa: Option<f64>,
    /// Optional contact number.
    pub phone: Option<String>,
}

/// A generated faculty profile, backed 1:1 by a [`UserRecord`] with the
/// faculty role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyRecord {
    /// Backing user identifier.
    pub user_id: Uuid,
    /// Unique natural key prefixed `FAC`.
    pub employee_id: String,
    /// Display name, possibly prefixed with an academic title.
    pub full_name: String,
    /// Department code from the fixed department table.
    pub department: String,
    /// Designation title from the fixed designation ladder.
    pub designation: String,
    /// Years of experience, within the designation's range.
    pub experience_years: u32,
    /// Optional contact number.
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serialises_lowercase() {
        let json = serde_json::to_string(&Role::Faculty).expect("serialize");
        assert_eq!(json, "\"faculty\"");
        assert_eq!(Role::Admin.as_str(), "admin");
    }

    #[test]
    fn student_record_round_trips_through_json() {
        let record = StudentRecord {
            user_id: Uuid::nil(),
            student_id: "CS2023042".to_owned(),
            department: "CS".to_owned(),
            year: 3,
            semester: 5,
            cgpa: Some(8.42),
            phone: None,
        };
        let json = serde_json::to_string(&record).expect("serialize");
        let back: StudentRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, record);
    }
}
