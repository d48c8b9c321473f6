//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for inserts.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{faculty, students, users};

/// Insertable struct for creating user account rows.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub full_name: &'a str,
    pub role: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating student profile rows.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = students)]
pub(crate) struct NewStudentRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub student_id: &'a str,
    pub department: &'a str,
    pub year: i32,
    pub semester: i32,
    pub cgpa: Option<f64>,
    pub phone: Option<&'a str>,
}

/// Insertable struct for creating faculty profile rows.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = faculty)]
pub(crate) struct NewFacultyRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub employee_id: &'a str,
    pub full_name: &'a str,
    pub department: &'a str,
    pub designation: &'a str,
    pub experience_years: i32,
    pub phone: Option<&'a str>,
}
