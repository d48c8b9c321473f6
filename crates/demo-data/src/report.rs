//! Structured distribution reporting.
//!
//! Replaces ad hoc console statistics with a serialisable report object the
//! orchestration binaries render as text lines.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::records::{FacultyRecord, StudentRecord, UserRecord};

/// Labels for the five fixed CGPA histogram bands.
pub const CGPA_BANDS: [&str; 5] = ["<7.0", "7.0-7.9", "8.0-8.9", "9.0-9.4", ">=9.5"];

/// Aggregate statistics over a generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionReport {
    /// Total generated users.
    pub total_users: usize,
    /// User counts keyed by role name.
    pub users_by_role: BTreeMap<String, usize>,
    /// Student counts keyed by department code.
    pub students_by_department: BTreeMap<String, usize>,
    /// Student counts keyed by academic year.
    pub students_by_year: BTreeMap<u8, usize>,
    /// CGPA histogram over [`CGPA_BANDS`]; students without a CGPA are not
    /// counted.
    pub cgpa_histogram: [usize; 5],
    /// Percentage of students with a phone number.
    pub student_phone_coverage: f64,
    /// Faculty counts keyed by designation title.
    pub faculty_by_designation: BTreeMap<String, usize>,
    /// Percentage of faculty with a phone number.
    pub faculty_phone_coverage: f64,
}

impl DistributionReport {
    /// Build a report from generated batches.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "cgpa_band returns 0..=4, within the five-element histogram"
    )]
    pub fn from_batches(
        users: &[UserRecord],
        students: &[StudentRecord],
        faculty: &[FacultyRecord],
    ) -> Self {
        let mut users_by_role = BTreeMap::new();
        for user in users {
            *users_by_role.entry(user.role.as_str().to_owned()).or_default() += 1;
        }

        let mut students_by_department = BTreeMap::new();
        let mut students_by_year = BTreeMap::new();
        let mut cgpa_histogram = [0_usize; 5];
        for student in students {
            *students_by_department
                .entry(student.department.clone())
                .or_default() += 1;
            *students_by_year.entry(student.year).or_default() += 1;
            if let Some(cgpa) = student.cgpa {
                cgpa_histogram[cgpa_band(cgpa)] += 1;
            }
        }

        let mut faculty_by_designation = BTreeMap::new();
        for member in faculty {
            *faculty_by_designation
                .entry(member.designation.clone())
                .or_default() += 1;
        }

        Self {
            total_users: users.len(),
            users_by_role,
            students_by_department,
            students_by_year,
            cgpa_histogram,
            student_phone_coverage: coverage(students.iter().filter(|s| s.phone.is_some()).count(), students.len()),
            faculty_by_designation,
            faculty_phone_coverage: coverage(faculty.iter().filter(|f| f.phone.is_some()).count(), faculty.len()),
        }
    }

    /// Render the report as human-readable `key=value` lines.
    #[must_use]
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("total_users={}", self.total_users)];
        for (role, count) in &self.users_by_role {
            lines.push(format!("users.{role}={count}"));
        }
        for (department, count) in &self.students_by_department {
            lines.push(format!("students.department.{department}={count}"));
        }
        for (year, count) in &self.students_by_year {
            lines.push(format!("students.year.{year}={count}"));
        }
        for (band, count) in CGPA_BANDS.iter().zip(&self.cgpa_histogram) {
            lines.push(format!("students.cgpa[{band}]={count}"));
        }
        lines.push(format!(
            "students.phone_coverage={:.1}%",
            self.student_phone_coverage
        ));
        for (designation, count) in &self.faculty_by_designation {
            lines.push(format!("faculty.designation.{designation}={count}"));
        }
        lines.push(format!(
            "faculty.phone_coverage={:.1}%",
            self.faculty_phone_coverage
        ));
        lines
    }
}

fn cgpa_band(cgpa: f64) -> usize {
    if cgpa < 7.0 {
        0
    } else if cgpa < 8.0 {
        1
    } else if cgpa < 9.0 {
        2
    } else if cgpa < 9.5 {
        3
    } else {
        4
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "coverage is a percentage over counts"
)]
fn coverage(with: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * with as f64 / total as f64
    }
}
