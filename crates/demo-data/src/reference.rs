//! Static reference data for generated entities.
//!
//! Departments, faculty designations, and year weights are fixed tables; the
//! integer `weight` columns are percentages summing to 100 per table and are
//! consumed only by the allocation logic, never stored on an entity.

/// A department offered by the institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Department {
    /// Short code used in student IDs (e.g. `CS`).
    pub code: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Full formal name.
    pub full_name: &'static str,
    /// Relative popularity as an integer percentage.
    pub weight: u32,
}

/// The ten fixed departments, ordered by descending popularity.
pub const DEPARTMENTS: [Department; 10] = [
    Department {
        code: "CS",
        name: "Computer Science",
        full_name: "Computer Science and Engineering",
        weight: 18,
    },
    Department {
        code: "IT",
        name: "Information Technology",
        full_name: "Information Technology",
        weight: 12,
    },
    Department {
        code: "EC",
        name: "Electronics",
        full_name: "Electronics and Communication Engineering",
        weight: 12,
    },
    Department {
        code: "EE",
        name: "Electrical",
        full_name: "Electrical and Electronics Engineering",
        weight: 10,
    },
    Department {
        code: "ME",
        name: "Mechanical",
        full_name: "Mechanical Engineering",
        weight: 10,
    },
    Department {
        code: "BA",
        name: "Business Administration",
        full_name: "Business Administration",
        weight: 10,
    },
    Department {
        code: "CE",
        name: "Civil",
        full_name: "Civil Engineering",
        weight: 8,
    },
    Department {
        code: "CA",
        name: "Computer Applications",
        full_name: "Computer Applications",
        weight: 8,
    },
    Department {
        code: "CH",
        name: "Chemical",
        full_name: "Chemical Engineering",
        weight: 6,
    },
    Department {
        code: "BT",
        name: "Biotechnology",
        full_name: "Biotechnology",
        weight: 6,
    },
];

/// A ranked faculty designation with its plausible experience range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Designation {
    /// Designation title.
    pub title: &'static str,
    /// Minimum years of experience for the rank.
    pub min_experience: u32,
    /// Maximum years of experience for the rank.
    pub max_experience: u32,
    /// Relative frequency as an integer percentage.
    pub weight: u32,
}

/// The fixed designation ladder, senior ranks first.
pub const DESIGNATIONS: [Designation; 5] = [
    Designation {
        title: "Professor",
        min_experience: 15,
        max_experience: 35,
        weight: 15,
    },
    Designation {
        title: "Associate Professor",
        min_experience: 8,
        max_experience: 20,
        weight: 20,
    },
    Designation {
        title: "Assistant Professor",
        min_experience: 2,
        max_experience: 12,
        weight: 40,
    },
    Designation {
        title: "Lecturer",
        min_experience: 0,
        max_experience: 6,
        weight: 15,
    },
    Designation {
        title: "Visiting Faculty",
        min_experience: 0,
        max_experience: 10,
        weight: 10,
    },
];

/// Academic-year weights for students: `(year, percentage)`.
///
/// Earlier years are more populous, modelling attrition across the
/// four-year programme.
pub const YEAR_WEIGHTS: [(u8, u32); 4] = [(1, 30), (2, 28), (3, 24), (4, 18)];

/// Honorific prefixes applied to a share of faculty names.
pub const ACADEMIC_TITLES: [&str; 3] = ["Dr.", "Prof.", "Prof. Dr."];

/// Look up a department by its short code.
#[must_use]
pub fn department_by_code(code: &str) -> Option<&'static Department> {
    DEPARTMENTS.iter().find(|d| d.code == code)
}

/// Look up a designation by its title.
#[must_use]
pub fn designation_by_title(title: &str) -> Option<&'static Designation> {
    DESIGNATIONS.iter().find(|d| d.title == title)
}
