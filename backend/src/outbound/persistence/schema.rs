//! Diesel table definitions for the demo data schema.
//!
//! These definitions must match the database migrations exactly; Diesel uses
//! them for compile-time query validation. The dependent collections
//! (certificates through analytics) are declared only as far as the columns
//! the seeding subsystem touches: their identity and their parent reference,
//! which the wipe and integrity operations need.

diesel::table! {
    /// User accounts across all roles.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Unique login email address.
        email -> Varchar,
        /// Display name, `First Last`.
        full_name -> Varchar,
        /// Account role: `student`, `faculty`, or `admin`.
        role -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Student academic profiles, one per student-role user.
    students (id) {
        id -> Uuid,
        /// Owning user account.
        user_id -> Uuid,
        /// Human-readable roll number, e.g. `CS2024042`.
        student_id -> Varchar,
        /// Department code, e.g. `CS`.
        department -> Varchar,
        /// Year of study, 1 through 4.
        year -> Int4,
        /// Current semester, 1 through 8.
        semester -> Int4,
        /// Cumulative grade point average; null for first-semester students.
        cgpa -> Nullable<Float8>,
        /// Contact phone number, when on record.
        phone -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Faculty profiles, one per faculty-role user.
    faculty (id) {
        id -> Uuid,
        /// Owning user account.
        user_id -> Uuid,
        /// Employee identifier, e.g. `FAC1042`.
        employee_id -> Varchar,
        /// Display name including any academic title.
        full_name -> Varchar,
        /// Department code, e.g. `EC`.
        department -> Varchar,
        /// Post held, e.g. `Assistant Professor`.
        designation -> Varchar,
        /// Years of teaching experience.
        experience_years -> Int4,
        /// Contact phone number, when on record.
        phone -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Uploaded achievement certificates.
    certificates (id) {
        id -> Uuid,
        /// Owning student profile.
        student_id -> Uuid,
    }
}

diesel::table! {
    /// Student skill entries.
    skills (id) {
        id -> Uuid,
        /// Owning student profile.
        student_id -> Uuid,
    }
}

diesel::table! {
    /// Student portfolio pages.
    portfolios (id) {
        id -> Uuid,
        /// Owning student profile.
        student_id -> Uuid,
    }
}

diesel::table! {
    /// Faculty recommendations for students.
    recommendations (id) {
        id -> Uuid,
        /// Recommended student profile.
        student_id -> Uuid,
    }
}

diesel::table! {
    /// Certificate review records.
    reviews (id) {
        id -> Uuid,
        /// Reviewed certificate.
        certificate_id -> Uuid,
    }
}

diesel::table! {
    /// Usage analytics events.
    analytics (id) {
        id -> Uuid,
        /// User the event belongs to.
        user_id -> Uuid,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    analytics,
    certificates,
    faculty,
    portfolios,
    recommendations,
    reviews,
    skills,
    students,
    users,
);
