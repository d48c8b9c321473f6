//! PostgreSQL-backed demo data store adapter.
//!
//! Implements the [`DemoDataStore`] port with one network call per method:
//! chunking and ordering are the gateway's concern. Generated records carry
//! the user UUID; profile row identifiers are minted here because they are a
//! storage detail the generators never see.

use async_trait::async_trait;
use demo_data::{FacultyRecord, StudentRecord, UserRecord};
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use diesel_async::pooled_connection::bb8::PooledConnection;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{Collection, DemoDataStore, StoreError};

use super::models::{NewFacultyRow, NewStudentRow, NewUserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{
    analytics, certificates, faculty, portfolios, recommendations, reviews, skills, students,
    users,
};

/// Diesel-backed implementation of the demo data store port.
#[derive(Clone)]
pub struct DieselDemoDataStore {
    pool: DbPool,
}

impl DieselDemoDataStore {
    /// Create a new store adapter with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn conn(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, StoreError> {
        self.pool.get().await.map_err(map_pool_error)
    }
}

/// Map pool errors to store errors.
fn map_pool_error(error: PoolError) -> StoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            StoreError::connection(message)
        }
    }
}

/// Map Diesel errors to store errors.
fn map_diesel_error(error: diesel::result::Error) -> StoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    let error_message = error.to_string();
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                error = %error_message,
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            error = %error_message,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            StoreError::connection(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) => StoreError::query(info.message().to_owned()),
        _ => StoreError::query(error_message),
    }
}

fn rows_to_count(rows: usize) -> u64 {
    u64::try_from(rows).unwrap_or(u64::MAX)
}

fn signed_to_count(count: i64) -> u64 {
    u64::try_from(count).unwrap_or_default()
}

fn student_rows(records: &[StudentRecord]) -> Vec<NewStudentRow<'_>> {
    records
        .iter()
        .map(|record| NewStudentRow {
            id: Uuid::new_v4(),
            user_id: record.user_id,
            student_id: &record.student_id,
            department: &record.department,
            year: i32::from(record.year),
            semester: i32::from(record.semester),
            cgpa: record.cgpa,
            phone: record.phone.as_deref(),
        })
        .collect()
}

fn faculty_rows(records: &[FacultyRecord]) -> Result<Vec<NewFacultyRow<'_>>, StoreError> {
    records
        .iter()
        .map(|record| {
            let experience_years = i32::try_from(record.experience_years)
                .map_err(|_| StoreError::query("experience_years overflows the column type"))?;
            Ok(NewFacultyRow {
                id: Uuid::new_v4(),
                user_id: record.user_id,
                employee_id: &record.employee_id,
                full_name: &record.full_name,
                department: &record.department,
                designation: &record.designation,
                experience_years,
                phone: record.phone.as_deref(),
            })
        })
        .collect()
}

#[async_trait]
impl DemoDataStore for DieselDemoDataStore {
    async fn insert_users(&self, records: &[UserRecord]) -> Result<usize, StoreError> {
        let rows: Vec<NewUserRow<'_>> = records
            .iter()
            .map(|record| NewUserRow {
                id: record.id,
                email: &record.email,
                full_name: &record.full_name,
                role: record.role.as_str(),
                created_at: record.created_at,
                updated_at: record.updated_at,
            })
            .collect();

        let mut conn = self.conn().await?;
        diesel::insert_into(users::table)
            .values(&rows)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn insert_students(&self, records: &[StudentRecord]) -> Result<usize, StoreError> {
        let rows = student_rows(records);
        let mut conn = self.conn().await?;
        diesel::insert_into(students::table)
            .values(&rows)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn insert_faculty(&self, records: &[FacultyRecord]) -> Result<usize, StoreError> {
        let rows = faculty_rows(records)?;
        let mut conn = self.conn().await?;
        diesel::insert_into(faculty::table)
            .values(&rows)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn count(&self, collection: Collection) -> Result<u64, StoreError> {
        let mut conn = self.conn().await?;
        let count: i64 = match collection {
            Collection::Analytics => analytics::table.count().get_result(&mut conn).await,
            Collection::Recommendations => {
                recommendations::table.count().get_result(&mut conn).await
            }
            Collection::Reviews => reviews::table.count().get_result(&mut conn).await,
            Collection::Skills => skills::table.count().get_result(&mut conn).await,
            Collection::Portfolios => portfolios::table.count().get_result(&mut conn).await,
            Collection::Certificates => certificates::table.count().get_result(&mut conn).await,
            Collection::Faculty => faculty::table.count().get_result(&mut conn).await,
            Collection::Students => students::table.count().get_result(&mut conn).await,
            Collection::Users => users::table.count().get_result(&mut conn).await,
        }
        .map_err(map_diesel_error)?;
        Ok(signed_to_count(count))
    }

    async fn delete_all(&self, collection: Collection) -> Result<u64, StoreError> {
        let mut conn = self.conn().await?;
        let removed = match collection {
            Collection::Analytics => diesel::delete(analytics::table).execute(&mut conn).await,
            Collection::Recommendations => {
                diesel::delete(recommendations::table).execute(&mut conn).await
            }
            Collection::Reviews => diesel::delete(reviews::table).execute(&mut conn).await,
            Collection::Skills => diesel::delete(skills::table).execute(&mut conn).await,
            Collection::Portfolios => diesel::delete(portfolios::table).execute(&mut conn).await,
            Collection::Certificates => {
                diesel::delete(certificates::table).execute(&mut conn).await
            }
            Collection::Faculty => diesel::delete(faculty::table).execute(&mut conn).await,
            Collection::Students => diesel::delete(students::table).execute(&mut conn).await,
            Collection::Users => diesel::delete(users::table).execute(&mut conn).await,
        }
        .map_err(map_diesel_error)?;
        Ok(rows_to_count(removed))
    }

    async fn orphaned_references(&self, collection: Collection) -> Result<Vec<Uuid>, StoreError> {
        let mut conn = self.conn().await?;
        let user_ids = users::table.select(users::id);
        let student_ids = students::table.select(students::id);

        // Anti-joins: rows whose parent key has no match in the parent table.
        let orphans = match collection {
            Collection::Analytics => {
                analytics::table
                    .filter(analytics::user_id.ne_all(user_ids))
                    .select(analytics::user_id)
                    .load(&mut conn)
                    .await
            }
            Collection::Recommendations => {
                recommendations::table
                    .filter(recommendations::student_id.ne_all(student_ids))
                    .select(recommendations::student_id)
                    .load(&mut conn)
                    .await
            }
            Collection::Reviews => {
                reviews::table
                    .filter(
                        reviews::certificate_id.ne_all(certificates::table.select(certificates::id)),
                    )
                    .select(reviews::certificate_id)
                    .load(&mut conn)
                    .await
            }
            Collection::Skills => {
                skills::table
                    .filter(skills::student_id.ne_all(student_ids))
                    .select(skills::student_id)
                    .load(&mut conn)
                    .await
            }
            Collection::Portfolios => {
                portfolios::table
                    .filter(portfolios::student_id.ne_all(student_ids))
                    .select(portfolios::student_id)
                    .load(&mut conn)
                    .await
            }
            Collection::Certificates => {
                certificates::table
                    .filter(certificates::student_id.ne_all(student_ids))
                    .select(certificates::student_id)
                    .load(&mut conn)
                    .await
            }
            Collection::Faculty => {
                faculty::table
                    .filter(faculty::user_id.ne_all(user_ids))
                    .select(faculty::user_id)
                    .load(&mut conn)
                    .await
            }
            Collection::Students => {
                students::table
                    .filter(students::user_id.ne_all(user_ids))
                    .select(students::user_id)
                    .load(&mut conn)
                    .await
            }
            Collection::Users => Ok(Vec::new()),
        }
        .map_err(map_diesel_error)?;
        Ok(orphans)
    }

    async fn check_connectivity(&self) -> Result<(), StoreError> {
        let mut conn = self.conn().await?;
        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and row conversion.
    use chrono::Utc;
    use demo_data::{generate_faculty, generate_students, generate_users, rng_for_seed};
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let mapped = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(mapped, StoreError::Connection { .. }));
        assert!(mapped.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_error_maps_to_query_error() {
        let mapped = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(mapped, StoreError::Query { .. }));
    }

    #[rstest]
    fn student_rows_preserve_record_fields() {
        let now = Utc::now();
        let mut rng = rng_for_seed(5);
        let users = generate_users(20, now, &mut rng).expect("generated");
        let students = generate_students(&users, now, &mut rng).expect("generated");

        let rows = student_rows(&students);
        assert_eq!(rows.len(), students.len());
        for (row, record) in rows.iter().zip(&students) {
            assert_eq!(row.user_id, record.user_id);
            assert_eq!(row.student_id, record.student_id);
            assert_eq!(row.year, i32::from(record.year));
            assert_eq!(row.semester, i32::from(record.semester));
            assert_eq!(row.cgpa, record.cgpa);
        }
    }

    #[rstest]
    fn faculty_rows_convert_experience_to_column_type() {
        let now = Utc::now();
        let mut rng = rng_for_seed(5);
        let users = generate_users(67, now, &mut rng).expect("generated");
        let faculty = generate_faculty(&users, now, &mut rng).expect("generated");

        let rows = faculty_rows(&faculty).expect("convertible");
        assert_eq!(rows.len(), faculty.len());
        for (row, record) in rows.iter().zip(&faculty) {
            assert_eq!(row.employee_id, record.employee_id);
            assert!(row.experience_years >= 0);
        }
    }

    #[rstest]
    fn counts_saturate_instead_of_wrapping() {
        assert_eq!(signed_to_count(-1), 0);
        assert_eq!(signed_to_count(42), 42);
        assert_eq!(rows_to_count(42), 42);
    }
}
