//! Port abstraction over the external demo data store.
//!
//! The core only requires a narrow insert/count/delete surface keyed by
//! collection; any document or relational store exposing these capabilities
//! suffices. Adapters translate their native errors into [`StoreError`] and
//! must not batch internally: batching policy belongs to the gateway.

use std::collections::HashSet;
use std::fmt;
use std::sync::Mutex;

use async_trait::async_trait;
use demo_data::{FacultyRecord, StudentRecord, UserRecord};
use thiserror::Error;
use uuid::Uuid;

/// Collections managed by the demo data subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Usage analytics events, keyed by user.
    Analytics,
    /// Faculty recommendations for students.
    Recommendations,
    /// Certificate review records.
    Reviews,
    /// Student skill entries.
    Skills,
    /// Student portfolio pages.
    Portfolios,
    /// Uploaded certificates.
    Certificates,
    /// Faculty profiles.
    Faculty,
    /// Student profiles.
    Students,
    /// User accounts.
    Users,
}

impl Collection {
    /// Deletion order for a full wipe: children strictly before parents.
    pub const WIPE_ORDER: [Self; 9] = [
        Self::Analytics,
        Self::Recommendations,
        Self::Reviews,
        Self::Skills,
        Self::Portfolios,
        Self::Certificates,
        Self::Faculty,
        Self::Students,
        Self::Users,
    ];

    /// Stable collection name as used by the store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Analytics => "analytics",
            Self::Recommendations => "recommendations",
            Self::Reviews => "reviews",
            Self::Skills => "skills",
            Self::Portfolios => "portfolios",
            Self::Certificates => "certificates",
            Self::Faculty => "faculty",
            Self::Students => "students",
            Self::Users => "users",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistence errors raised by store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("demo data store connection failed: {message}")]
    Connection {
        /// Description of the connection failure.
        message: String,
    },

    /// A query or mutation failed during execution.
    #[error("demo data store query failed: {message}")]
    Query {
        /// Description of the query failure.
        message: String,
    },
}

impl StoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for the external demo data store.
///
/// Implementations insert exactly the records they are handed (one network
/// call per invocation), report row counts, delete whole collections, and
/// answer the anti-join orphan probe used by the integrity check.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DemoDataStore: Send + Sync {
    /// Insert user records, returning the number inserted.
    async fn insert_users(&self, users: &[UserRecord]) -> Result<usize, StoreError>;

    /// Insert student records, returning the number inserted.
    async fn insert_students(&self, students: &[StudentRecord]) -> Result<usize, StoreError>;

    /// Insert faculty records, returning the number inserted.
    async fn insert_faculty(&self, faculty: &[FacultyRecord]) -> Result<usize, StoreError>;

    /// Count the rows currently in `collection`.
    async fn count(&self, collection: Collection) -> Result<u64, StoreError>;

    /// Delete every row of `collection`, returning the number removed.
    async fn delete_all(&self, collection: Collection) -> Result<u64, StoreError>;

    /// Return the IDs of rows in `collection` whose parent reference does
    /// not resolve (anti-join). Collections without a parent return an empty
    /// list.
    async fn orphaned_references(&self, collection: Collection) -> Result<Vec<Uuid>, StoreError>;

    /// Probe the store connection.
    async fn check_connectivity(&self) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
struct FixtureState {
    users: Vec<UserRecord>,
    students: Vec<StudentRecord>,
    faculty: Vec<FacultyRecord>,
}

/// In-memory store for tests and dry runs.
///
/// Holds only the three generated collections; the remaining collections are
/// always empty, which keeps wipe and count semantics observable without a
/// database.
#[derive(Debug, Default)]
pub struct FixtureDemoDataStore {
    state: Mutex<FixtureState>,
}

impl FixtureDemoDataStore {
    /// Create an empty fixture store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FixtureState> {
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Snapshot the stored users.
    #[must_use]
    pub fn users(&self) -> Vec<UserRecord> {
        self.lock().users.clone()
    }

    /// Snapshot the stored students.
    #[must_use]
    pub fn students(&self) -> Vec<StudentRecord> {
        self.lock().students.clone()
    }

    /// Snapshot the stored faculty.
    #[must_use]
    pub fn faculty(&self) -> Vec<FacultyRecord> {
        self.lock().faculty.clone()
    }
}

#[async_trait]
impl DemoDataStore for FixtureDemoDataStore {
    async fn insert_users(&self, users: &[UserRecord]) -> Result<usize, StoreError> {
        let mut state = self.lock();
        state.users.extend_from_slice(users);
        Ok(users.len())
    }

    async fn insert_students(&self, students: &[StudentRecord]) -> Result<usize, StoreError> {
        let mut state = self.lock();
        state.students.extend_from_slice(students);
        Ok(students.len())
    }

    async fn insert_faculty(&self, faculty: &[FacultyRecord]) -> Result<usize, StoreError> {
        let mut state = self.lock();
        state.faculty.extend_from_slice(faculty);
        Ok(faculty.len())
    }

    async fn count(&self, collection: Collection) -> Result<u64, StoreError> {
        let state = self.lock();
        let count = match collection {
            Collection::Users => state.users.len(),
            Collection::Students => state.students.len(),
            Collection::Faculty => state.faculty.len(),
            _ => 0,
        };
        Ok(count as u64)
    }

    async fn delete_all(&self, collection: Collection) -> Result<u64, StoreError> {
        let mut state = self.lock();
        let removed = match collection {
            Collection::Users => std::mem::take(&mut state.users).len(),
            Collection::Students => std::mem::take(&mut state.students).len(),
            Collection::Faculty => std::mem::take(&mut state.faculty).len(),
            _ => 0,
        };
        Ok(removed as u64)
    }

    async fn orphaned_references(&self, collection: Collection) -> Result<Vec<Uuid>, StoreError> {
        let state = self.lock();
        let user_ids: HashSet<Uuid> = state.users.iter().map(|u| u.id).collect();
        let orphans = match collection {
            Collection::Students => state
                .students
                .iter()
                .filter(|s| !user_ids.contains(&s.user_id))
                .map(|s| s.user_id)
                .collect(),
            Collection::Faculty => state
                .faculty
                .iter()
                .filter(|f| !user_ids.contains(&f.user_id))
                .map(|f| f.user_id)
                .collect(),
            _ => Vec::new(),
        };
        Ok(orphans)
    }

    async fn check_connectivity(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
