//! Persistence gateway: batching, wipe, counts, and integrity checks.
//!
//! The gateway owns persistence policy over a [`DemoDataStore`]: generated
//! batches are submitted in fixed-size chunks sequentially, a failing chunk
//! aborts the remainder of the call while preserving the already-inserted
//! count, and the full wipe deletes collections in child-before-parent
//! order. There is no rollback of chunks that succeeded before a failure;
//! callers that need a clean slate rerun with a wipe.

use std::sync::Arc;

use demo_data::{FacultyRecord, StudentRecord, UserRecord};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::ports::{Collection, DemoDataStore, StoreError};

/// Records submitted to the store per network call.
pub const BATCH_SIZE: usize = 100;

/// Errors raised by gateway operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// A batch insert failed; earlier batches of this call remain persisted.
    #[error(
        "insert into '{collection}' failed at batch {batch_index} after {inserted} record(s): {source}"
    )]
    BatchFailed {
        /// Destination collection.
        collection: Collection,
        /// Zero-based index of the failing batch.
        batch_index: usize,
        /// Records successfully inserted by earlier batches of this call.
        inserted: usize,
        /// Underlying store error.
        #[source]
        source: StoreError,
    },

    /// A non-batched store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of the referential integrity check.
///
/// Accumulates one description per inconsistent collection instead of
/// failing on the first; store errors during the probe are collected the
/// same way (best effort).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    /// Human-readable descriptions of detected inconsistencies.
    pub errors: Vec<String>,
}

impl IntegrityReport {
    /// True when no orphans or probe failures were recorded.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Batching facade over a [`DemoDataStore`].
pub struct PersistenceGateway<S> {
    store: Arc<S>,
}

// Manual impl: a derived Clone would demand S: Clone, but only the Arc is
// cloned and stores holding a Mutex never implement Clone.
impl<S> Clone for PersistenceGateway<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> PersistenceGateway<S> {
    /// Create a gateway over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> PersistenceGateway<S>
where
    S: DemoDataStore,
{
    /// Insert users in [`BATCH_SIZE`] chunks.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::BatchFailed`] on the first failing chunk;
    /// chunks inserted before the failure are not rolled back.
    pub async fn insert_users(&self, users: &[UserRecord]) -> Result<usize, GatewayError> {
        let mut inserted = 0;
        for (batch_index, chunk) in users.chunks(BATCH_SIZE).enumerate() {
            match self.store.insert_users(chunk).await {
                Ok(count) => inserted += count,
                Err(source) => {
                    return Err(GatewayError::BatchFailed {
                        collection: Collection::Users,
                        batch_index,
                        inserted,
                        source,
                    });
                }
            }
            debug!(batch_index, inserted, collection = %Collection::Users, "batch inserted");
        }
        Ok(inserted)
    }

    /// Insert students in [`BATCH_SIZE`] chunks.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::BatchFailed`] on the first failing chunk.
    pub async fn insert_students(&self, students: &[StudentRecord]) -> Result<usize, GatewayError> {
        let mut inserted = 0;
        for (batch_index, chunk) in students.chunks(BATCH_SIZE).enumerate() {
            match self.store.insert_students(chunk).await {
                Ok(count) => inserted += count,
                Err(source) => {
                    return Err(GatewayError::BatchFailed {
                        collection: Collection::Students,
                        batch_index,
                        inserted,
                        source,
                    });
                }
            }
            debug!(batch_index, inserted, collection = %Collection::Students, "batch inserted");
        }
        Ok(inserted)
    }

    /// Insert faculty in [`BATCH_SIZE`] chunks.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::BatchFailed`] on the first failing chunk.
    pub async fn insert_faculty(&self, faculty: &[FacultyRecord]) -> Result<usize, GatewayError> {
        let mut inserted = 0;
        for (batch_index, chunk) in faculty.chunks(BATCH_SIZE).enumerate() {
            match self.store.insert_faculty(chunk).await {
                Ok(count) => inserted += count,
                Err(source) => {
                    return Err(GatewayError::BatchFailed {
                        collection: Collection::Faculty,
                        batch_index,
                        inserted,
                        source,
                    });
                }
            }
            debug!(batch_index, inserted, collection = %Collection::Faculty, "batch inserted");
        }
        Ok(inserted)
    }

    /// Delete all demo data, children before parents.
    ///
    /// Returns per-collection deletion counts in wipe order.
    ///
    /// # Errors
    ///
    /// Returns the first store error; collections deleted before the failure
    /// stay deleted.
    pub async fn wipe_demo_data(&self) -> Result<Vec<(Collection, u64)>, GatewayError> {
        let mut removed = Vec::with_capacity(Collection::WIPE_ORDER.len());
        for collection in Collection::WIPE_ORDER {
            let count = self.store.delete_all(collection).await?;
            info!(collection = %collection, count, "collection wiped");
            removed.push((collection, count));
        }
        Ok(removed)
    }

    /// Row counts for every collection, in wipe order.
    ///
    /// # Errors
    ///
    /// Returns the first store error encountered.
    pub async fn collection_counts(&self) -> Result<Vec<(Collection, u64)>, GatewayError> {
        let mut counts = Vec::with_capacity(Collection::WIPE_ORDER.len());
        for collection in Collection::WIPE_ORDER {
            counts.push((collection, self.store.count(collection).await?));
        }
        Ok(counts)
    }

    /// Best-effort orphan detection across all collections.
    ///
    /// Never fails: store errors during a probe are recorded in the report
    /// alongside any detected orphans.
    pub async fn verify_referential_integrity(&self) -> IntegrityReport {
        let mut report = IntegrityReport::default();
        for collection in Collection::WIPE_ORDER {
            match self.store.orphaned_references(collection).await {
                Ok(orphans) if orphans.is_empty() => {}
                Ok(orphans) => report.errors.push(format!(
                    "{collection}: {} row(s) with dangling parent references: {orphans:?}",
                    orphans.len()
                )),
                Err(error) => report
                    .errors
                    .push(format!("{collection}: integrity probe failed: {error}")),
            }
        }
        report
    }

    /// Probe the store connection.
    ///
    /// # Errors
    ///
    /// Returns the store's connectivity error.
    pub async fn check_connectivity(&self) -> Result<(), GatewayError> {
        Ok(self.store.check_connectivity().await?)
    }
}
