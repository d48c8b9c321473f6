//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Implements the [`crate::domain::ports::DemoDataStore`] port over
//! PostgreSQL via `diesel-async` with `bb8` connection pooling. The adapter
//! stays thin: it maps generated records to Diesel row structs, translates
//! Diesel and pool errors into domain store errors, and leaves batching and
//! ordering policy to the gateway.
//!
//! The Diesel schema (`schema.rs`) and row structs (`models.rs`) are
//! implementation details and are never exposed to the domain layer.

mod diesel_demo_data_store;
mod models;
mod pool;
mod schema;

pub use diesel_demo_data_store::DieselDemoDataStore;
pub use pool::{DbPool, PoolConfig, PoolError};
