//! Domain services for demo data seeding.
//!
//! Purpose: orchestrate generation and persistence of demo records behind the
//! [`ports::DemoDataStore`] boundary. Adapters stay thin; batching, ordering,
//! and integrity policy live here.

pub mod gateway;
pub mod ports;
pub mod seeding;

pub use gateway::{BATCH_SIZE, GatewayError, IntegrityReport, PersistenceGateway};
pub use seeding::{DemoDataSeeder, EntityOutcome, SeedOptions, SeedOutcome, SeedingError};
