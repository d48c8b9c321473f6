//! Startup seeding orchestration.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::demo_data::config::DemoDataSettings;
use crate::domain::{DemoDataSeeder, PersistenceGateway, SeedOptions, SeedOutcome, SeedingError};
use crate::outbound::persistence::{DbPool, DieselDemoDataStore};

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Seed generation or persistence failed.
    #[error("demo data seeding error: {0}")]
    Seeding(#[from] SeedingError),
}

/// Seed demo data on startup when enabled.
///
/// Returns `Ok(None)` when seeding is disabled or no database pool is
/// available; both cases are logged and deliberately non-fatal so a missing
/// `DATABASE_URL` never prevents the service from starting.
///
/// # Errors
///
/// Returns [`StartupSeedingError`] when an enabled run fails to generate or
/// persist its records.
pub async fn seed_demo_data_on_startup(
    settings: &DemoDataSettings,
    db_pool: Option<&DbPool>,
) -> Result<Option<SeedOutcome>, StartupSeedingError> {
    if !settings.enabled {
        info!(reason = "disabled", "demo data seeding skipped");
        return Ok(None);
    }

    let Some(db_pool) = db_pool else {
        warn!("demo data seeding enabled but DATABASE_URL is missing; skipping");
        return Ok(None);
    };

    let store = DieselDemoDataStore::new(db_pool.clone());
    let gateway = PersistenceGateway::new(Arc::new(store));
    let seeder = DemoDataSeeder::new(gateway, settings.generator_config());

    let outcome = seeder
        .seed(SeedOptions {
            seed: settings.seed,
            wipe_first: settings.wipe_first,
        })
        .await?;

    info!(
        seed = outcome.seed,
        users = outcome.users.inserted,
        students = outcome.students.inserted,
        faculty = outcome.faculty.inserted,
        wiped = outcome.wiped.is_some(),
        "demo data seeding applied"
    );

    Ok(Some(outcome))
}
