//! Seeding orchestration: generate, optionally wipe, then persist.
//!
//! The seeder glues the generator crate to the persistence gateway. It
//! resolves the RNG seed first so every run can be replayed, validates the
//! run configuration before touching the store, and inserts parents before
//! children so a partial failure never leaves dangling references.

use chrono::Utc;
use demo_data::{
    ConfigError, GenerationError, GeneratorConfig, generate_faculty, generate_students,
    generate_users, resolve_seed, rng_for_seed,
};
use thiserror::Error;
use tracing::info;

use crate::domain::gateway::{GatewayError, PersistenceGateway};
use crate::domain::ports::{Collection, DemoDataStore};

/// Errors raised by a seeding run.
#[derive(Debug, Error)]
pub enum SeedingError {
    /// The run configuration is inconsistent.
    #[error("invalid seeding configuration: {0}")]
    Config(#[from] ConfigError),

    /// Record generation failed or produced an invalid batch.
    #[error("demo data generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// Persisting the generated records failed.
    #[error("demo data persistence failed: {0}")]
    Persistence(#[from] GatewayError),
}

/// Per-run options layered on top of [`GeneratorConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedOptions {
    /// Explicit RNG seed; a fresh one is drawn from the OS when absent.
    pub seed: Option<u64>,
    /// Delete all existing demo data before inserting.
    pub wipe_first: bool,
}

/// Summary of a completed seeding run.
#[derive(Debug, Clone)]
pub struct SeedOutcome {
    /// The seed the run actually used; rerunning with it reproduces the data.
    pub seed: u64,
    /// Users generated and inserted.
    pub users: EntityOutcome,
    /// Students generated and inserted.
    pub students: EntityOutcome,
    /// Faculty generated and inserted.
    pub faculty: EntityOutcome,
    /// Per-collection deletion counts when the run wiped first.
    pub wiped: Option<Vec<(Collection, u64)>>,
}

/// Generated versus inserted counts for one entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityOutcome {
    /// Records produced by the generator.
    pub generated: usize,
    /// Records acknowledged by the store.
    pub inserted: usize,
}

/// Orchestrates demo data generation and persistence.
pub struct DemoDataSeeder<S> {
    gateway: PersistenceGateway<S>,
    config: GeneratorConfig,
}

impl<S> DemoDataSeeder<S>
where
    S: DemoDataStore,
{
    /// Create a seeder over the given gateway and run configuration.
    pub fn new(gateway: PersistenceGateway<S>, config: GeneratorConfig) -> Self {
        Self { gateway, config }
    }

    /// Run a full seeding pass.
    ///
    /// Generates all records up front, validates each batch, optionally
    /// wipes the store, then inserts users before students and faculty.
    ///
    /// # Errors
    ///
    /// Returns [`SeedingError`] when the configuration is invalid, when
    /// generation or batch validation fails, or when the store rejects an
    /// insert. Batches inserted before a persistence failure remain in the
    /// store.
    pub async fn seed(&self, options: SeedOptions) -> Result<SeedOutcome, SeedingError> {
        self.config.validate()?;

        let seed = resolve_seed(options.seed);
        let mut rng = rng_for_seed(seed);
        let now = Utc::now();
        info!(seed, user_total = self.config.user_total(), "seeding demo data");

        // Generators validate their own batches and reject violations
        // wholesale, so a clean return here is already a validated batch.
        let users = generate_users(self.config.user_total(), now, &mut rng)?;
        let students = generate_students(&users, now, &mut rng)?;
        let faculty = generate_faculty(&users, now, &mut rng)?;

        let wiped = if options.wipe_first {
            Some(self.gateway.wipe_demo_data().await?)
        } else {
            None
        };

        let users_inserted = self.gateway.insert_users(&users).await?;
        let students_inserted = self.gateway.insert_students(&students).await?;
        let faculty_inserted = self.gateway.insert_faculty(&faculty).await?;

        info!(
            seed,
            users = users_inserted,
            students = students_inserted,
            faculty = faculty_inserted,
            "demo data seeded"
        );

        Ok(SeedOutcome {
            seed,
            users: EntityOutcome {
                generated: users.len(),
                inserted: users_inserted,
            },
            students: EntityOutcome {
                generated: students.len(),
                inserted: students_inserted,
            },
            faculty: EntityOutcome {
                generated: faculty.len(),
                inserted: faculty_inserted,
            },
            wiped,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use demo_data::Role;
    use rstest::{fixture, rstest};

    use crate::domain::ports::FixtureDemoDataStore;

    use super::*;

    #[fixture]
    fn seeder() -> (DemoDataSeeder<FixtureDemoDataStore>, Arc<FixtureDemoDataStore>) {
        let store = Arc::new(FixtureDemoDataStore::new());
        let gateway = PersistenceGateway::new(Arc::clone(&store));
        (
            DemoDataSeeder::new(gateway, GeneratorConfig::default()),
            store,
        )
    }

    #[rstest]
    #[tokio::test]
    async fn seeding_populates_all_three_collections(
        seeder: (DemoDataSeeder<FixtureDemoDataStore>, Arc<FixtureDemoDataStore>),
    ) {
        let (seeder, store) = seeder;
        let outcome = seeder
            .seed(SeedOptions {
                seed: Some(7),
                wipe_first: false,
            })
            .await
            .expect("seeding succeeds");

        assert_eq!(outcome.seed, 7);
        assert_eq!(outcome.users.generated, 60);
        assert_eq!(outcome.users.inserted, 60);
        assert_eq!(store.users().len(), 60);
        assert_eq!(store.students().len(), outcome.students.inserted);
        assert_eq!(store.faculty().len(), outcome.faculty.inserted);
        assert!(outcome.students.generated > outcome.faculty.generated);
        assert!(outcome.wiped.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn seeded_records_reference_stored_users(
        seeder: (DemoDataSeeder<FixtureDemoDataStore>, Arc<FixtureDemoDataStore>),
    ) {
        let (seeder, store) = seeder;
        seeder
            .seed(SeedOptions {
                seed: Some(11),
                wipe_first: false,
            })
            .await
            .expect("seeding succeeds");

        let gateway = PersistenceGateway::new(store);
        let report = gateway.verify_referential_integrity().await;
        assert!(report.is_consistent(), "unexpected: {:?}", report.errors);
    }

    #[rstest]
    #[tokio::test]
    async fn wipe_first_clears_previous_runs(
        seeder: (DemoDataSeeder<FixtureDemoDataStore>, Arc<FixtureDemoDataStore>),
    ) {
        let (seeder, store) = seeder;
        seeder
            .seed(SeedOptions {
                seed: Some(1),
                wipe_first: false,
            })
            .await
            .expect("first run");
        let outcome = seeder
            .seed(SeedOptions {
                seed: Some(2),
                wipe_first: true,
            })
            .await
            .expect("second run");

        let wiped = outcome.wiped.expect("wipe counts present");
        let users_wiped = wiped
            .iter()
            .find(|(c, _)| *c == Collection::Users)
            .map(|(_, n)| *n)
            .expect("users entry");
        assert_eq!(users_wiped, 60);
        assert_eq!(store.users().len(), 60);
    }

    #[rstest]
    #[tokio::test]
    async fn identical_seeds_store_identical_users() {
        let first = {
            let store = Arc::new(FixtureDemoDataStore::new());
            let seeder = DemoDataSeeder::new(
                PersistenceGateway::new(Arc::clone(&store)),
                GeneratorConfig::default(),
            );
            seeder
                .seed(SeedOptions {
                    seed: Some(99),
                    wipe_first: false,
                })
                .await
                .expect("seeding succeeds");
            store.users()
        };
        let second = {
            let store = Arc::new(FixtureDemoDataStore::new());
            let seeder = DemoDataSeeder::new(
                PersistenceGateway::new(Arc::clone(&store)),
                GeneratorConfig::default(),
            );
            seeder
                .seed(SeedOptions {
                    seed: Some(99),
                    wipe_first: false,
                })
                .await
                .expect("seeding succeeds");
            store.users()
        };

        let emails = |users: &[demo_data::UserRecord]| {
            users.iter().map(|u| u.email.clone()).collect::<Vec<_>>()
        };
        assert_eq!(emails(&first), emails(&second));
    }

    #[rstest]
    #[tokio::test]
    async fn invalid_config_is_rejected_before_generation(
        seeder: (DemoDataSeeder<FixtureDemoDataStore>, Arc<FixtureDemoDataStore>),
    ) {
        let (_, store) = seeder;
        let config = GeneratorConfig {
            verification_rate: 1.5,
            ..GeneratorConfig::default()
        };
        let seeder = DemoDataSeeder::new(PersistenceGateway::new(Arc::clone(&store)), config);

        let error = seeder
            .seed(SeedOptions::default())
            .await
            .expect_err("rate out of range");
        assert!(matches!(error, SeedingError::Config(_)));
        assert!(store.users().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn zero_users_is_rejected(
        seeder: (DemoDataSeeder<FixtureDemoDataStore>, Arc<FixtureDemoDataStore>),
    ) {
        let (_, store) = seeder;
        let config = GeneratorConfig {
            student_count: 0,
            faculty_count: 0,
            ..GeneratorConfig::default()
        };
        let seeder = DemoDataSeeder::new(PersistenceGateway::new(Arc::clone(&store)), config);

        let error = seeder
            .seed(SeedOptions::default())
            .await
            .expect_err("nothing to generate");
        assert!(matches!(
            error,
            SeedingError::Generation(GenerationError::NoUsersRequested)
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn stored_roles_match_the_split(
        seeder: (DemoDataSeeder<FixtureDemoDataStore>, Arc<FixtureDemoDataStore>),
    ) {
        let (seeder, store) = seeder;
        seeder
            .seed(SeedOptions {
                seed: Some(3),
                wipe_first: false,
            })
            .await
            .expect("seeding succeeds");

        let users = store.users();
        let count = |role: Role| users.iter().filter(|u| u.role == role).count();
        assert_eq!(count(Role::Student), 48);
        assert_eq!(count(Role::Faculty), 9);
        assert_eq!(count(Role::Admin), 3);
    }
}
