//! Seed the database with generated demo data.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use backend::demo_data::DemoDataSettings;
use backend::domain::{DemoDataSeeder, PersistenceGateway, SeedOptions};
use backend::outbound::persistence::{DbPool, DieselDemoDataStore, PoolConfig};
use clap::Parser;
use demo_data::GeneratorConfig;
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;

/// `seed-demo-data` command arguments.
///
/// Flags override the `DEMO_DATA_*` environment configuration; anything not
/// given on the command line falls back to it.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seed-demo-data",
    about = "Generate demo users, students, and faculty and insert them into PostgreSQL",
    version
)]
struct CliArgs {
    /// Number of student accounts to generate.
    #[arg(long, value_name = "count")]
    students: Option<usize>,
    /// Number of faculty accounts to generate.
    #[arg(long, value_name = "count")]
    faculty: Option<usize>,
    /// Fixed RNG seed for a reproducible run.
    #[arg(long, value_name = "seed")]
    seed: Option<u64>,
    /// Delete all existing demo data before inserting.
    #[arg(long)]
    wipe_first: bool,
    /// Database connection URL. Falls back to `DEMO_DATA_DATABASE_URL`.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    // Command-line flags belong to clap; the settings layer only reads the
    // DEMO_DATA_* environment.
    let settings = DemoDataSettings::load_from_iter([OsString::from("seed-demo-data")])
        .map_err(|error| io::Error::other(format!("load configuration: {error}")))?;

    let database_url = args
        .database_url
        .or_else(|| settings.database_url.clone())
        .ok_or_else(|| {
            io::Error::other("no database URL: pass --database-url or set DEMO_DATA_DATABASE_URL")
        })?;

    let config = GeneratorConfig {
        student_count: args.students.unwrap_or_else(|| settings.student_count()),
        faculty_count: args.faculty.unwrap_or_else(|| settings.faculty_count()),
        ..GeneratorConfig::default()
    };

    let pool = DbPool::new(PoolConfig::new(&database_url))
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;
    let store = DieselDemoDataStore::new(pool);
    let gateway = PersistenceGateway::new(Arc::new(store));

    gateway
        .check_connectivity()
        .await
        .map_err(|error| io::Error::other(format!("database connectivity check failed: {error}")))?;

    let seeder = DemoDataSeeder::new(gateway.clone(), config);
    let outcome = seeder
        .seed(SeedOptions {
            seed: args.seed.or(settings.seed),
            wipe_first: args.wipe_first || settings.wipe_first,
        })
        .await
        .map_err(|error| io::Error::other(format!("seeding failed: {error}")))?;

    println!("seed={}", outcome.seed);
    if let Some(wiped) = &outcome.wiped {
        for (collection, count) in wiped {
            println!("wiped.{collection}={count}");
        }
    }
    println!("users.generated={}", outcome.users.generated);
    println!("users.inserted={}", outcome.users.inserted);
    println!("students.generated={}", outcome.students.generated);
    println!("students.inserted={}", outcome.students.inserted);
    println!("faculty.generated={}", outcome.faculty.generated);
    println!("faculty.inserted={}", outcome.faculty.inserted);

    let counts = gateway
        .collection_counts()
        .await
        .map_err(|error| io::Error::other(format!("count collections: {error}")))?;
    for (collection, count) in counts {
        println!("count.{collection}={count}");
    }

    Ok(())
}
