//! Validate a generation run end to end without touching a database.
//!
//! Runs the full seeding pipeline against the in-memory fixture store, then
//! prints the distribution report and the referential integrity verdict.
//! Exits non-zero when any invariant or integrity check fails.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;
use std::sync::Arc;

use backend::domain::ports::FixtureDemoDataStore;
use backend::domain::{DemoDataSeeder, PersistenceGateway, SeedOptions};
use clap::Parser;
use demo_data::{
    DistributionReport, GeneratorConfig, validate_faculty, validate_students, validate_users,
};
use tokio::runtime::Builder;

/// `validate-demo-data` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "validate-demo-data",
    about = "Run the demo data pipeline in memory and report distributions and violations",
    version
)]
struct CliArgs {
    /// Number of student accounts to generate.
    #[arg(long, value_name = "count", default_value_t = 50)]
    students: usize,
    /// Number of faculty accounts to generate.
    #[arg(long, value_name = "count", default_value_t = 10)]
    faculty: usize,
    /// Fixed RNG seed for a reproducible run.
    #[arg(long, value_name = "seed")]
    seed: Option<u64>,
    /// Print the distribution report as JSON instead of key=value lines.
    #[arg(long)]
    json: bool,
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
    let config = GeneratorConfig {
        student_count: args.students,
        faculty_count: args.faculty,
        ..GeneratorConfig::default()
    };

    let store = Arc::new(FixtureDemoDataStore::new());
    let gateway = PersistenceGateway::new(Arc::clone(&store));
    let seeder = DemoDataSeeder::new(gateway.clone(), config);

    let outcome = seeder
        .seed(SeedOptions {
            seed: args.seed,
            wipe_first: false,
        })
        .await
        .map_err(|error| io::Error::other(format!("pipeline failed: {error}")))?;

    let users = store.users();
    let students = store.students();
    let faculty = store.faculty();

    let report = DistributionReport::from_batches(&users, &students, &faculty);
    if args.json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|error| io::Error::other(format!("serialise report: {error}")))?;
        println!("{rendered}");
    } else {
        println!("seed={}", outcome.seed);
        for line in report.render_lines() {
            println!("{line}");
        }
    }

    let mut violations = validate_users(&users);
    violations.extend(validate_students(&students));
    violations.extend(validate_faculty(&faculty));

    let integrity = gateway.verify_referential_integrity().await;
    for error in &integrity.errors {
        violations.push(format!("integrity: {error}"));
    }

    if violations.is_empty() {
        println!("validation=ok");
        Ok(())
    } else {
        for violation in &violations {
            eprintln!("violation: {violation}");
        }
        Err(io::Error::other(format!(
            "{} validation violation(s)",
            violations.len()
        )))
    }
}
