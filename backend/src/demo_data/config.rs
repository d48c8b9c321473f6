//! Demo data configuration loaded via OrthoConfig.

use demo_data::GeneratorConfig;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_STUDENT_COUNT: usize = 50;
const DEFAULT_FACULTY_COUNT: usize = 10;

/// Configuration values controlling demo data seeding at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DEMO_DATA")]
pub struct DemoDataSettings {
    /// Enable demo data seeding on startup.
    #[ortho_config(default = false)]
    pub enabled: bool,
    /// Optional override for the number of student accounts generated.
    pub student_count: Option<usize>,
    /// Optional override for the number of faculty accounts generated.
    pub faculty_count: Option<usize>,
    /// Fixed RNG seed; a fresh one is drawn from the OS when unset.
    pub seed: Option<u64>,
    /// Delete existing demo data before seeding.
    #[ortho_config(default = false)]
    pub wipe_first: bool,
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
}

impl DemoDataSettings {
    /// Return the configured student count, falling back to the default.
    #[must_use]
    pub fn student_count(&self) -> usize {
        self.student_count.unwrap_or(DEFAULT_STUDENT_COUNT)
    }

    /// Return the configured faculty count, falling back to the default.
    #[must_use]
    pub fn faculty_count(&self) -> usize {
        self.faculty_count.unwrap_or(DEFAULT_FACULTY_COUNT)
    }

    /// Build the generator configuration these settings describe.
    #[must_use]
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            student_count: self.student_count(),
            faculty_count: self.faculty_count(),
            ..GeneratorConfig::default()
        }
    }
}
