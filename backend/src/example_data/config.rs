//! Demo seeding settings, layered from CLI, environment and config files.
//!
//! Without overrides the bundled registry under `fixtures/example-data` is
//! used together with the `baseline-rally` seed, which covers every string
//! lifecycle stage.

use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const BASELINE_SEED: &str = "baseline-rally";

fn bundled_registry() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/example-data/seeds.json")
}

/// Controls whether and how demo strings and sessions are seeded at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXAMPLE_DATA")]
pub struct ExampleDataSettings {
    /// Seed the demo owner's strings and sessions before reporting.
    #[ortho_config(default = false)]
    pub enabled: bool,
    /// Registry seed to apply.
    pub seed_name: Option<String>,
    /// Registry file replacing the bundled one.
    pub registry_path: Option<PathBuf>,
}

impl ExampleDataSettings {
    /// Seed to apply, trimmed; `baseline-rally` when unset.
    ///
    /// A configured but blank name stays blank so startup can reject it.
    pub fn seed_name(&self) -> &str {
        self.seed_name.as_deref().map_or(BASELINE_SEED, str::trim)
    }

    /// Registry file to read; the bundled fixture when unset or empty.
    pub fn registry_path(&self) -> PathBuf {
        self.registry_path
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
            .unwrap_or_else(bundled_registry)
    }
}
