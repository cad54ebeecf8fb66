//! Startup configuration loading
//!
//! `THERMO_CONFIG` names an optional JSON file holding a
//! [`DashboardConfig`]; `THERMO_SEED` overrides its RNG seed. Any problem is
//! logged and the defaults are used instead.

use std::env;
use std::fs;
use std::path::Path;

use log::{error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thermo_core::config::DashboardConfig;

const CONFIG_ENV: &str = "THERMO_CONFIG";
const SEED_ENV: &str = "THERMO_SEED";

/// Read the configuration from the environment, falling back to defaults
pub fn load() -> DashboardConfig {
    let mut config = match env::var(CONFIG_ENV) {
        Ok(path) => read_file(Path::new(&path)).unwrap_or_default(),
        Err(_) => DashboardConfig::default(),
    };

    if let Ok(raw) = env::var(SEED_ENV) {
        match raw.trim().parse::<u64>() {
            Ok(seed) => config.seed = Some(seed),
            Err(e) => warn!("Ignoring {}={:?}: {}", SEED_ENV, raw, e),
        }
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration ({}), using defaults", e);
        let seed = config.seed;
        config = DashboardConfig {
            seed,
            ..DashboardConfig::default()
        };
    }

    config
}

fn read_file(path: &Path) -> Option<DashboardConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            error!("Could not read {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&contents) {
        Ok(config) => {
            info!("Loaded configuration from {}", path.display());
            Some(config)
        }
        Err(e) => {
            error!("Could not parse {}: {}", path.display(), e);
            None
        }
    }
}

/// Seeded RNG when a seed is configured, otherwise one seeded from entropy
pub fn rng(config: &DashboardConfig) -> StdRng {
    match config.seed {
        Some(seed) => {
            info!("Using RNG seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
