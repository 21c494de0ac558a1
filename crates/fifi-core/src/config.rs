//! Engine configuration
//!
//! Loads configuration from TOML with a two-layer approach:
//! 1. User override at ~/.local/share/fifi/config/fifi.toml (or an explicit path)
//! 2. Embedded defaults compiled into the binary
//!
//! A handful of environment variables override individual values afterwards.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/fifi.toml");

pub const ENV_SIMULATOR_INTERVAL_SECS: &str = "FIFI_SIMULATOR_INTERVAL_SECS";
pub const ENV_SIMULATOR_PROBABILITY: &str = "FIFI_SIMULATOR_PROBABILITY";
pub const ENV_SIMULATOR_ENABLED: &str = "FIFI_SIMULATOR_ENABLED";

/// Background spending simulator settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulatorConfig {
    pub enabled: bool,
    pub interval: Duration,
    /// Chance per tick of recording a purchase, within [0, 1]
    pub probability: f64,
    /// Exclusive upper bound of a single increment
    pub max_increment: u32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: Duration::from_secs(30),
            probability: 0.3,
            max_increment: 20,
        }
    }
}

/// Store task settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreConfig {
    pub queue_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { queue_capacity: 64 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Config {
    pub simulator: SimulatorConfig,
    pub store: StoreConfig,
}

impl Config {
    /// Load config (override first, then embedded default), then apply env
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let config = load_config(override_path)?;
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Parse config from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        parse_config(content)
    }

    /// Embedded defaults only
    pub fn embedded() -> Result<Self> {
        parse_config(DEFAULT_CONFIG)
    }

    /// Apply environment overrides using `lookup` to read variables
    ///
    /// Unparseable values are logged and ignored.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_SIMULATOR_INTERVAL_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.simulator.interval = Duration::from_secs(secs),
                _ => warn!("Ignoring invalid {}={}", ENV_SIMULATOR_INTERVAL_SECS, raw),
            }
        }
        if let Some(raw) = lookup(ENV_SIMULATOR_PROBABILITY) {
            match raw.trim().parse::<f64>() {
                Ok(p) if p.is_finite() => self.simulator.probability = p.clamp(0.0, 1.0),
                _ => warn!("Ignoring invalid {}={}", ENV_SIMULATOR_PROBABILITY, raw),
            }
        }
        if let Some(raw) = lookup(ENV_SIMULATOR_ENABLED) {
            match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.simulator.enabled = true,
                "0" | "false" | "no" | "off" => self.simulator.enabled = false,
                _ => warn!("Ignoring invalid {}={}", ENV_SIMULATOR_ENABLED, raw),
            }
        }
        self
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("fifi").join("config").join("fifi.toml"))
}

/// Load configuration (override first, then default)
fn load_config(override_path: Option<&Path>) -> Result<Config> {
    let path = match override_path {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path(),
    };

    let content = match path {
        Some(path) if path.exists() => {
            debug!("Loading config from {}", path.display());
            fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?
        }
        _ => DEFAULT_CONFIG.to_string(),
    };

    parse_config(&content)
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    simulator: Option<RawSimulator>,
    store: Option<RawStore>,
}

#[derive(Debug, Deserialize)]
struct RawSimulator {
    enabled: Option<bool>,
    interval_secs: Option<u64>,
    probability: Option<f64>,
    max_increment: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawStore {
    queue_capacity: Option<usize>,
}

fn parse_config(content: &str) -> Result<Config> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = Config::default();

    if let Some(sim) = raw.simulator {
        if let Some(enabled) = sim.enabled {
            config.simulator.enabled = enabled;
        }
        if let Some(secs) = sim.interval_secs {
            if secs == 0 {
                return Err(Error::Config(
                    "simulator.interval_secs must be positive".to_string(),
                ));
            }
            config.simulator.interval = Duration::from_secs(secs);
        }
        if let Some(p) = sim.probability {
            if !p.is_finite() {
                return Err(Error::Config(
                    "simulator.probability must be a number".to_string(),
                ));
            }
            config.simulator.probability = p.clamp(0.0, 1.0);
        }
        if let Some(max) = sim.max_increment {
            config.simulator.max_increment = max;
        }
    }

    if let Some(store) = raw.store {
        if let Some(capacity) = store.queue_capacity {
            config.store.queue_capacity = capacity.max(1);
        }
    }

    Ok(config)
}
