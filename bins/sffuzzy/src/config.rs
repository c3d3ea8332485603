//! Configuration file loading
//!
//! Precedence is command line flag, then config file, then built-in default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sffuzzy::Options;
use sffuzzy_telemetry::TelemetryConfig;
use std::path::{Path, PathBuf};

/// Result limit used when neither a flag nor the config file sets one
pub const DEFAULT_LIMIT: i64 = 10;

/// Root configuration schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigSchema {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub logging: TelemetryConfig,
}

/// Search defaults, each optional so that unset keys fall through
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub sort: Option<bool>,
    pub normalize: Option<bool>,
    pub limit: Option<i64>,
}

impl SearchConfig {
    /// Resolve search options, preferring explicit flag values.
    pub fn resolve(&self, sort: Option<bool>, normalize: Option<bool>, limit: Option<i64>) -> Options {
        Options::new()
            .with_sort(sort.or(self.sort).unwrap_or(true))
            .with_normalize(normalize.or(self.normalize).unwrap_or(true))
            .with_limit(limit.or(self.limit).unwrap_or(DEFAULT_LIMIT))
    }
}

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicitly given path must exist; discovered files are optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(find_config_file);

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        if let Some(ref p) = config_path {
            tracing::debug!(path = %p.display(), "Loaded config file");
        }

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let candidates = [".sffuzzy.toml", "sffuzzy.toml", ".config/sffuzzy.toml"];

    candidates
        .into_iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}
