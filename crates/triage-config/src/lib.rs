//! # triage-config
//!
//! Layered configuration loading for sqltriage using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SQLTRIAGE_*` prefix, `__` as separator)
//! 2. Project-level `.sqltriage/config.toml`
//! 3. User-level `~/.config/sqltriage/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SQLTRIAGE_DATABASE__PRODUCT` -> `database.product`,
//! `SQLTRIAGE_REPORT__VERBOSE_UNCLASSIFIED` -> `report.verbose_unclassified`.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use triage_config::TriageConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = TriageConfig::load_with_dotenv().expect("config");
//!
//! // Or without dotenvy (env vars must already be set):
//! let config = TriageConfig::load().expect("config");
//!
//! println!("classifying for product: {}", config.database.product);
//! ```

mod database;
mod error;
mod report;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use report::ReportConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TriageConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl TriageConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`TriageConfig::load_with_dotenv`] if
    /// you need `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`SQLTRIAGE_*` prefix)
    /// 2. `.sqltriage/config.toml` (project-local)
    /// 3. `~/.config/sqltriage/config.toml` (user-global)
    /// 4. Default values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any layer fails to merge or extract.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root
    /// before building the figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any layer fails to merge or extract.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".sqltriage/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("SQLTRIAGE_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sqltriage").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir
    /// looking for a `.env` file. Silently does nothing if no `.env` is
    /// found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        // Fallback: try current directory
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = TriageConfig::default();
        assert_eq!(config.database.product, "default");
        assert!(!config.database.is_configured());
        assert!(!config.report.verbose_unclassified);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = TriageConfig::figment();
        let config: TriageConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.database.product, "default");
    }
}
