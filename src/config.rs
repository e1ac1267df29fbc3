//! Configuration loading and validation.
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults
//! 2. TOML file (`taxpayer-records.toml` in the working directory, or `--config`)
//! 3. Environment variables prefixed with `TAXPAYER_`, nested with `__`
//!    (e.g. `TAXPAYER_TABLE__ROWS_PER_PAGE=25`)

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::browser::table::DEFAULT_ROWS_PER_PAGE;
use crate::model::TaxRecordCreate;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "taxpayer-records.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "TAXPAYER_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(Box<figment::Error>),

    #[error("invalid configuration: {message}")]
    Validation { message: String },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Load(Box::new(err))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub table: TableConfig,
    /// Records added to the service before the browser mounts.
    pub seed: Vec<TaxRecordCreate>,
}

/// Settings for the in-process record actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Capacity of the actor's request channel.
    pub buffer_size: usize,
    /// TID assigned to the first record created.
    pub first_tid: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            first_tid: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub rows_per_page: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl Config {
    /// Load configuration from the default file and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or the result is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom file path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or the result is invalid.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_file = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn default_config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] describing the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service.buffer_size == 0 {
            return Err(ConfigError::Validation {
                message: "service.buffer_size must be greater than 0".to_string(),
            });
        }
        if self.service.first_tid == 0 {
            return Err(ConfigError::Validation {
                message: "service.first_tid must be greater than 0".to_string(),
            });
        }
        if self.table.rows_per_page == 0 {
            return Err(ConfigError::Validation {
                message: "table.rows_per_page must be greater than 0".to_string(),
            });
        }
        for (index, record) in self.seed.iter().enumerate() {
            let blank = record.blank_fields();
            if !blank.is_empty() {
                return Err(ConfigError::Validation {
                    message: format!("seed[{index}] has empty fields: {}", blank.join(", ")),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service.buffer_size, 32);
        assert_eq!(config.service.first_tid, 1);
        assert_eq!(config.table.rows_per_page, 10);
        assert!(config.seed.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        Jail::expect_with(|_jail| {
            let config = Config::load_from(Some(Path::new("does-not-exist.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_file_and_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE_NAME,
                r#"
                [service]
                first_tid = 100

                [table]
                rows_per_page = 5

                [[seed]]
                first_name = "Jane"
                last_name = "Doe"
                address = "1 Main St"
                "#,
            )?;
            jail.set_env("TAXPAYER_TABLE__ROWS_PER_PAGE", "25");

            let config = Config::load().map_err(|e| e.to_string())?;
            assert_eq!(config.service.first_tid, 100);
            assert_eq!(config.service.buffer_size, 32);
            assert_eq!(config.table.rows_per_page, 25);
            assert_eq!(config.seed, vec![TaxRecordCreate::new("Jane", "Doe", "1 Main St")]);
            Ok(())
        });
    }

    #[test]
    fn test_validation_rejects_blank_seed() {
        let config = Config {
            seed: vec![TaxRecordCreate::new("Jane", "", "1 Main St")],
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("seed[0] has empty fields: last_name"));
    }

    #[test]
    fn test_validation_rejects_zero_values() {
        let mut config = Config::default();
        config.table.rows_per_page = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation { .. })));

        let mut config = Config::default();
        config.service.buffer_size = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.service.first_tid = 0;
        assert!(config.validate().is_err());
    }
}
