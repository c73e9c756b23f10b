//! Configuration module for the hash constant search tool.
//!
//! Settings load in three layers: compiled-in defaults, an optional
//! configuration file (TOML, YAML, JSON), and environment variable
//! overrides. Every value is validated for correctness before any search
//! iteration runs.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError as ExternalConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::config::ConfigError;

mod search;

// Re-exports
pub use search::SearchConfig;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "PARAM_HASH";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Top-level configuration for the hash constant search tool.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Search space configuration
    pub search: SearchConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for AppConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.search.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error); `RUST_LOG` overrides it
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for the hash constant search tool.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from a file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(AppConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<AppConfig> {
        let mut builder = Config::builder();

        // Add default configuration values
        builder = builder.add_source(
            Config::try_from(&AppConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        // Add configuration from file if provided
        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let path_str = path
                .to_str()
                .ok_or_else(|| ConfigError::ParseError(format!("Non-UTF-8 path: {path:?}")))?;

            builder = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => builder.add_source(File::with_name(path_str)),
                Some("json") => builder
                    .add_source(File::with_name(path_str).format(config::FileFormat::Json)),
                Some("yaml" | "yml") => builder
                    .add_source(File::with_name(path_str).format(config::FileFormat::Yaml)),
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
        }

        // Add environment variables with prefix
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        // Build the configuration
        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            ExternalConfigError::FileParse { .. } => {
                ConfigError::ParseError("Error parsing config file".to_string())
            }
            ExternalConfigError::Foreign(err) => ConfigError::ParseError(err.to_string()),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        // Deserialize the configuration
        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        // Validate the configuration
        app_config.validate()?;

        Ok(app_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_load_without_a_file() {
        let loader = ConfigLoader::new(None::<&Path>, "PARAM_HASH_TEST_DEFAULTS");
        let config = loader.load().unwrap();
        assert_eq!(config.search.max_multiplier_index, 100_000);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let loader = ConfigLoader::new(Some("/nonexistent/config.toml"), "PARAM_HASH_TEST_MISSING");
        assert!(matches!(
            loader.load(),
            Err(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_toml_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[search]\nmax_multiplier_index = 500\nmodulus_candidates = [256]"
        )
        .unwrap();

        let loader = ConfigLoader::new(Some(&path), "PARAM_HASH_TEST_TOML");
        let config = loader.load().unwrap();
        assert_eq!(config.search.max_multiplier_index, 500);
        assert_eq!(config.search.modulus_candidates, vec![256]);
        // Untouched values keep their defaults
        assert_eq!(config.search.max_shift, crate::hasher::MAX_SHIFT);
    }

    #[test]
    fn test_invalid_values_are_rejected_before_any_search() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[search]\nmodulus_candidates = [100]").unwrap();

        let loader = ConfigLoader::new(Some(&path), "PARAM_HASH_TEST_INVALID");
        assert!(matches!(
            loader.load(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let config = AppConfig {
            log: LogConfig {
                level: "verbose".to_string(),
                json: false,
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
