// Rust guideline compliant 2026-02-06

//! Configuration management for Daag.

use crate::colors::DEFAULT_COLOR;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Layout engine used to build the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Hierarchical layout.
    #[default]
    Dot,
    /// Spring-model layout.
    Neato,
    /// Multiscale spring-model layout for large graphs.
    Sfdp,
    /// Force-directed layout.
    Fdp,
}

impl Engine {
    /// Name of the engine binary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Neato => "neato",
            Self::Sfdp => "sfdp",
            Self::Fdp => "fdp",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dot" => Ok(Self::Dot),
            "neato" => Ok(Self::Neato),
            "sfdp" => Ok(Self::Sfdp),
            "fdp" => Ok(Self::Fdp),
            other => Err(Error::InvalidConfig(format!(
                "unknown engine `{}` (expected dot, neato, sfdp, or fdp)",
                other
            ))),
        }
    }
}

/// File format for the rendered graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GraphFormat {
    /// Portable Network Graphics.
    #[default]
    Png,
    /// Portable Document Format.
    Pdf,
}

impl GraphFormat {
    /// Name of the format, as passed to the engine's `-T` flag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "pdf" => Ok(Self::Pdf),
            other => Err(Error::InvalidConfig(format!(
                "unknown format `{}` (expected png or pdf)",
                other
            ))),
        }
    }
}

/// Configuration for Daag behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Fill color for statuses without an explicit override.
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Default layout engine.
    #[serde(default)]
    pub engine: Engine,

    /// Default rendered file format.
    #[serde(default)]
    pub format: GraphFormat,
}

/// Default fill color.
fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            engine: Engine::default(),
            format: GraphFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<dir>/daag.toml`
    /// 3. Environment variables with `DAAG_` prefix
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory holding the optional `daag.toml`
    ///
    /// # Returns
    ///
    /// A Config struct with file and environment values applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file exists but cannot be read
    /// - The configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = dir.join("daag.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `DAAG_DEFAULT_COLOR` - Fill color for statuses without an override
    /// - `DAAG_ENGINE` - Layout engine (dot/neato/sfdp/fdp)
    /// - `DAAG_FORMAT` - Rendered file format (png/pdf)
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable value is invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("DAAG_DEFAULT_COLOR") {
            self.default_color = val;
        }

        if let Ok(val) = std::env::var("DAAG_ENGINE") {
            self.engine = val.parse()?;
        }

        if let Ok(val) = std::env::var("DAAG_FORMAT") {
            self.format = val.parse()?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `default_color` is blank.
    fn validate(&self) -> Result<()> {
        if self.default_color.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "default_color may not be blank".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, PoisonError};
    use tempfile::TempDir;

    // Environment variables are process-global; tests touching them must
    // not interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> std::sync::MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        std::env::remove_var("DAAG_DEFAULT_COLOR");
        std::env::remove_var("DAAG_ENGINE");
        std::env::remove_var("DAAG_FORMAT");
        guard
    }

    #[test]
    fn test_default_config() {
        let _guard = env_guard();
        let config = Config::default();
        assert_eq!(config.default_color, "lightgrey");
        assert_eq!(config.engine, Engine::Dot);
        assert_eq!(config.format, GraphFormat::Png);
    }

    #[test]
    fn test_config_load_missing_file() {
        let _guard = env_guard();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.default_color, "lightgrey");
        assert_eq!(config.engine, Engine::Dot);
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = env_guard();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("daag.toml");
        let content = r#"
default_color = "white"
engine = "neato"
format = "pdf"
"#;
        std::fs::write(&config_path, content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.default_color, "white");
        assert_eq!(config.engine, Engine::Neato);
        assert_eq!(config.format, GraphFormat::Pdf);
    }

    #[test]
    fn test_config_validation_blank_color() {
        let _guard = env_guard();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("daag.toml");
        std::fs::write(&config_path, "default_color = \"  \"").unwrap();

        let result = Config::load(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_config_invalid_engine_in_file() {
        let _guard = env_guard();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("daag.toml");
        std::fs::write(&config_path, "engine = \"circo\"").unwrap();

        let result = Config::load(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_config_env_override_color() {
        let _guard = env_guard();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("DAAG_DEFAULT_COLOR", "beige");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.default_color, "beige");

        std::env::remove_var("DAAG_DEFAULT_COLOR");
    }

    #[test]
    fn test_config_env_override_engine() {
        let _guard = env_guard();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("DAAG_ENGINE", "sfdp");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.engine, Engine::Sfdp);

        std::env::remove_var("DAAG_ENGINE");
    }

    #[test]
    fn test_config_env_invalid_format() {
        let _guard = env_guard();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("DAAG_FORMAT", "svg");
        let result = Config::load(temp_dir.path());
        assert!(result.is_err());

        std::env::remove_var("DAAG_FORMAT");
    }

    #[test]
    fn test_config_file_overridden_by_env() {
        let _guard = env_guard();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("daag.toml");
        std::fs::write(&config_path, "engine = \"neato\"").unwrap();

        std::env::set_var("DAAG_ENGINE", "fdp");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.engine, Engine::Fdp);

        std::env::remove_var("DAAG_ENGINE");
    }

    #[test]
    fn test_engine_round_trip() {
        for engine in [Engine::Dot, Engine::Neato, Engine::Sfdp, Engine::Fdp] {
            assert_eq!(engine.to_string().parse::<Engine>().unwrap(), engine);
        }
    }

    #[test]
    fn test_format_round_trip() {
        for format in [GraphFormat::Png, GraphFormat::Pdf] {
            assert_eq!(format.to_string().parse::<GraphFormat>().unwrap(), format);
        }
    }
}
