use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::descriptor::DEFAULT_DESCRIPTOR_PATH;
use crate::error::{AppVersionerError, Result};
use crate::scss::{
    BUILD_PATH_END_MARKER, BUILD_PATH_START_MARKER, BUILD_PATH_VARIABLE, ENVIRONMENT_END_MARKER,
    ENVIRONMENT_START_MARKER, ENVIRONMENT_VARIABLE,
};

/// Configuration file name looked up in the working directory and user config dir.
pub const CONFIG_FILE_NAME: &str = "appversioner.toml";

/// Represents the complete configuration for app-versioner.
///
/// Contains the descriptor location, build base paths, and stylesheet region settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_descriptor")]
    pub descriptor: PathBuf,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub scss: ScssConfig,
}

fn default_descriptor() -> PathBuf {
    PathBuf::from(DEFAULT_DESCRIPTOR_PATH)
}

fn default_dev_path() -> String {
    "/dist/".to_string()
}

fn default_prod_path() -> String {
    "/production-location/".to_string()
}

/// Base paths for each environment and the initial environment.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BuildConfig {
    #[serde(default = "default_dev_path")]
    pub dev_path: String,

    #[serde(default = "default_prod_path")]
    pub prod_path: String,

    #[serde(default)]
    pub production: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            dev_path: default_dev_path(),
            prod_path: default_prod_path(),
            production: false,
        }
    }
}

/// Variable name and markers for one stylesheet region.
///
/// Missing keys fall back to the defaults of the region the table configures.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct RegionConfig {
    pub variable: Option<String>,
    pub start_marker: Option<String>,
    pub end_marker: Option<String>,
}

impl RegionConfig {
    fn resolve(&self, variable: &str, start: &str, end: &str) -> ResolvedRegion {
        ResolvedRegion {
            variable: self.variable.clone().unwrap_or_else(|| variable.to_string()),
            start_marker: self.start_marker.clone().unwrap_or_else(|| start.to_string()),
            end_marker: self.end_marker.clone().unwrap_or_else(|| end.to_string()),
        }
    }
}

/// A region config with every default filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRegion {
    pub variable: String,
    pub start_marker: String,
    pub end_marker: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ScssConfig {
    #[serde(default)]
    pub build_path: RegionConfig,

    #[serde(default)]
    pub environment: RegionConfig,
}

impl ScssConfig {
    pub fn build_path_region(&self) -> ResolvedRegion {
        self.build_path.resolve(
            BUILD_PATH_VARIABLE,
            BUILD_PATH_START_MARKER,
            BUILD_PATH_END_MARKER,
        )
    }

    pub fn environment_region(&self) -> ResolvedRegion {
        self.environment.resolve(
            ENVIRONMENT_VARIABLE,
            ENVIRONMENT_START_MARKER,
            ENVIRONMENT_END_MARKER,
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            descriptor: default_descriptor(),
            build: BuildConfig::default(),
            scss: ScssConfig::default(),
        }
    }
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| AppVersionerError::from_io(path, e))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `appversioner.toml` in current directory
/// 3. `appversioner.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or a custom path is missing
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let config_str = if let Some(path) = config_path {
        read_config(path)?
    } else if local.exists() {
        read_config(&local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(CONFIG_FILE_NAME);
        if user_path.exists() {
            read_config(&user_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| AppVersionerError::config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_region_override() {
        let config = parse_config(
            r#"
[scss.environment]
variable = "$env"
"#,
        )
        .unwrap();

        let region = config.scss.environment_region();
        assert_eq!(region.variable, "$env");
        assert_eq!(region.start_marker, ENVIRONMENT_START_MARKER);
        assert_eq!(region.end_marker, ENVIRONMENT_END_MARKER);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = parse_config("build = [").unwrap_err();
        assert!(matches!(err, AppVersionerError::Config(_)));
    }
}
