use crate::error::{GitTagError, Result};
use crate::ui::DisplayOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "gittag.toml";

/// Represents the complete configuration for gittag.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Remote to read tags from and push to
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default)]
    pub channels: ChannelsConfig,

    #[serde(default)]
    pub display: DisplayOptions,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_include_stale() -> bool {
    true
}

/// Configuration for prerelease channel ranking.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChannelsConfig {
    /// Offer channels whose newest prerelease predates the latest release
    #[serde(default = "default_include_stale")]
    pub include_stale: bool,
}

impl Default for ChannelsConfig {
    fn default() -> Self {
        ChannelsConfig {
            include_stale: default_include_stale(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            channels: ChannelsConfig::default(),
            display: DisplayOptions::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gittag.toml` in current directory
/// 3. `gittag.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => PathBuf::from(path),
        None => match find_config_file() {
            Some(path) => path,
            None => return Ok(Config::default()),
        },
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        GitTagError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;
    parse_config(&config_str)
        .map_err(|e| GitTagError::config(format!("Invalid '{}': {}", path.display(), e)))
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(content)
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join(CONFIG_FILE_NAME);
    user.exists().then_some(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.remote, "origin");
        assert!(config.channels.include_stale);
        assert!(config.display.color);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_document() {
        let config = parse_config(
            r#"
remote = "upstream"

[channels]
include_stale = false
"#,
        )
        .unwrap();
        assert_eq!(config.remote, "upstream");
        assert!(!config.channels.include_stale);
        assert_eq!(config.display, DisplayOptions::default());
    }

    #[test]
    fn test_invalid_document() {
        assert!(parse_config("remote = [").is_err());
        assert!(parse_config("remote = 3").is_err());
    }
}
