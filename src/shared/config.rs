use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::dirs;

/// Value of the `supportive` setting that turns the banner on.
const SUPPORTIVE_ENABLED: &str = "enabled";

pub const SUPPORTIVE_MESSAGE: &str = "hey. you're doing great. take a break if you need to.";

/// Settings read from the GitHub CLI's `config.yml`.
///
/// The file belongs to `gh`, so keys this tool does not know are ignored.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Set with `gh config set supportive enabled`.
    #[serde(default)]
    pub supportive: Option<String>,
}

impl Config {
    /// Whether the encouragement banner should be printed before a command runs.
    pub fn is_supportive(&self) -> bool {
        self.supportive.as_deref() == Some(SUPPORTIVE_ENABLED)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file (permission error, etc.)
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parse error
    #[error("Invalid config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Load configuration from the GitHub CLI config directory.
/// Returns Config::default() if no config file exists.
pub fn load_config() -> anyhow::Result<Config> {
    let Some(dir) = dirs::gh_config_dir() else {
        return Ok(Config::default());
    };
    load_config_from_dir(&dir)
}

/// Load `config.yml` from a specific directory.
/// Returns Config::default() if the file does not exist.
pub fn load_config_from_dir(dir: &Path) -> anyhow::Result<Config> {
    let path = dir.join("config.yml");
    match std::fs::read_to_string(&path) {
        Ok(content) => parse_config(&content, &path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(ConfigError::ReadError { path, source: e }.into()),
    }
}

/// Parse YAML content into Config. An empty file yields the defaults.
fn parse_config(content: &str, path: &Path) -> anyhow::Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(content)
        .map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
        .map_err(Into::into)
}
