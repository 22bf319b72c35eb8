use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sources: SourcesConfig,
    pub canvas: CanvasConfig,
    pub logging: LoggingConfig,
}

/// Simulated latency of each mocked source, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub twitter_delay_ms: u64,
    pub youtube_delay_ms: u64,
    pub web_delay_ms: u64,
    pub ai_delay_ms: u64,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            twitter_delay_ms: 500,
            youtube_delay_ms: 600,
            web_delay_ms: 400,
            ai_delay_ms: 1000,
        }
    }
}

impl SourcesConfig {
    /// No latency at all. Used by tests.
    pub fn instant() -> Self {
        Self {
            twitter_delay_ms: 0,
            youtube_delay_ms: 0,
            web_delay_ms: 0,
            ai_delay_ms: 0,
        }
    }

    pub fn twitter_delay(&self) -> Duration {
        Duration::from_millis(self.twitter_delay_ms)
    }

    pub fn youtube_delay(&self) -> Duration {
        Duration::from_millis(self.youtube_delay_ms)
    }

    pub fn web_delay(&self) -> Duration {
        Duration::from_millis(self.web_delay_ms)
    }

    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}

/// Bounds for the random placement of new blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub origin_x: f64,
    pub origin_y: f64,
    pub spread_x: f64,
    pub spread_y: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            origin_x: 50.0,
            origin_y: 50.0,
            spread_x: 400.0,
            spread_y: 300.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Loads the config from `path` if given, otherwise from the default
    /// location. A missing default file yields the built-in defaults; a
    /// missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("thoughtspace").join("config.toml"))
}

pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("thoughtspace").join("thoughtspace.log"))
}
