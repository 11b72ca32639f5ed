use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use feed_engine::{
    EmptyFeedPolicy, HttpSettings, HttpVideoSource, JsonFileVideoSource, LoaderSettings,
    StaticVideoSource, VideoSource,
};
use feed_logging::LogDestination;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) const CONFIG_FILENAME: &str = "feed_config.ron";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum SourceConfig {
    Embedded,
    File(PathBuf),
    Http(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub latency_ms: u64,
    pub source: SourceConfig,
    pub empty_feed: EmptyFeedPolicy,
    pub log: LogDestination,
    pub log_file: PathBuf,
    pub http_timeout_ms: u64,
    pub max_body_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            latency_ms: 1000,
            source: SourceConfig::Embedded,
            empty_feed: EmptyFeedPolicy::Fail,
            log: LogDestination::File,
            log_file: PathBuf::from("./feed.log"),
            http_timeout_ms: 10_000,
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl AppConfig {
    pub(crate) fn loader_settings(&self) -> LoaderSettings {
        LoaderSettings {
            latency: Duration::from_millis(self.latency_ms),
            empty_feed: self.empty_feed,
        }
    }

    pub(crate) fn build_source(&self) -> anyhow::Result<Arc<dyn VideoSource>> {
        let source: Arc<dyn VideoSource> = match &self.source {
            SourceConfig::Embedded => Arc::new(StaticVideoSource::embedded()?),
            SourceConfig::File(path) => Arc::new(JsonFileVideoSource::new(path.clone())),
            SourceConfig::Http(url) => {
                let settings = HttpSettings {
                    request_timeout: Duration::from_millis(self.http_timeout_ms),
                    max_bytes: self.max_body_bytes,
                    ..HttpSettings::default()
                };
                Arc::new(HttpVideoSource::new(url.clone(), settings))
            }
        };
        Ok(source)
    }
}

/// Reads the config file. A missing file yields the defaults.
pub(crate) fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Like `load_config`, but falls back to defaults and hands back the error for logging
/// once the logger is up.
pub(crate) fn load_or_default(path: &Path) -> (AppConfig, Option<ConfigError>) {
    match load_config(path) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    }
}
