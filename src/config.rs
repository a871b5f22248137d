use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::adapters::wayback::{WaybackConfig, DEFAULT_ARCHIVE_BASE, DEFAULT_CDX_ENDPOINT};

pub const DEFAULT_TARGET_URL: &str = "https://openai.com/policies/privacy-policy/";
pub const DEFAULT_OUTPUT_PATH: &str = "privacy_policy_diffs.diff";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub target_url: String,
    pub output_path: PathBuf,
    pub cdx_endpoint: String,
    pub archive_base: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub filters: Vec<String>,
    pub request_timeout_secs: Option<u64>,
    pub fetch_concurrency: usize,
    pub context_lines: usize,
    pub user_agent: String,
    pub log_level: String,
}

/// Optional overrides read from the file named by `WAYDIFF_CONFIG`
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub target_url: Option<String>,
    pub output_path: Option<PathBuf>,
    pub cdx_endpoint: Option<String>,
    pub archive_base: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub filters: Option<Vec<String>>,
    pub request_timeout_secs: Option<u64>,
    pub fetch_concurrency: Option<usize>,
    pub context_lines: Option<usize>,
    pub user_agent: Option<String>,
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

impl Config {
    /// Defaults, then the optional config file, then environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| env::var(key).ok())
    }

    fn load_with(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = var("WAYDIFF_CONFIG").map(PathBuf::from) {
            let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            let file = FileConfig::parse(&content).map_err(|source| ConfigError::Toml { path, source })?;
            config.apply_file(file);
        }

        config.apply_env(var);
        Ok(config)
    }

    pub fn apply_file(&mut self, file: FileConfig) {
        if let Some(v) = file.target_url {
            self.target_url = v;
        }
        if let Some(v) = file.output_path {
            self.output_path = v;
        }
        if let Some(v) = file.cdx_endpoint {
            self.cdx_endpoint = v;
        }
        if let Some(v) = file.archive_base {
            self.archive_base = v;
        }
        if file.from.is_some() {
            self.from = file.from;
        }
        if file.to.is_some() {
            self.to = file.to;
        }
        if let Some(v) = file.filters {
            self.filters = v;
        }
        if file.request_timeout_secs.is_some() {
            self.request_timeout_secs = file.request_timeout_secs;
        }
        if let Some(v) = file.fetch_concurrency {
            self.fetch_concurrency = v.max(1);
        }
        if let Some(v) = file.context_lines {
            self.context_lines = v;
        }
        if let Some(v) = file.user_agent {
            self.user_agent = v;
        }
        if let Some(v) = file.log_level {
            self.log_level = v;
        }
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("WAYDIFF_URL") {
            self.target_url = v;
        }
        if let Some(v) = var("WAYDIFF_OUTPUT") {
            self.output_path = PathBuf::from(v);
        }
        if let Some(v) = var("WAYDIFF_CDX_ENDPOINT") {
            self.cdx_endpoint = v;
        }
        if let Some(v) = var("WAYDIFF_ARCHIVE_BASE") {
            self.archive_base = v;
        }
        if let Some(v) = var("WAYDIFF_FROM") {
            self.from = Some(v);
        }
        if let Some(v) = var("WAYDIFF_TO") {
            self.to = Some(v);
        }
        if let Some(v) = var("WAYDIFF_FILTERS") {
            self.filters = v
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(String::from)
                .collect();
        }
        self.request_timeout_secs = var("WAYDIFF_TIMEOUT")
            .and_then(|s| s.parse().ok())
            .or(self.request_timeout_secs);
        self.fetch_concurrency = var("WAYDIFF_CONCURRENCY")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(self.fetch_concurrency)
            .max(1);
        self.context_lines = var("WAYDIFF_CONTEXT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(self.context_lines);
        if let Some(v) = var("WAYDIFF_USER_AGENT") {
            self.user_agent = v;
        }
        if let Some(v) = var("WAYDIFF_LOG_LEVEL") {
            self.log_level = v;
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn wayback(&self) -> WaybackConfig {
        WaybackConfig::new(self.cdx_endpoint.clone(), self.archive_base.clone())
            .with_range(self.from.clone(), self.to.clone())
            .with_filters(self.filters.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            cdx_endpoint: DEFAULT_CDX_ENDPOINT.to_string(),
            archive_base: DEFAULT_ARCHIVE_BASE.to_string(),
            from: None,
            to: None,
            filters: Vec::new(),
            request_timeout_secs: None,
            fetch_concurrency: 1,
            context_lines: 3,
            user_agent: format!("waydiff/{}", env!("CARGO_PKG_VERSION")),
            log_level: "info".to_string(),
        }
    }
}
