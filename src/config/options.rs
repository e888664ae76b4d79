// src/config/options.rs
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;

use super::consts::*;
use super::selectors::SelectorConfig;
use crate::error::ConfigError;
use crate::table::IncompletePolicy;

/// On-disk `config.json`.
#[derive(Clone, Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub url: Option<String>,
    pub selectors: SelectorConfig,
    #[serde(default)]
    pub fetch: FetchOptions,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub strict: bool,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchOptions {
    pub user_agent: String,
    pub timeout_secs: u64,
    pub retries: u32,
    pub backoff_ms: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: s!(USER_AGENT),
            timeout_secs: TIMEOUT_SECS,
            retries: FETCH_RETRIES,
            backoff_ms: BACKOFF_MS,
        }
    }
}

impl FetchOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Linear backoff: `backoff_ms * attempt`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        Duration::from_millis(self.backoff_ms.saturating_mul(u64::from(attempt)))
    }
}

/// Where the HTML comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// User-supplied path; `None` means `lines.<ext>` in the working dir.
    pub out: Option<PathBuf>,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out: None,
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn default_filename(&self) -> String {
        join!(DEFAULT_FILE, ".", self.format.ext())
    }
}

#[derive(Clone, Debug)]
pub struct AppOptions {
    pub source: Source,
    pub selectors: SelectorConfig,
    pub fetch: FetchOptions,
    pub export: ExportOptions,
    pub policy: IncompletePolicy,
}

impl AppOptions {
    /// Build run options from a config file. `input` wins over the file's `url`.
    pub fn from_config(cfg: FileConfig, input: Option<PathBuf>) -> Result<Self, ConfigError> {
        let source = match (input, cfg.url) {
            (Some(path), _) => Source::File(path),
            (None, Some(url)) if !url.trim().is_empty() => Source::Url(url),
            _ => return Err(ConfigError::NoSource),
        };
        let policy = if cfg.strict { IncompletePolicy::Abort } else { IncompletePolicy::Drop };
        Ok(Self {
            source,
            selectors: cfg.selectors,
            fetch: cfg.fetch,
            export: ExportOptions { out: cfg.output, ..ExportOptions::default() },
            policy,
        })
    }
}
