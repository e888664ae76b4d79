// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

use crate::config::selectors::SelectorField;

/// A required top-level selector matched nothing. Fatal for one run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("No elements found with the selector: {0}")]
    StructureNotFound(SelectorField),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("Game {0} does not have exactly one away and one home line")]
    IncompleteGame(usize),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Giving up on {url} after {attempts} attempts: {last}")]
    Exhausted {
        attempts: u32,
        url: String,
        last: String,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Malformed config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("No source: set \"url\" in the config or pass --url / --input")]
    NoSource,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("Path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Could not read input {}: {source}", path.display())]
    Input { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
