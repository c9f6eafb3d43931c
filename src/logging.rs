//! File-backed `tracing` setup.
//!
//! The alternate screen owns stdout, so every log line goes to a file.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

const LOG_FILE_NAME: &str = "state-hoisting.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open log file '{path}': {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid log filter '{directive}': {source}")]
    Filter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to install log subscriber: {0}")]
    Install(String),
}

/// `<cache dir>/state-hoisting/state-hoisting.log`, or the current directory
/// when the platform has no cache dir.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("state-hoisting")
        .join(LOG_FILE_NAME)
}

/// `RUST_LOG` when set, otherwise the configured directive. A malformed
/// `RUST_LOG` is an error rather than a silent fallback.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(from_env.as_deref(), config)
}

fn filter_from(env: Option<&str>, config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    let directive = env
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(config.level.as_str());
    EnvFilter::try_new(directive).map_err(|source| LoggingError::Filter {
        directive: directive.to_string(),
        source,
    })
}

/// Installs the global subscriber. Returns the log file path.
pub fn init(config: &LoggingConfig) -> Result<PathBuf, LoggingError> {
    let path = config.file.clone().unwrap_or_else(default_log_path);
    let filter = build_filter(config)?;
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_thread_names(true)
        .try_init()
        .map_err(|err| LoggingError::Install(err.to_string()))?;

    Ok(path)
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| LoggingError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenFile {
            path: path.to_path_buf(),
            source,
        })
}
