//! Startup configuration.
//!
//! Read once before anything else runs: an optional RON file, then the
//! environment. The resolved backend address is handed to the engine; nothing
//! reads the environment after this.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use docchat_engine::BackendSettings;
use log::LevelFilter;
use serde::Deserialize;

use super::logging::LogDestination;

pub const CONFIG_PATH_ENV: &str = "DOCCHAT_CONFIG";
pub const BACKEND_URL_ENV: &str = "DOCCHAT_BACKEND_URL";
pub const DEFAULT_CONFIG_FILE: &str = "docchat.ron";
/// Where requests go when no backend URL is configured.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct FileConfig {
    backend_url: Option<String>,
    origin: Option<String>,
    log_destination: Option<LogDestination>,
    verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend: BackendSettings,
    pub log_destination: LogDestination,
    pub verbose: bool,
    /// The file that was read, if one existed.
    pub source_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_process_env() -> Result<Self> {
        Self::load(|key| std::env::var(key).ok())
    }

    /// Resolves configuration using `env` for variable lookups.
    pub fn load(env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let path = env(CONFIG_PATH_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let file = read_file_config(&path)?;
        let source_file = file.as_ref().map(|_| path.clone());
        let file = file.unwrap_or_default();

        let backend_url = env(BACKEND_URL_ENV)
            .or(file.backend_url)
            .map(|url| url.trim().to_string())
            .unwrap_or_default();
        let base_url = if backend_url.is_empty() {
            file.origin
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .unwrap_or_else(|| DEFAULT_ORIGIN.to_string())
        } else {
            backend_url
        };

        Ok(Self {
            backend: BackendSettings::new(base_url),
            log_destination: file.log_destination.unwrap_or_default(),
            verbose: file.verbose,
            source_file,
        })
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

/// `Ok(None)` when the file does not exist; malformed files are errors.
fn read_file_config(path: &Path) -> Result<Option<FileConfig>> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(anyhow::Error::new(err)
                .context(format!("reading config file {}", path.display())))
        }
    };
    let config = ron::from_str(&content)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    Ok(Some(config))
}
