//! # Context Initialization
//!
//! Builds everything a UI client needs to run commands: the data directory,
//! the merged configuration, and an API over the file store.
//!
//! ## Data Directory
//!
//! 1. `ROLO_DATA` environment variable, if set (mostly for tests).
//! 2. The OS-appropriate data directory from the `directories` crate.
//!
//! ## Data File
//!
//! 1. Explicit override (the CLI's `--data` flag).
//! 2. `data_file` from `rolo.toml` / `ROLO__DATA_FILE`.
//! 3. `addressbook.json` inside the data directory.

use crate::api::RoloApi;
use crate::config::RoloConfig;
use crate::error::{Result, RoloError};
use crate::store::fs::FileStore;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct RoloContext {
    pub api: RoloApi<FileStore>,
    pub config: RoloConfig,
}

/// Resolve the data directory (see module docs).
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("ROLO_DATA") {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "rolo", "rolo")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RoloError::Store("Could not determine data directory".to_string()))
}

/// Load `rolo.toml` from `data_dir`, merged with environment overrides.
/// Falls back to defaults when nothing can be loaded.
pub fn load_config(data_dir: &Path) -> RoloConfig {
    Clapfig::builder()
        .app_name("rolo")
        .file_name("rolo.toml")
        .search_paths(vec![SearchPath::Path(data_dir.to_path_buf())])
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_default()
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<RoloContext> {
    initialize_in(&data_dir()?, data_override)
}

pub fn initialize_in(data_dir: &Path, data_override: Option<PathBuf>) -> Result<RoloContext> {
    let config = load_config(data_dir);
    let data_file = data_override.unwrap_or_else(|| config.data_file(data_dir));
    debug!(data_dir = %data_dir.display(), data_file = %data_file.display(), "initializing");

    let store = FileStore::open(data_file)?;
    Ok(RoloContext {
        api: RoloApi::new(store),
        config,
    })
}
