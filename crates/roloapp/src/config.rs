//! # Configuration
//!
//! Rolo configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and programmatic overrides.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `ROLO__DATA_FILE`, `ROLO__SHOW_PRIVATE`.
//! 2. **Config file**: `rolo.toml` in the data directory.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `<data dir>/addressbook.json` | Where records are stored |
//! | `show_private` | `false` | Show private fields in `list` and `find` |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "addressbook.json";

/// Configuration for rolo, stored in `rolo.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RoloConfig {
    /// Path of the JSON file holding the records.
    /// When absent, `addressbook.json` in the data directory is used.
    pub data_file: Option<PathBuf>,

    /// Show private contact fields when listing.
    #[config(default = false)]
    pub show_private: bool,
}

impl Default for RoloConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            show_private: false,
        }
    }
}

impl RoloConfig {
    /// Resolve the data file, relative paths being taken from `data_dir`.
    pub fn data_file(&self, data_dir: &Path) -> PathBuf {
        match &self.data_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => data_dir.join(path),
            None => data_dir.join(DEFAULT_DATA_FILE),
        }
    }
}
