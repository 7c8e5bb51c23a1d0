//! Connection parameter persistence.
//!
//! The last-used parameters live in a TOML file under the user's config
//! directory. Loading never fails: a missing or malformed file yields the
//! zero-value defaults so the app always starts with a usable form.

use super::Result;
use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Everything needed to reach one table: server address, API token,
/// table id, and an optional saved view (0 means none).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ConnectionParams {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub table: u64,
    #[serde(default)]
    pub view: u64,
}

impl ConnectionParams {
    /// The view id to send, or None when the view is unset.
    pub fn view_opt(&self) -> Option<u64> {
        if self.view == 0 { None } else { Some(self.view) }
    }
}

/// Persistence seam for connection parameters, swappable in tests.
pub trait ParamsStore {
    /// Load the stored parameters, falling back to defaults on any problem.
    fn load(&self) -> ConnectionParams;

    /// Persist parameters. Called once per successful fetch.
    fn save(&self, params: &ConnectionParams) -> Result<()>;
}

/// TOML-file-backed store at `~/.config/bsr-tui/config.toml` unless a path
/// override is given.
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    path: Option<PathBuf>,
}

impl FileStore {
    pub fn new(path: Option<PathBuf>) -> Self {
        FileStore { path }
    }

    fn config_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(home_dir.join(".config").join("bsr-tui").join("config.toml"))
    }
}

impl ParamsStore for FileStore {
    fn load(&self) -> ConnectionParams {
        let path = match self.config_path() {
            Ok(p) => p,
            Err(_) => return ConnectionParams::default(),
        };
        if !path.exists() {
            return ConnectionParams::default();
        }

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("could not read {}: {e}", path.display());
                return ConnectionParams::default();
            }
        };

        match toml::from_str(&content) {
            Ok(params) => params,
            Err(e) => {
                log::warn!("malformed config at {}: {e}", path.display());
                ConnectionParams::default()
            }
        }
    }

    fn save(&self, params: &ConnectionParams) -> Result<()> {
        let path = self.config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let content = toml::to_string(params).map_err(|e| StorageError::ConfigSerialize {
            message: e.to_string(),
        })?;

        fs::write(&path, content).map_err(|source| StorageError::FileIo {
            path: path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }
}
