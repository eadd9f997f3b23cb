use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Category, EventItem, default_categories};

/// Fixed storage key. The `.v1` suffix is the only migration mechanism:
/// changing it orphans (and thereby discards) older blobs.
pub const STORAGE_KEY: &str = "chronowheel.state.v1";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access state file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode state blob: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The entire application state, serialized as one blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub categories: Vec<Category>,
    pub events: Vec<EventItem>,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            events: Vec::new(),
        }
    }
}

pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn at_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chronowheel")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted state. An absent or structurally invalid
    /// blob is treated as "no prior state" and yields the defaults.
    pub fn load(&self) -> PersistedState {
        match self.try_load() {
            Ok(state) => state,
            Err(StoreError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                PersistedState::default()
            }
            Err(e) => {
                tracing::warn!("Discarding unreadable state blob: {}", e);
                PersistedState::default()
            }
        }
    }

    /// Writes the whole state. Failures are logged and swallowed; the
    /// in-memory state stays authoritative for the rest of the session.
    pub fn save(&self, state: &PersistedState) {
        if let Err(e) = self.try_save(state) {
            tracing::warn!("Failed to persist state: {}", e);
        }
    }

    fn try_load(&self) -> Result<PersistedState, StoreError> {
        let blob = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&blob)?)
    }

    fn try_save(&self, state: &PersistedState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let blob = serde_json::to_string(state)?;
        std::fs::write(&self.path, blob)?;
        Ok(())
    }
}
