//! File-backed snapshot storage.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::GameState;
use game_core::snapshot;

use super::error::Result;

/// Storage for a single game snapshot.
pub trait SnapshotRepository: Send + Sync {
    fn save(&self, state: &GameState) -> Result<()>;

    /// Loads the stored snapshot. `Ok(None)` when nothing was saved yet.
    fn load(&self) -> Result<Option<GameState>>;
}

/// Stores one snapshot at a fixed path using the engine's envelope format.
pub struct FileSnapshotRepository {
    path: PathBuf,
}

impl FileSnapshotRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotRepository for FileSnapshotRepository {
    fn save(&self, state: &GameState) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let bytes = snapshot::serialize(state)?;
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved state[{}] to {}", state.nonce, self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Option<GameState>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path)?;
        let state = snapshot::try_deserialize(&bytes)?;

        tracing::debug!("Loaded state[{}] from {}", state.nonce, self.path.display());
        Ok(Some(state))
    }
}
