// SPDX-FileCopyrightText: 2026 Guidepost Contributors
// SPDX-License-Identifier: MIT

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Engine-owned cursor file name inside the state directory.
pub const CURSOR_FILENAME: &str = "guidepost-tour.step.json";

/// File-backed store for the persisted step cursor.
///
/// Reads are total: a missing or corrupt cursor recovers to step 0 and is
/// logged, never surfaced. Writes are atomic (temp file + rename) so a crash
/// mid-save cannot corrupt an existing cursor.
#[derive(Debug, Clone)]
pub struct CursorStore {
    state_dir: PathBuf,
}

impl CursorStore {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self { state_dir: state_dir.into() }
    }

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    fn cursor_path(&self) -> PathBuf {
        self.state_dir.join(CURSOR_FILENAME)
    }

    /// Loads the persisted cursor, defaulting to 0 on absence or corruption.
    pub fn load(&self) -> usize {
        let path = self.cursor_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return 0,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "cursor unreadable; starting at 0");
                return 0;
            }
        };

        match serde_json::from_str::<usize>(&raw) {
            Ok(index) => index,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "cursor corrupt; starting at 0");
                0
            }
        }
    }

    /// Persists `index` atomically.
    pub fn save(&self, index: usize) -> Result<(), StoreError> {
        fs::create_dir_all(&self.state_dir).map_err(|source| StoreError::Io {
            path: self.state_dir.clone(),
            source,
        })?;

        let path = self.cursor_path();
        let payload = serde_json::to_string(&index).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, payload.as_bytes()).map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &path).map_err(|source| StoreError::Io { path, source })?;
        Ok(())
    }

    /// Removes any persisted cursor. Missing files are fine.
    pub fn clear(&self) -> Result<(), StoreError> {
        let path = self.cursor_path();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}
