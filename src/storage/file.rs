//! File-backed identity storage.
//!
//! TRADE-OFFS
//! ==========
//! Writes go through a temp file, fsync and rename so a crash mid-write can
//! never leave a half-written record. A record that is malformed anyway
//! (hand-edited, truncated by an older build) is logged and treated as no
//! session; the next successful login overwrites it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

use crate::error::StorageError;
use crate::identity::Identity;
use crate::storage::IdentityStorage;

/// Default file name, matching the web client's `asme_user` storage key.
pub const DEFAULT_FILE_NAME: &str = "asme_user.json";

/// Stores the session record as one JSON file at a fixed path.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at [`DEFAULT_FILE_NAME`] inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_FILE_NAME))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait::async_trait]
impl IdentityStorage for FileStorage {
    async fn load(&self) -> Result<Option<Identity>, StorageError> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        match serde_json::from_str::<Identity>(&contents) {
            Ok(identity) => Ok(Some(identity)),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "persisted session record malformed; treating as no session"
                );
                Ok(None)
            }
        }
    }

    async fn store(&self, identity: &Identity) -> Result<(), StorageError> {
        let json = serde_json::to_string(identity)?;
        let temp_path = self.temp_path();

        {
            let mut file = fs::File::create(&temp_path).await.map_err(|e| {
                StorageError::Io {
                    path: temp_path.clone(),
                    source: e,
                }
            })?;
            file.write_all(json.as_bytes())
                .await
                .map_err(|e| StorageError::Io {
                    path: temp_path.clone(),
                    source: e,
                })?;
            file.sync_all().await.map_err(|e| StorageError::Io {
                path: temp_path.clone(),
                source: e,
            })?;
        }

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            // Best effort: don't leave the temp file behind.
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::Rename {
                from: temp_path,
                to: self.path.clone(),
                source: e,
            });
        }
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}

#[cfg(test)]
#[path = "file_test.rs"]
mod tests;
