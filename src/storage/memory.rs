//! In-memory identity storage for tests and embedding.
//!
//! Keeps the record as the raw serialized string so tests can seed corrupt
//! state and assert on exactly what would have hit disk. `set_failing`
//! makes every operation report the backend as unavailable, standing in
//! for a remote store that is down.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::warn;

use crate::error::StorageError;
use crate::identity::Identity;
use crate::storage::IdentityStorage;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    record: Mutex<Option<String>>,
    failing: AtomicBool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a persisted identity.
    #[must_use]
    pub fn with_identity(identity: &Identity) -> Self {
        let json = serde_json::to_string(identity).expect("identity serializes");
        Self::with_raw(json)
    }

    /// Storage pre-seeded with an arbitrary raw record, e.g. corrupt JSON.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            record: Mutex::new(Some(raw.into())),
            failing: AtomicBool::new(false),
        }
    }

    /// Make every subsequent operation fail as `Unavailable`.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// The raw persisted record, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.record
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(
                "memory storage marked failing".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl IdentityStorage for MemoryStorage {
    async fn load(&self) -> Result<Option<Identity>, StorageError> {
        self.check_available()?;
        let record = self.raw();
        let Some(raw) = record else {
            return Ok(None);
        };
        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => Ok(Some(identity)),
            Err(e) => {
                warn!(error = %e, "in-memory session record malformed; treating as no session");
                Ok(None)
            }
        }
    }

    async fn store(&self, identity: &Identity) -> Result<(), StorageError> {
        self.check_available()?;
        let json = serde_json::to_string(identity)?;
        *self
            .record
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(json);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.check_available()?;
        *self
            .record
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
