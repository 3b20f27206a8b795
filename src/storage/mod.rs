//! Durable storage for the persisted session record.
//!
//! DESIGN
//! ======
//! One trait seam with two implementations: a local JSON file (the shipped
//! default, mirroring the web client's local-storage key) and an
//! in-memory fake for tests and embedding. The trait is async and fallible
//! so a server-backed store can implement it later without changing the
//! session contract.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StorageError;
use crate::identity::Identity;

/// Durable storage for at most one persisted [`Identity`].
#[async_trait::async_trait]
pub trait IdentityStorage: Send + Sync {
    /// Read the persisted identity, if any.
    ///
    /// A malformed record is reported as `Ok(None)`, never as an error:
    /// corrupt state must degrade to "no session" rather than block startup.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] only when the backing store itself cannot
    /// be reached or read.
    async fn load(&self) -> Result<Option<Identity>, StorageError>;

    /// Persist the identity, replacing any prior record.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the record could not be written.
    async fn store(&self, identity: &Identity) -> Result<(), StorageError>;

    /// Remove the persisted record. Removing an absent record succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if an existing record could not be removed.
    async fn clear(&self) -> Result<(), StorageError>;
}
