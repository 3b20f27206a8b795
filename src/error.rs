//! Error taxonomy for session operations and durable storage.
//!
//! Validation failures are part of the session contract and always come
//! back as structured [`AuthError::Validation`] values, never panics.
//! Anything transient is a candidate for retry/backoff at the call site;
//! validation failures never are.

use std::path::PathBuf;

/// Errors surfaced by [`crate::SessionStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Expected input problem. The message is suitable for direct display.
    #[error("{0}")]
    Validation(String),

    /// The credential verifier failed for a non-validation reason.
    #[error("credential verification failed: {0}")]
    Verifier(String),

    /// Durable storage failed while persisting the identity.
    #[error("session storage failed: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Whether this is an expected input problem.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether a retry could plausibly succeed. Never true for validation
    /// failures.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Verifier(_) | Self::Storage(_))
    }
}

/// Errors produced by [`crate::IdentityStorage`] implementations.
///
/// A malformed persisted record is not an error: implementations report it
/// as "no session" so a corrupt file can never prevent startup.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the backing store failed.
    #[error("storage I/O failed at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The identity could not be serialized for persistence.
    #[error("identity serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The atomic replace of the persisted record failed.
    #[error("atomic rename failed from {} to {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The storage backend is unreachable or refused the operation.
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
