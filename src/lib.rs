//! Session core for the ASME image library.
//!
//! ARCHITECTURE
//! ============
//! [`SessionStore`] is the single source of truth for "who is logged in".
//! It restores the persisted [`Identity`] at startup, exposes login,
//! register and logout operations, and persists every change through an
//! injected [`IdentityStorage`]. Credential checking goes through an
//! injected [`CredentialVerifier`]; the shipped [`MockVerifier`] stands in
//! for a backend that does not exist yet, so swapping in a real one never
//! touches the session contract.
//!
//! The [`guard`] module is the read-only boundary consumed by navigation:
//! it turns a [`SessionSnapshot`] plus a route policy into an access
//! decision and the set of visible navigation links.

pub mod config;
pub mod error;
pub mod guard;
pub mod identity;
pub mod session;
pub mod storage;
pub mod verifier;

pub use config::SessionConfig;
pub use error::{AuthError, StorageError};
pub use identity::Identity;
pub use session::{SessionPhase, SessionSnapshot, SessionStore};
pub use storage::{FileStorage, IdentityStorage, MemoryStorage};
pub use verifier::{CredentialVerifier, MockVerifier};
