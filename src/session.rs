//! Session store — single source of truth for the authenticated identity.
//!
//! DESIGN
//! ======
//! One store per running client. The handle is cheap to clone: all state
//! lives behind an `Arc<RwLock<..>>`, and the verifier and storage are
//! injected as trait objects so tests and future backends swap in without
//! touching consumers.
//!
//! TRADE-OFFS
//! ==========
//! Overlapping login/register calls are not serialized: the verifier
//! round-trip runs outside the state lock, so two racing calls resolve
//! last-writer-wins for both the in-memory identity and the persisted
//! record. In-flight calls cannot be cancelled. Both match the web
//! client's behavior.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::config::SessionConfig;
use crate::error::AuthError;
use crate::identity::Identity;
use crate::storage::{FileStorage, IdentityStorage};
use crate::verifier::{CredentialVerifier, MockVerifier};

const MIN_PASSWORD_CHARS: usize = 6;

// =============================================================================
// PHASE + SNAPSHOT
// =============================================================================

/// Session lifecycle phase.
///
/// `Loading` is entered exactly once, at construction, and exited exactly
/// once by the first [`SessionStore::load`] pass; it is never re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Unauthenticated,
    Authenticated,
}

/// Point-in-time view of the session, handed to read-only consumers such
/// as the route guard.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    /// The current identity, if any.
    pub identity: Option<Identity>,
    /// True only before the initial restore pass completes.
    pub loading: bool,
}

impl SessionSnapshot {
    /// Derived, never stored: authenticated is exactly "an identity exists".
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Loading
        } else if self.identity.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }
}

// =============================================================================
// STORE
// =============================================================================

struct SessionState {
    identity: Option<Identity>,
    loading: bool,
}

/// Owns the current authenticated identity and its persistence.
#[derive(Clone)]
pub struct SessionStore {
    verifier: Arc<dyn CredentialVerifier>,
    storage: Arc<dyn IdentityStorage>,
    state: Arc<RwLock<SessionState>>,
}

impl SessionStore {
    /// A store with explicit verifier and storage. Starts in
    /// [`SessionPhase::Loading`]; call [`Self::load`] once at startup.
    #[must_use]
    pub fn new(verifier: Arc<dyn CredentialVerifier>, storage: Arc<dyn IdentityStorage>) -> Self {
        Self {
            verifier,
            storage,
            state: Arc::new(RwLock::new(SessionState {
                identity: None,
                loading: true,
            })),
        }
    }

    /// The default wiring: file-backed storage and the mock verifier.
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(
            Arc::new(MockVerifier::new(config.verify_delay)),
            Arc::new(FileStorage::in_dir(&config.data_dir)),
        )
    }

    /// Startup restore pass.
    ///
    /// A well-formed persisted identity becomes current; an absent or
    /// malformed record leaves the session empty. Storage failures are
    /// logged and degrade to no session: the store always comes up.
    pub async fn load(&self) {
        let restored = match self.storage.load().await {
            Ok(identity) => identity,
            Err(e) => {
                warn!(error = %e, "session restore failed; starting unauthenticated");
                None
            }
        };

        let mut state = self.state.write().await;
        if let Some(identity) = &restored {
            info!(email = %identity.email, "session restored");
        }
        state.identity = restored;
        state.loading = false;
    }

    /// Authenticate with an email and password.
    ///
    /// # Errors
    ///
    /// [`AuthError::Validation`] if either field is empty (checked before
    /// the verifier runs, with no session or storage mutation), or a
    /// transient error if verification or persistence fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::Validation(
                "email and password are required".to_owned(),
            ));
        }

        let identity = self.verifier.verify_login(email, password).await?;
        self.persist_and_set(identity).await
    }

    /// Create an account and authenticate as it.
    ///
    /// # Errors
    ///
    /// [`AuthError::Validation`] if any field is empty or the password is
    /// shorter than six characters (checks short-circuit in that order), or
    /// a transient error if verification or persistence fails.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::Validation("all fields are required".to_owned()));
        }
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(AuthError::Validation(
                "password must be at least 6 characters".to_owned(),
            ));
        }

        let identity = self
            .verifier
            .verify_registration(name, email, password)
            .await?;
        self.persist_and_set(identity).await
    }

    // Persist before exposing: any identity a consumer can observe has
    // already survived a write, so a restart re-derives the same session.
    async fn persist_and_set(&self, identity: Identity) -> Result<Identity, AuthError> {
        self.storage.store(&identity).await?;

        let mut state = self.state.write().await;
        state.identity = Some(identity.clone());
        info!(email = %identity.email, is_admin = identity.is_admin, "session established");
        Ok(identity)
    }

    /// End the session. Infallible and idempotent: the in-memory identity
    /// is always cleared, and a failure to remove the persisted record is
    /// logged rather than surfaced.
    pub async fn logout(&self) {
        {
            let mut state = self.state.write().await;
            state.identity = None;
        }
        if let Err(e) = self.storage.clear().await {
            warn!(error = %e, "failed to clear persisted session record");
        }
        info!("session cleared");
    }

    pub async fn current_identity(&self) -> Option<Identity> {
        self.state.read().await.identity.clone()
    }

    /// Exactly `current_identity().is_some()`; never independently settable.
    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.identity.is_some()
    }

    /// True only before the first [`Self::load`] pass completes.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn phase(&self) -> SessionPhase {
        self.snapshot().await.phase()
    }

    /// Consistent point-in-time view for read-only consumers.
    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().await;
        SessionSnapshot {
            identity: state.identity.clone(),
            loading: state.loading,
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
