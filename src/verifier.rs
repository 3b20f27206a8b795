//! Credential verification seam and the mock stand-in backend.
//!
//! DESIGN
//! ======
//! The session store validates inputs and owns persistence; the verifier
//! owns credential checking and identity synthesis. The mock reproduces
//! the web client's stand-in backend: a fixed delay followed by
//! unconditional success. A real backend implements the same trait and
//! returns [`AuthError::Verifier`] for rejections, so swapping it in never
//! changes the session contract.

use std::time::Duration;

use crate::error::AuthError;
use crate::identity::{self, Identity};

/// Delay used by the web client's simulated API calls.
pub const DEFAULT_VERIFY_DELAY: Duration = Duration::from_millis(1000);

/// Asynchronous credential verification. Inputs arrive pre-validated by
/// the session store (non-empty fields, minimum password length).
#[async_trait::async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Check login credentials and return the account's identity.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Verifier`] when the backend rejects the
    /// credentials or cannot be reached.
    async fn verify_login(&self, email: &str, password: &str) -> Result<Identity, AuthError>;

    /// Create an account and return its identity.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Verifier`] when the backend refuses the
    /// registration or cannot be reached.
    async fn verify_registration(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError>;
}

/// Stand-in verifier: waits a fixed delay, then synthesizes an identity.
///
/// Admin status on login is granted to any email containing `admin`. That
/// is a development placeholder, not an authorization model; it lives only
/// in this mock so that a real verifier replaces the policy along with the
/// credential check.
#[derive(Debug, Clone)]
pub struct MockVerifier {
    delay: Duration,
}

impl MockVerifier {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// A mock with no simulated latency, for tests.
    #[must_use]
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for MockVerifier {
    fn default() -> Self {
        Self::new(DEFAULT_VERIFY_DELAY)
    }
}

#[async_trait::async_trait]
impl CredentialVerifier for MockVerifier {
    async fn verify_login(&self, email: &str, _password: &str) -> Result<Identity, AuthError> {
        tokio::time::sleep(self.delay).await;
        Ok(Identity {
            id: identity::generate_account_id(),
            name: identity::name_from_email(email),
            email: email.to_owned(),
            is_admin: email.contains("admin"),
        })
    }

    async fn verify_registration(
        &self,
        name: &str,
        email: &str,
        _password: &str,
    ) -> Result<Identity, AuthError> {
        tokio::time::sleep(self.delay).await;
        Ok(Identity {
            id: identity::generate_account_id(),
            name: name.to_owned(),
            email: email.to_owned(),
            is_admin: false,
        })
    }
}

#[cfg(test)]
#[path = "verifier_test.rs"]
mod tests;
