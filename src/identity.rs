//! Identity — the authenticated principal and its persisted layout.

use rand::Rng;
use serde::{Deserialize, Serialize};

const ID_PREFIX: &str = "user-";
const ID_SUFFIX_LEN: usize = 9;
const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// The authenticated principal, exactly as persisted to durable storage.
///
/// The serde layout is the wire format: one JSON object with the keys
/// `id`, `name`, `email` and `isAdmin`. There is no schema version field,
/// so any change here is a breaking change to the persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque account id, generated once at account creation and immutable
    /// afterwards.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unique external identifier for the account.
    pub email: String,
    /// Admin flag. Assigned by the credential verifier, never derived here.
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

/// Generate a fresh opaque account id: `user-` plus nine random base-36
/// characters.
#[must_use]
pub fn generate_account_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| {
            let idx = rng.random_range(0..ID_ALPHABET.len());
            ID_ALPHABET[idx] as char
        })
        .collect();
    format!("{ID_PREFIX}{suffix}")
}

/// Derive a display name from the local part of an email address.
///
/// Falls back to `"user"` when the local part is empty.
#[must_use]
pub fn name_from_email(email: &str) -> String {
    email
        .split('@')
        .next()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("user")
        .to_owned()
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;
