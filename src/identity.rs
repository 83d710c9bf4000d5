#![cfg(feature = "std")]

//! Username/password store used to resolve human players' display names.
//!
//! The store is an ordinary value: build it at startup, pass it by reference
//! to the login step, drop it when the process exits.

use std::collections::HashMap;
use std::fmt;

use rand::Rng;

use crate::engine::config::SALT_LEN;

/// Name shown for a player once identity is resolved.
pub type DisplayName = String;

/// Errors returned by [`IdentityStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Registration attempted with an empty username.
    EmptyUsername,
    /// Registration attempted with a username already in the store.
    UsernameTaken,
    /// Unknown username or wrong password.
    InvalidCredentials,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::EmptyUsername => write!(f, "Username cannot be empty"),
            AuthError::UsernameTaken => write!(f, "Username already exists"),
            AuthError::InvalidCredentials => write!(f, "Invalid username or password"),
        }
    }
}

impl std::error::Error for AuthError {}

struct Credential {
    salt: [u8; SALT_LEN],
    digest: blake3::Hash,
}

impl Credential {
    fn new(password: &str) -> Self {
        let mut salt = [0u8; SALT_LEN];
        rand::rng().fill(&mut salt);
        let digest = digest(&salt, password);
        Self { salt, digest }
    }

    fn verify(&self, password: &str) -> bool {
        // blake3::Hash equality is constant time
        digest(&self.salt, password) == self.digest
    }
}

fn digest(salt: &[u8], password: &str) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize()
}

/// Salted credential table keyed by username.
#[derive(Default)]
pub struct IdentityStore {
    credentials: HashMap<String, Credential>,
}

impl IdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `username` is registered.
    pub fn contains(&self, username: &str) -> bool {
        self.credentials.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    /// Register a new user.
    pub fn register(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        if username.is_empty() {
            return Err(AuthError::EmptyUsername);
        }
        if self.contains(username) {
            return Err(AuthError::UsernameTaken);
        }
        self.credentials
            .insert(username.to_string(), Credential::new(password));
        log::debug!("registered user {}", username);
        Ok(())
    }

    /// Check credentials and return the display name on success.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<DisplayName, AuthError> {
        match self.credentials.get(username) {
            Some(cred) if cred.verify(password) => {
                log::info!("user {} logged in", username);
                Ok(username.to_string())
            }
            _ => {
                log::warn!("failed login for {}", username);
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}

impl fmt::Debug for IdentityStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut users: Vec<&String> = self.credentials.keys().collect();
        users.sort();
        f.debug_struct("IdentityStore").field("users", &users).finish()
    }
}
