//! Explicit authentication context shared by the API client and the
//! authenticated image loader.

use std::sync::{Arc, RwLock};

/// Holds the bearer token, if any. Cloning shares the same token slot.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    token: Arc<RwLock<Option<String>>>,
}

impl AuthContext {
    /// Creates a context seeded with `token`.
    #[must_use]
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(token)),
        }
    }

    /// Creates a context without a token.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Current raw token.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// `Authorization` header value, if a token is held.
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {token}"))
    }

    /// Whether a token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Replaces the token.
    pub fn set_token(&self, token: Option<String>) {
        match self.token.write() {
            Ok(mut guard) => *guard = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
    }

    /// Drops the token, e.g. after the server rejected it.
    pub fn clear(&self) {
        self.set_token(None);
    }
}
