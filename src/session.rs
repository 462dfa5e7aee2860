//! Explicit session context holding the bearer token
//!
//! The frontend kept the token in ambient browser storage; here the session is
//! an explicit value handed to `ApiClient` construction, so every consumer of
//! the API shares one source of truth for authentication state.

use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    /// Create an anonymous session
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from a previously issued token
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.store(token);
        session
    }

    /// Store a freshly issued bearer token
    pub fn store(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token.into());
    }

    /// Current bearer token, if authenticated
    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Drop the token (logout, or forced by a 401 response)
    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_clear() {
        let session = Session::new();
        assert!(!session.is_authenticated());

        session.store("abc");
        assert_eq!(session.token().as_deref(), Some("abc"));

        let shared = session.clone();
        shared.clear();
        assert!(!session.is_authenticated());
    }
}
