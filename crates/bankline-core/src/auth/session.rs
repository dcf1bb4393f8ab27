use std::fmt;
use std::sync::Arc;

use tracing::info;

use super::store::{MemoryTokenStore, StoreError, TokenStore};
use super::token::{decode_claims, decode_email, Claims};

/// Derived session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

/// Handle on the current sign-in, backed by a [`TokenStore`].
///
/// Nothing is cached: every query re-reads the store, so a token cleared
/// elsewhere is noticed on the next call. Clones share the same store.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state())
            .finish()
    }
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Session held only in memory
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()))
    }

    /// The bearer token, if signed in
    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.get().is_some()
    }

    pub fn state(&self) -> SessionState {
        if self.is_logged_in() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    /// Email of the signed-in user, read from the unverified token payload.
    /// For display only.
    pub fn current_email(&self) -> Option<String> {
        self.store.get().and_then(|token| decode_email(&token))
    }

    pub fn claims(&self) -> Option<Claims> {
        self.store.get().and_then(|token| decode_claims(&token))
    }

    /// Record a freshly issued token
    pub fn start(&self, token: &str) -> Result<(), StoreError> {
        self.store.set(token)?;
        info!("Session started");
        Ok(())
    }

    /// Forget the token. Ending a session that is not active is a no-op.
    pub fn end(&self) -> Result<(), StoreError> {
        let was_active = self.is_logged_in();
        self.store.clear()?;
        if was_active {
            info!("Session ended");
        }
        Ok(())
    }
}
