//! Session manager: token → user binding.
//!
//! Per-token state machine: `Active` (created) → `Revoked` (destroyed).
//! `Revoked` is terminal; a destroyed token can never come back. An unknown
//! token is not an error anywhere in this module — it resolves to
//! [`Identity::Anonymous`], which callers treat as a first-class state.

use std::collections::HashMap;
use std::sync::RwLock;

use gamesplay_core::{Identity, SessionToken, UserId};

/// Issues, resolves, and revokes session tokens.
///
/// A user may hold any number of concurrent sessions; revoking one leaves the
/// others untouched.
#[derive(Debug, Default)]
pub struct SessionManager {
    inner: RwLock<HashMap<SessionToken, UserId>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token bound to `user_id`. Always succeeds.
    pub fn create(&self, user_id: UserId) -> SessionToken {
        let token = SessionToken::generate();
        let mut map = self.inner.write().expect("session store poisoned");
        map.insert(token.clone(), user_id);
        token
    }

    /// Resolve a token to an identity. Unknown tokens are anonymous, not
    /// errors.
    pub fn resolve(&self, token: &SessionToken) -> Identity {
        let map = self.inner.read().expect("session store poisoned");
        Identity::from(map.get(token).copied())
    }

    /// Revoke a token. Idempotent: revoking an unknown or already-revoked
    /// token is a no-op.
    pub fn destroy(&self, token: &SessionToken) {
        let mut map = self.inner.write().expect("session store poisoned");
        map.remove(token);
    }
}
