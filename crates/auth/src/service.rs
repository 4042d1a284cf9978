//! Auth service: register / login / logout orchestration.
//!
//! Side effects are strictly confined to the credential store and the session
//! manager; nothing here touches the catalog. Validation always runs before
//! any store access, so a rejected request leaves zero partial state behind.

use std::sync::Arc;

use gamesplay_core::{DomainError, DomainResult, SessionToken};

use crate::credentials::{CredentialStore, User};
use crate::sessions::SessionManager;

/// Successful authentication: the user record plus a freshly minted session.
#[derive(Debug, Clone)]
pub struct AuthResponse {
    pub user: User,
    pub token: SessionToken,
}

/// Orchestrates the authentication lifecycle.
pub struct AuthService<S: CredentialStore> {
    credentials: Arc<S>,
    sessions: Arc<SessionManager>,
}

impl<S: CredentialStore> AuthService<S> {
    pub fn new(credentials: Arc<S>, sessions: Arc<SessionManager>) -> Self {
        Self {
            credentials,
            sessions,
        }
    }

    /// Register a new account. On success a session is established
    /// immediately — register implies login.
    pub fn register(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> DomainResult<AuthResponse> {
        if email.is_empty() || password.is_empty() || confirm_password.is_empty() {
            return Err(DomainError::validation("all fields are required"));
        }
        if password != confirm_password {
            return Err(DomainError::validation("passwords do not match"));
        }

        let user = self
            .credentials
            .insert(email.to_string(), password.to_string())?;
        let token = self.sessions.create(user.id);

        tracing::info!(user_id = %user.id, "user registered");
        Ok(AuthResponse { user, token })
    }

    /// Log an existing account in.
    ///
    /// Unknown email and wrong password both surface as
    /// [`DomainError::InvalidCredentials`]; the distinction never leaves this
    /// function.
    pub fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        if email.is_empty() || password.is_empty() {
            return Err(DomainError::validation("all fields are required"));
        }

        let user = match self.credentials.find_by_email(email) {
            Some(user) if user.password == password => user,
            _ => {
                tracing::debug!("login rejected");
                return Err(DomainError::InvalidCredentials);
            }
        };

        let token = self.sessions.create(user.id);
        tracing::info!(user_id = %user.id, "user logged in");
        Ok(AuthResponse { user, token })
    }

    /// Destroy the session behind `token`. Always succeeds; revoking an
    /// unknown token is a no-op.
    pub fn logout(&self, token: &SessionToken) {
        self.sessions.destroy(token);
        tracing::info!("session revoked");
    }
}
