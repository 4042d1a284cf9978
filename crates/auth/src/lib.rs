//! `gamesplay-auth` — authentication/session boundary.
//!
//! This crate is intentionally decoupled from HTTP: the API layer translates
//! headers into [`SessionToken`]s and [`Identity`]s, everything here works in
//! domain terms only.

pub mod authorize;
pub mod credentials;
pub mod service;
pub mod sessions;

pub use authorize::{Action, can_mutate, can_read};
pub use credentials::{CredentialStore, InMemoryCredentialStore, User};
pub use service::{AuthResponse, AuthService};
pub use sessions::SessionManager;

#[cfg(doc)]
use gamesplay_core::{Identity, SessionToken};
