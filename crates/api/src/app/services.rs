//! Store construction and service wiring.
//!
//! The two in-memory stores are the only shared mutable state in the
//! process; everything reaches them through the auth/catalog services held
//! here. The session manager is additionally shared with the session
//! middleware for identity resolution.

use std::sync::Arc;

use gamesplay_auth::{AuthService, InMemoryCredentialStore, SessionManager};
use gamesplay_catalog::{CatalogService, InMemoryGameStore, seed_demo_catalog};

/// Shared application services, one instance per process.
pub struct AppServices {
    pub auth: AuthService<InMemoryCredentialStore>,
    pub catalog: CatalogService<InMemoryGameStore>,
    pub sessions: Arc<SessionManager>,
}

/// Wire up stores and services, seeding the demo catalog.
pub fn build_services() -> AppServices {
    let credentials = Arc::new(InMemoryCredentialStore::new());
    let sessions = Arc::new(SessionManager::new());
    let games = Arc::new(InMemoryGameStore::new());

    let seed_owner = seed_demo_catalog(games.as_ref());
    tracing::debug!(owner_id = %seed_owner, "demo catalog seeded");

    AppServices {
        auth: AuthService::new(credentials, Arc::clone(&sessions)),
        catalog: CatalogService::new(games),
        sessions,
    }
}
