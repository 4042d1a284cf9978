//! CRUD service for the game catalog.
//!
//! Every mutation follows the same conceptual transaction: validate the
//! input shape, resolve the caller's identity (done upstream, passed in as
//! [`Identity`]), authorize against the resource owner, then mutate — all of
//! which happens under the store's per-table lock for update/delete so
//! concurrent operations on one id serialize.
//!
//! Lookup runs before the authorization gate: a missing id is `NotFound` for
//! everyone, owner or not. Reads are public and take no identity at all.

use std::sync::Arc;

use gamesplay_auth::authorize::{Action, can_mutate};
use gamesplay_core::{DomainError, DomainResult, GameId, Identity};

use crate::game::{Game, GameDraft};
use crate::store::GameStore;

/// Orchestrates create/read/update/delete on games.
pub struct CatalogService<S: GameStore> {
    store: Arc<S>,
}

impl<S: GameStore> CatalogService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a game owned by the caller.
    ///
    /// Requires an authenticated identity; the owner is always the caller,
    /// never anything the payload claims.
    pub fn create(&self, identity: Identity, draft: GameDraft) -> DomainResult<Game> {
        let Some(owner_id) = identity.user_id() else {
            return Err(DomainError::Unauthenticated);
        };
        draft.validate()?;

        let game = Game::create(owner_id, draft);
        self.store.insert(game.clone());

        tracing::info!(game_id = %game.id, owner_id = %owner_id, "game created");
        Ok(game)
    }

    /// All games, insertion order. Public.
    pub fn list(&self) -> Vec<Game> {
        self.store.list()
    }

    /// Detail lookup. Public.
    pub fn get(&self, id: &GameId) -> DomainResult<Game> {
        self.store.get(id).ok_or(DomainError::NotFound)
    }

    /// Owner-only edit. Applies only the whitelisted draft fields.
    pub fn update(&self, identity: Identity, id: &GameId, draft: GameDraft) -> DomainResult<Game> {
        let updated = self.store.update_with(id, |current| {
            if !can_mutate(identity, current.owner_id, Action::Update) {
                return Err(DomainError::Forbidden);
            }
            draft.validate()?;

            let mut next = current.clone();
            next.apply(draft);
            Ok(next)
        })?;

        tracing::info!(game_id = %id, "game updated");
        Ok(updated)
    }

    /// Owner-only permanent removal. Returns the removed game.
    pub fn delete(&self, identity: Identity, id: &GameId) -> DomainResult<Game> {
        let removed = self.store.remove_if(id, |current| {
            if !can_mutate(identity, current.owner_id, Action::Delete) {
                return Err(DomainError::Forbidden);
            }
            Ok(())
        })?;

        tracing::info!(game_id = %id, "game deleted");
        Ok(removed)
    }

    /// Number of games currently stored.
    pub fn count(&self) -> usize {
        self.store.count()
    }
}
