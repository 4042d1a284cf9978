//! Game store: the shared mutable catalog table.
//!
//! Mutations on a single game id must not interleave, so the closure-taking
//! operations run the caller's authorize/validate/apply step under the
//! table's write lock: lookup, decision and mutation are one atomic step per
//! request.

use std::collections::HashMap;
use std::sync::RwLock;

use gamesplay_core::{DomainError, DomainResult, GameId};

use crate::game::Game;

/// Storage seam for catalog games.
pub trait GameStore: Send + Sync {
    /// Insert a newly created game.
    fn insert(&self, game: Game);

    /// Point lookup.
    fn get(&self, id: &GameId) -> Option<Game>;

    /// All games in insertion order.
    fn list(&self) -> Vec<Game>;

    /// Number of stored games.
    fn count(&self) -> usize;

    /// Look up `id` and replace it with whatever `f` produces, atomically.
    ///
    /// `f` sees the current row and either returns the replacement or an
    /// error; on error nothing changes. Missing id is [`DomainError::NotFound`]
    /// and `f` never runs.
    fn update_with<F>(&self, id: &GameId, f: F) -> DomainResult<Game>
    where
        F: FnOnce(&Game) -> DomainResult<Game>;

    /// Look up `id` and remove it if `f` approves, atomically.
    ///
    /// Returns the removed row. On error nothing changes.
    fn remove_if<F>(&self, id: &GameId, f: F) -> DomainResult<Game>
    where
        F: FnOnce(&Game) -> DomainResult<()>;
}

#[derive(Debug, Default)]
struct GameTable {
    rows: HashMap<GameId, Game>,
    // Insertion order for `list`; removal keeps the remaining order intact.
    order: Vec<GameId>,
}

/// In-memory game store.
#[derive(Debug, Default)]
pub struct InMemoryGameStore {
    inner: RwLock<GameTable>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for InMemoryGameStore {
    fn insert(&self, game: Game) {
        let mut table = self.inner.write().expect("game store poisoned");
        table.order.push(game.id);
        table.rows.insert(game.id, game);
    }

    fn get(&self, id: &GameId) -> Option<Game> {
        let table = self.inner.read().expect("game store poisoned");
        table.rows.get(id).cloned()
    }

    fn list(&self) -> Vec<Game> {
        let table = self.inner.read().expect("game store poisoned");
        table
            .order
            .iter()
            .filter_map(|id| table.rows.get(id))
            .cloned()
            .collect()
    }

    fn count(&self) -> usize {
        let table = self.inner.read().expect("game store poisoned");
        table.rows.len()
    }

    fn update_with<F>(&self, id: &GameId, f: F) -> DomainResult<Game>
    where
        F: FnOnce(&Game) -> DomainResult<Game>,
    {
        let mut table = self.inner.write().expect("game store poisoned");
        let current = table.rows.get(id).ok_or(DomainError::NotFound)?;
        let updated = f(current)?;
        table.rows.insert(*id, updated.clone());
        Ok(updated)
    }

    fn remove_if<F>(&self, id: &GameId, f: F) -> DomainResult<Game>
    where
        F: FnOnce(&Game) -> DomainResult<()>,
    {
        let mut table = self.inner.write().expect("game store poisoned");
        let current = table.rows.get(id).ok_or(DomainError::NotFound)?;
        f(current)?;

        let removed = table.rows.remove(id).ok_or(DomainError::NotFound)?;
        table.order.retain(|g| g != id);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameDraft;
    use gamesplay_core::UserId;

    fn game(title: &str) -> Game {
        Game::create(
            UserId::new(),
            GameDraft {
                title: title.into(),
                category: "arcade".into(),
                max_level: "10".into(),
                image_url: "./img.png".into(),
                summary: "s".into(),
            },
        )
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = InMemoryGameStore::new();
        store.insert(game("first"));
        store.insert(game("second"));
        store.insert(game("third"));

        let titles: Vec<_> = store.list().into_iter().map(|g| g.title).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn update_with_missing_id_is_not_found() {
        let store = InMemoryGameStore::new();
        let err = store
            .update_with(&GameId::new(), |_| unreachable!("must not run"))
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn update_with_error_leaves_row_unchanged() {
        let store = InMemoryGameStore::new();
        let g = game("original");
        let id = g.id;
        store.insert(g);

        let err = store
            .update_with(&id, |_| Err(DomainError::Forbidden))
            .unwrap_err();
        assert_eq!(err, DomainError::Forbidden);
        assert_eq!(store.get(&id).unwrap().title, "original");
    }

    #[test]
    fn remove_if_error_keeps_row_and_order() {
        let store = InMemoryGameStore::new();
        let g = game("keep me");
        let id = g.id;
        store.insert(g);

        let err = store
            .remove_if(&id, |_| Err(DomainError::Forbidden))
            .unwrap_err();
        assert_eq!(err, DomainError::Forbidden);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn remove_if_returns_removed_row() {
        let store = InMemoryGameStore::new();
        let g = game("doomed");
        let id = g.id;
        store.insert(g);

        let removed = store.remove_if(&id, |_| Ok(())).unwrap();
        assert_eq!(removed.title, "doomed");
        assert_eq!(store.count(), 0);
        assert!(store.get(&id).is_none());
    }
}
