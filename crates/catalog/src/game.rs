//! Game resource model.
//!
//! # Invariants
//! - `owner_id` is set once at creation from the authenticated identity and
//!   never changes; it is never a client-supplied value.
//! - Edits touch only the five draft fields; `id`, `owner_id` and
//!   `created_at` are untouchable regardless of payload contents.
//! - All field values are stored and echoed verbatim — no trimming, no case
//!   transformation. `max_level` stays a string because that is how it
//!   travels on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gamesplay_core::{DomainError, DomainResult, Entity, GameId, UserId};

/// A catalog game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub title: String,
    pub category: String,
    pub max_level: String,
    pub image_url: String,
    pub summary: String,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Entity for Game {
    type Id = GameId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Game {
    /// Build a new game from a validated draft, owned by `owner_id`.
    pub fn create(owner_id: UserId, draft: GameDraft) -> Self {
        Self {
            id: GameId::new(),
            title: draft.title,
            category: draft.category,
            max_level: draft.max_level,
            image_url: draft.image_url,
            summary: draft.summary,
            owner_id,
            created_at: Utc::now(),
        }
    }

    /// Apply an edit: only the whitelisted mutable fields change.
    pub fn apply(&mut self, draft: GameDraft) {
        self.title = draft.title;
        self.category = draft.category;
        self.max_level = draft.max_level;
        self.image_url = draft.image_url;
        self.summary = draft.summary;
    }
}

/// The client-supplied fields of a game, used for both create and edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDraft {
    pub title: String,
    pub category: String,
    pub max_level: String,
    pub image_url: String,
    pub summary: String,
}

impl GameDraft {
    /// All fields are required and non-empty. Checked before any store
    /// access.
    pub fn validate(&self) -> DomainResult<()> {
        let fields = [
            ("title", &self.title),
            ("category", &self.category),
            ("maxLevel", &self.max_level),
            ("imageUrl", &self.image_url),
            ("summary", &self.summary),
        ];

        for (name, value) in fields {
            if value.is_empty() {
                return Err(DomainError::validation(format!("{name} is required")));
            }
        }
        Ok(())
    }
}
