//! Demo catalog seeding.
//!
//! The shipped application starts with a populated home page, including a
//! game owned by a user the test accounts can never be ("MineCraft"), which
//! is what exercises the non-owner view. The seed owner is a synthetic id
//! with no credentials, so nobody can ever log in as it.

use gamesplay_core::UserId;

use crate::game::{Game, GameDraft};
use crate::store::GameStore;

/// Install three demo games under a synthetic owner. Returns the owner id.
pub fn seed_demo_catalog<S: GameStore>(store: &S) -> UserId {
    let owner_id = UserId::new();

    let drafts = [
        GameDraft {
            title: "MineCraft".into(),
            category: "Sandbox".into(),
            max_level: "100".into(),
            image_url: "./images/MineCraft.png".into(),
            summary: "Build, mine, survive.".into(),
        },
        GameDraft {
            title: "CoverFire".into(),
            category: "Shooter".into(),
            max_level: "70".into(),
            image_url: "./images/CoverFire.png".into(),
            summary: "Cover-based shooter campaign.".into(),
        },
        GameDraft {
            title: "Zombie Lang".into(),
            category: "Vertical Shooter".into(),
            max_level: "71".into(),
            image_url: "./images/ZombieLang.png".into(),
            summary: "Endless zombie waves.".into(),
        },
    ];

    for draft in drafts {
        store.insert(Game::create(owner_id, draft));
    }

    owner_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{GameStore, InMemoryGameStore};

    #[test]
    fn seeds_three_games_under_one_owner() {
        let store = InMemoryGameStore::new();
        let owner_id = seed_demo_catalog(&store);

        let games = store.list();
        assert_eq!(games.len(), 3);
        assert!(games.iter().all(|g| g.owner_id == owner_id));
        assert!(games.iter().any(|g| g.title == "MineCraft"));
    }
}
