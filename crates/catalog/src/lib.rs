//! `gamesplay-catalog` — the game resource: model, store, CRUD service.

pub mod game;
pub mod seed;
pub mod service;
pub mod store;

pub use game::{Game, GameDraft};
pub use seed::seed_demo_catalog;
pub use service::CatalogService;
pub use store::{GameStore, InMemoryGameStore};
