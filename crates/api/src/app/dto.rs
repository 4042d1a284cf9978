use serde::Deserialize;

use gamesplay_auth::AuthResponse;
use gamesplay_catalog::{Game, GameDraft};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Create/edit payload. Unknown fields are ignored on purpose: a payload may
/// carry `_id` or `ownerId`, neither of which is ever honored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub max_level: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub summary: String,
}

impl From<GameRequest> for GameDraft {
    fn from(req: GameRequest) -> Self {
        GameDraft {
            title: req.title,
            category: req.category,
            max_level: req.max_level,
            image_url: req.image_url,
            summary: req.summary,
        }
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

/// Auth response body. Echoes email and password verbatim — the observed
/// client contract depends on field-for-field equality with what was
/// submitted.
pub fn auth_to_json(res: &AuthResponse) -> serde_json::Value {
    serde_json::json!({
        "_id": res.user.id.to_string(),
        "email": res.user.email,
        "password": res.user.password,
        "accessToken": res.token.to_string(),
        "createdAt": res.user.created_at.to_rfc3339(),
    })
}

pub fn game_to_json(game: &Game) -> serde_json::Value {
    serde_json::json!({
        "_id": game.id.to_string(),
        "title": game.title,
        "category": game.category,
        "maxLevel": game.max_level,
        "imageUrl": game.image_url,
        "summary": game.summary,
        "ownerId": game.owner_id.to_string(),
        "createdAt": game.created_at.to_rfc3339(),
    })
}
