use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use gamesplay_core::{GameId, Identity};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_games).post(create_game))
        .route(
            "/:id",
            get(get_game).put(update_game).delete(delete_game),
        )
}

pub async fn list_games(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = services
        .catalog
        .list()
        .iter()
        .map(dto::game_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(items)).into_response()
}

pub async fn create_game(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<dto::GameRequest>,
) -> axum::response::Response {
    match services.catalog.create(identity, body.into()) {
        Ok(game) => (StatusCode::OK, Json(dto::game_to_json(&game))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_game(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    // An unparsable id names nothing, so it is a 404 like any unknown id.
    let id: GameId = match id.parse() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog.get(&id) {
        Ok(game) => (StatusCode::OK, Json(dto::game_to_json(&game))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_game(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    Json(body): Json<dto::GameRequest>,
) -> axum::response::Response {
    let id: GameId = match id.parse() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog.update(identity, &id, body.into()) {
        Ok(game) => (StatusCode::OK, Json(dto::game_to_json(&game))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_game(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: GameId = match id.parse() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog.delete(identity, &id) {
        Ok(removed) => (StatusCode::OK, Json(dto::game_to_json(&removed))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
