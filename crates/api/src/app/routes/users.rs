use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use gamesplay_core::Identity;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::middleware::RequestToken;
use crate::view;

pub fn router() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", get(logout))
        .route("/me", get(me))
}

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RegisterRequest>,
) -> axum::response::Response {
    match services
        .auth
        .register(&body.email, &body.password, &body.confirm_password)
    {
        Ok(res) => (StatusCode::OK, Json(dto::auth_to_json(&res))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    match services.auth.login(&body.email, &body.password) {
        Ok(res) => (StatusCode::OK, Json(dto::auth_to_json(&res))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// GET because the original client follows a plain navigation link.
/// Idempotent: an anonymous or already-revoked caller still gets 204.
pub async fn logout(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(token): Extension<RequestToken>,
) -> axum::response::Response {
    if let Some(token) = token.0 {
        services.auth.logout(&token);
    }
    StatusCode::NO_CONTENT.into_response()
}

/// Navigation-bar affordances for the current identity.
pub async fn me(Extension(identity): Extension<Identity>) -> axum::response::Response {
    (StatusCode::OK, Json(view::nav_state(identity))).into_response()
}
