use axum::Router;

pub mod games;
pub mod system;
pub mod users;

/// Router for the service API: auth endpoints under `/users`, catalog under
/// `/data/games`.
pub fn router() -> Router {
    Router::new()
        .nest("/users", users::router())
        .nest("/data/games", games::router())
}
