//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store construction and service wiring
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::middleware::{self, SessionState};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app() -> Router {
    let services = Arc::new(services::build_services());
    let session_state = SessionState {
        sessions: Arc::clone(&services.sessions),
    };

    // Every route runs behind the session middleware; it resolves identity
    // but never rejects, so public endpoints stay public.
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(Extension(services))
                .layer(axum::middleware::from_fn_with_state(
                    session_state,
                    middleware::session_middleware,
                )),
        )
}
