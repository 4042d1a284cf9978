//! Session middleware: header → identity resolution.
//!
//! Unlike a bearer-token gate, this middleware never rejects a request. A
//! missing, malformed or revoked `X-Authorization` token resolves to
//! [`Identity::Anonymous`]; the services decide per operation whether an
//! anonymous caller is acceptable.

use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use gamesplay_auth::SessionManager;
use gamesplay_core::{Identity, SessionToken};

/// The session token a request carried, if any. Kept alongside [`Identity`]
/// so logout can revoke the exact token it was called with.
#[derive(Debug, Clone, Default)]
pub struct RequestToken(pub Option<SessionToken>);

#[derive(Clone)]
pub struct SessionState {
    pub sessions: Arc<SessionManager>,
}

pub async fn session_middleware(
    State(state): State<SessionState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let token = extract_token(req.headers());

    let identity = match &token {
        Some(token) => state.sessions.resolve(token),
        None => Identity::Anonymous,
    };

    req.extensions_mut().insert(identity);
    req.extensions_mut().insert(RequestToken(token));

    next.run(req).await
}

fn extract_token(headers: &HeaderMap) -> Option<SessionToken> {
    let header = headers.get("x-authorization")?;
    let header = header.to_str().ok()?;
    header.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_token_tolerates_garbage() {
        let mut headers = HeaderMap::new();
        assert!(extract_token(&headers).is_none());

        headers.insert("x-authorization", "not-a-token".parse().unwrap());
        assert!(extract_token(&headers).is_none());
    }

    #[test]
    fn extract_token_parses_and_trims() {
        let token = SessionToken::generate();
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-authorization",
            format!("  {token} ").parse().unwrap(),
        );
        assert_eq!(extract_token(&headers), Some(token));
    }
}
