use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use gamesplay_core::DomainError;

/// Map a domain rejection onto its HTTP shape.
///
/// `InvalidCredentials` deliberately reuses one code and one message for
/// every credential failure; anything more specific would leak which half of
/// the pair was wrong.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::DuplicateEmail => {
            json_error(StatusCode::CONFLICT, "duplicate_email", err.to_string())
        }
        DomainError::InvalidCredentials => {
            json_error(StatusCode::FORBIDDEN, "invalid_credentials", err.to_string())
        }
        DomainError::Unauthenticated => {
            json_error(StatusCode::UNAUTHORIZED, "unauthenticated", err.to_string())
        }
        DomainError::Forbidden => json_error(StatusCode::FORBIDDEN, "forbidden", err.to_string()),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", err.to_string()),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
