//! Admin authentication middleware.
//!
//! Admin identity is handled by the external identity provider; the dashboard
//! exchanges its session for the static admin token configured on this
//! service and presents it as a bearer token on /api/v1/admin routes.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::app::AppState;

/// Middleware that requires the configured admin bearer token.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match token {
        Some(token) if token == state.config.auth.admin_token => next.run(req).await,
        Some(_) => forbidden_response("Invalid admin token"),
        None => unauthorized_response("Missing bearer token"),
    }
}

fn unauthorized_response(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "unauthorized",
            "message": message
        })),
    )
        .into_response()
}

fn forbidden_response(message: &str) -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({
            "error": "forbidden",
            "message": message
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_response_status() {
        let response = unauthorized_response("Missing bearer token");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_forbidden_response_status() {
        let response = forbidden_response("Invalid admin token");
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_bearer_prefix_strip() {
        let value = "Bearer secret-token";
        assert_eq!(value.strip_prefix("Bearer "), Some("secret-token"));
        assert_eq!("secret-token".strip_prefix("Bearer "), None);
    }
}
