use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated user through the request.
///
/// Holds the live user row, not the token claims: guards decide on current
/// `is_admin`/`is_banned` state, so a stale token only proves identity.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware validating the bearer token, resolving the live user record,
/// and rejecting banned users on non-allowlisted paths.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = state.tokens.validate(token).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        unauthorized()
    })?;

    // The token proves identity; authorization state is read fresh
    let user = state
        .user_service
        .get_user(UserId(claims.id))
        .await
        .map_err(|e| match e {
            UserError::NotFound => unauthorized(),
            other => ApiError::from(other).into_response(),
        })?;

    state
        .guards
        .check_auth(req.uri().path(), &user)
        .map_err(|e| ApiError::from(e).into_response())?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

/// Middleware gating admin-only routers; runs after [`authenticate`].
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    let CurrentUser(user) = req
        .extensions()
        .get::<CurrentUser>()
        .cloned()
        .ok_or_else(|| {
            ApiError::InternalServerError("Admin check before authentication".to_string())
                .into_response()
        })?;

    state
        .guards
        .check_admin(&user)
        .map_err(|e| ApiError::from(e).into_response())?;

    Ok(next.run(req).await)
}

/// Global failure fallback: any 500 leaving the stack is logged and pushed
/// to the operational alert channel. Panics are converted to 500 upstream
/// by the catch-panic layer and land here too.
pub async fn alert_on_failure(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    if response.status() == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(%method, %path, "Request failed with internal server error");
        state
            .notifier
            .notify(&format!("Error in {} {}: internal server error", method, path))
            .await;
    }

    response
}

fn unauthorized() -> Response {
    ApiError::Unauthorized("Could not validate credentials".to_string()).into_response()
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            ApiError::Unauthorized("Missing Authorization header".to_string()).into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        ApiError::Unauthorized("Invalid Authorization header".to_string()).into_response()
    })?;

    if !auth_str.starts_with("Bearer ") {
        return Err(ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
        .into_response());
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
