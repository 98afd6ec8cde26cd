//! Shared-secret check for the ingestion trigger.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the update token.
pub const TOKEN_HEADER: &str = "token";

/// Middleware that rejects requests whose `token` header does not match the
/// configured update token.
pub async fn require_update_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    match token {
        Some(token) if token == state.config.update_token.expose() => Ok(next.run(request).await),
        Some(_) => {
            tracing::warn!("rejected update with invalid token");
            Err(ApiError::Forbidden)
        }
        None => {
            tracing::debug!("missing update token");
            Err(ApiError::Forbidden)
        }
    }
}
