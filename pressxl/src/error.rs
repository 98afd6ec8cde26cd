//! HTTP error responses.
//!
//! Errors are rendered as small HTML pages since every route but `/health`
//! and `/update` serves HTML.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use maud::{html, DOCTYPE};

use crate::types::PressError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or wrong update token.
    #[error("forbidden")]
    Forbidden,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(PressError),
}

impl From<PressError> for ApiError {
    fn from(err: PressError) -> Self {
        match err {
            PressError::InvalidId(id) => Self::NotFound(format!("no record with id {id}")),
            PressError::InvalidPage(page) => Self::BadRequest(format!("page {page} does not exist")),
            other => Self::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                "Forbidden",
                "A valid token is required.".to_string(),
            ),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "Not Found", msg.clone()),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad Request", msg.clone()),
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error",
                    "An internal error occurred. Please try again later.".to_string(),
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { (title) " - pressxl" }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href="/" { "Back to the press releases" }
                    }
                }
            }
        };

        (status, Html(markup.into_string())).into_response()
    }
}
