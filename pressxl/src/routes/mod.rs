//! Route definitions.
//!
//! ## Routes
//!
//! - `GET /` - First listing page
//! - `GET /page/{page}` - Listing page `page` (1-based)
//! - `GET /id/{id}` - Single press release
//! - `POST /update` - Run one ingestion (requires the `token` header)
//! - `GET /health` - Health check (JSON)
//!
//! Listing and record pages accept an optional `lang` query parameter.

mod health;
mod listing;
mod record;
mod update;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;

use crate::auth::require_update_token;
use crate::state::AppState;

/// Build the complete router.
pub fn router(state: AppState) -> Router {
    let update = Router::new()
        .route("/update", post(update::trigger_update))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_update_token,
        ));

    Router::new()
        .route("/", get(listing::first_page))
        .route("/page/{page}", get(listing::page))
        .route("/id/{id}", get(record::show))
        .route("/health", get(health::health_check))
        .merge(update)
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    lang: Option<String>,
}

impl LangQuery {
    /// Requested language, or the source language when none was given.
    pub fn resolve(self, state: &AppState) -> String {
        self.lang
            .map(|lang| lang.trim().to_string())
            .filter(|lang| !lang.is_empty())
            .unwrap_or_else(|| state.config.source_language.clone())
    }
}
