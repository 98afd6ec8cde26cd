use axum::extract::{Path, Query, State};
use axum::response::Html;

use super::LangQuery;
use crate::error::ApiError;
use crate::render;
use crate::state::AppState;

pub async fn first_page(
    state: State<AppState>,
    query: Query<LangQuery>,
) -> Result<Html<String>, ApiError> {
    page(state, Path(1), query).await
}

pub async fn page(
    State(state): State<AppState>,
    Path(page): Path<u32>,
    Query(query): Query<LangQuery>,
) -> Result<Html<String>, ApiError> {
    let lang = query.resolve(&state);
    let listing = state.query.list(page).await?;

    tracing::debug!(
        page,
        records = listing.records.len(),
        total = listing.pagination.total_count,
        "rendering listing"
    );

    let markup = render::listing::render(&state.config, &lang, &listing);
    Ok(Html(markup.into_string()))
}
