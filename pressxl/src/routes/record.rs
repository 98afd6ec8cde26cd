use axum::extract::{Path, Query, State};
use axum::response::Html;

use super::LangQuery;
use crate::error::ApiError;
use crate::render;
use crate::state::AppState;

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<LangQuery>,
) -> Result<Html<String>, ApiError> {
    let lang = query.resolve(&state);
    let record = state
        .query
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no record with id {id}")))?;

    let markup = render::record::render(&state.config, &lang, &record);
    Ok(Html(markup.into_string()))
}
