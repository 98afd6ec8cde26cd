use axum::extract::State;

use crate::error::ApiError;
use crate::state::AppState;

/// Run one ingestion and report `OK. Processed N entries, M new.`
pub async fn trigger_update(State(state): State<AppState>) -> Result<String, ApiError> {
    let summary = state.pipeline.run().await.map_err(ApiError::Internal)?;
    Ok(summary.to_string())
}
