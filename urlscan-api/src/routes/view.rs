// ---------------------------------------------------------------------------
// GET /view — persisted result log
// ---------------------------------------------------------------------------

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use tracing::warn;

use crate::error::ApiError;
use crate::pages;
use crate::state::AppState;

pub async fn view_results(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ApiError> {
    let store = state.store.lock().await;
    let records = store.list_scans().map_err(|e| {
        warn!(error = %e, "failed to list scans");
        ApiError::Internal("Sonuçlar alınamadı.".into())
    })?;
    Ok(Html(pages::view_page(&records)))
}
