// ---------------------------------------------------------------------------
// POST /teknoloji-tarama — technology fingerprint
// ---------------------------------------------------------------------------

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use tracing::warn;
use urlscan_core::{adapters, CommandExecutor};
use urlscan_types::validate_target;

use crate::error::ApiError;
use crate::form;
use crate::pages;
use crate::state::AppState;

/// Runs the fingerprint tool and shows its raw output together with the
/// scan-selection form. This output is display-only and never persisted.
pub async fn tech_scan(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Html<String>, ApiError> {
    let form = form::parse(&body);
    let url = validate_target(form::first(&form, "url"))?.to_string();

    let command = adapters::whatweb_command(&url);
    let output = match state.executor.run(&command).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, url = %url, "technology fingerprint failed");
            format!("{}: {e}", adapters::ERROR_MARKER)
        }
    };

    Ok(Html(pages::tech_page(&url, &output)))
}
