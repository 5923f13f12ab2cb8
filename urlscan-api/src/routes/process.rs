// ---------------------------------------------------------------------------
// POST /process — run the selected scans
// ---------------------------------------------------------------------------

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use tracing::{info, warn};
use urlscan_core::ScanEngine;
use urlscan_types::{ScanRequest, ScanType};

use crate::error::ApiError;
use crate::form;
use crate::pages;
use crate::state::AppState;

pub async fn process_url(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Html<String>, ApiError> {
    let form = form::parse(&body);
    // Unknown scanType values are dropped; if nothing valid remains the
    // request fails validation below.
    let scan_types: Vec<ScanType> = form::all(&form, "scanType")
        .iter()
        .filter_map(|v| v.parse().ok())
        .collect();
    let templates = form::all(&form, "selectedTemplates");

    let request = ScanRequest::new(form::first(&form, "url"), &scan_types, templates)?;

    info!(target = %request.target, scans = request.scan_types.len(), "scan requested");
    let report = ScanEngine::new(state.executor.clone()).run(&request).await;

    // The same report feeds the stored row and the rendered page, so the
    // tools run once per request and the log cannot diverge from what the
    // user saw. Absent branches persist as empty text.
    {
        let store = state.store.lock().await;
        store
            .record_scan(
                &request.target,
                report.stored_text(ScanType::Nmap),
                report.stored_text(ScanType::Assetfinder),
                report.stored_text(ScanType::Nuclei),
            )
            .map_err(|e| {
                warn!(error = %e, target = %request.target, "failed to record scan");
                ApiError::Internal("Sonuçlar kaydedilemedi.".into())
            })?;
    }

    Ok(Html(pages::results_page(&report)))
}
