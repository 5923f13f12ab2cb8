// ---------------------------------------------------------------------------
// Route registration
// ---------------------------------------------------------------------------

mod process;
mod tech;
mod view;

use std::sync::Arc;

use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::pages;
use crate::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/teknoloji-tarama", post(tech::tech_scan))
        .route("/process", post(process::process_url))
        .route("/view", get(view::view_results))
        // Form submissions are tiny; anything bigger is not a browser.
        .layer(RequestBodyLimitLayer::new(64 * 1024))
        .with_state(state)
}

async fn home() -> Html<String> {
    Html(pages::home_page())
}
