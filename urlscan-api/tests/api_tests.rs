// ---------------------------------------------------------------------------
// Integration tests for the web interface
// ---------------------------------------------------------------------------

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use urlscan_api::state::AppState;
use urlscan_core::{CommandExecutor, ExecError};

/// Answers with canned tool output and records every command line, so tests
/// can assert exactly which subprocesses would have been spawned.
struct StubExecutor {
    calls: Mutex<Vec<String>>,
}

impl StubExecutor {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandExecutor for StubExecutor {
    async fn run(&self, command_line: &str) -> Result<String, ExecError> {
        self.calls.lock().unwrap().push(command_line.to_string());
        let tool = command_line.split_whitespace().next().unwrap_or("");
        let output = match tool {
            "nmap" => "80/tcp open http",
            "assetfinder" => "sub1.example.com\nsub2.example.com",
            "nuclei" => "[cve-2024-1234] [medium] https://www.example.com",
            "whatweb" => "www.example.com 200 OK WordPress 6.4",
            other => panic!("unexpected command: {other}"),
        };
        Ok(output.to_string())
    }
}

fn test_app() -> (Arc<StubExecutor>, Arc<AppState>, axum::Router) {
    let executor = Arc::new(StubExecutor::new());
    let state = Arc::new(AppState::new_in_memory(executor.clone()));
    let app = urlscan_api::build_router(state.clone());
    (executor, state, app)
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, 1024 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// Home page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_page_serves_url_form() {
    let (_, _, app) = test_app();

    let resp = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_string(resp.into_body()).await;
    assert!(body.contains("action=\"/teknoloji-tarama\""));
}

// ---------------------------------------------------------------------------
// Method errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_on_post_routes_returns_405() {
    for uri in ["/process", "/teknoloji-tarama"] {
        let (executor, _, app) = test_app();
        let resp = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "{uri}");
        assert!(executor.calls().is_empty());
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn process_rejects_missing_url_before_any_subprocess() {
    let (executor, _, app) = test_app();

    let resp = app
        .oneshot(form_post("/process", "scanType=nmap"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(resp.into_body()).await, "Geçerli bir URL girin.");
    assert!(executor.calls().is_empty());
}

#[tokio::test]
async fn process_rejects_url_without_prefix() {
    let (executor, _, app) = test_app();

    let resp = app
        .oneshot(form_post("/process", "url=example.com&scanType=nmap"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_string(resp.into_body()).await,
        "URL, www ile başlamalıdır."
    );
    assert!(executor.calls().is_empty());
}

#[tokio::test]
async fn process_rejects_empty_scan_selection() {
    let (executor, _, app) = test_app();

    let resp = app
        .oneshot(form_post("/process", "url=www.example.com"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_string(resp.into_body()).await,
        "En az bir tarama türü seçin."
    );
    assert!(executor.calls().is_empty());
}

#[tokio::test]
async fn process_ignores_unknown_scan_types() {
    let (executor, _, app) = test_app();

    // Only unknown values submitted, so nothing valid remains.
    let resp = app
        .oneshot(form_post("/process", "url=www.example.com&scanType=bogus"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(executor.calls().is_empty());
}

#[tokio::test]
async fn tech_scan_rejects_url_without_prefix() {
    let (executor, _, app) = test_app();

    let resp = app
        .oneshot(form_post("/teknoloji-tarama", "url=example.com"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(executor.calls().is_empty());
}

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn process_runs_scans_in_priority_order() {
    let (executor, _, app) = test_app();

    // Submitted out of order; executed and rendered nmap → assetfinder → nuclei.
    let resp = app
        .oneshot(form_post(
            "/process",
            "url=www.example.com&scanType=nuclei&scanType=nmap&scanType=assetfinder",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let calls = executor.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls[0].starts_with("nmap "));
    assert!(calls[1].starts_with("assetfinder "));
    assert!(calls[2].starts_with("nuclei "));

    let body = body_string(resp.into_body()).await;
    let nmap = body.find("Tarama Sonuçları (Nmap):").unwrap();
    let asset = body.find("Tarama Sonuçları (Assetfinder):").unwrap();
    let nuclei = body.find("Tarama Sonuçları (Nuclei):").unwrap();
    assert!(nmap < asset && asset < nuclei);
    assert!(body.contains("Toplam Tarama Süresi:"));
}

#[tokio::test]
async fn assetfinder_results_render_as_dashed_lines() {
    let (_, _, app) = test_app();

    let resp = app
        .oneshot(form_post(
            "/process",
            "url=www.example.com&scanType=assetfinder",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_string(resp.into_body()).await;
    assert!(body.contains(
        "Tarama Sonuçları (Assetfinder):\n- sub1.example.com\n- sub2.example.com\n"
    ));
    assert!(body.contains("Assetfinder Tarama Süresi:"));
    // Unrequested branches report no duration.
    assert!(!body.contains("Nmap Tarama Süresi:"));
}

#[tokio::test]
async fn selected_templates_reach_the_nuclei_command() {
    let (executor, _, app) = test_app();

    let resp = app
        .oneshot(form_post(
            "/process",
            "url=www.example.com&scanType=nuclei&selectedTemplates=CVES&selectedTemplates=dns",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let calls = executor.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].contains("-t cves,dns"));
    assert!(calls[0].contains("-u www.example.com"));
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

#[tokio::test]
async fn process_persists_exactly_one_row() {
    let (_, state, app) = test_app();

    let resp = app
        .oneshot(form_post(
            "/process",
            "url=www.example.com&scanType=nmap&scanType=assetfinder",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let store = state.store.lock().await;
    let records = store.list_scans().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].url, "www.example.com");
    assert!(records[0].nmap.contains("80/tcp"));
    assert!(records[0].assetfinder.contains("sub1.example.com"));
    // Nuclei wasn't requested; its column is empty, not a sentinel block.
    assert_eq!(records[0].nuclei, "");
}

#[tokio::test]
async fn view_lists_persisted_records() {
    let (_, _, app) = test_app();

    let resp = app
        .clone()
        .oneshot(form_post(
            "/process",
            "url=www.example.com&scanType=assetfinder",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(Request::get("/view").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_string(resp.into_body()).await;
    assert!(body.contains("<table"));
    assert!(body.contains("www.example.com"));
    assert!(body.contains("sub1.example.com"));
}

// ---------------------------------------------------------------------------
// Technology fingerprint
// ---------------------------------------------------------------------------

#[tokio::test]
async fn tech_scan_shows_output_and_follow_up_form() {
    let (executor, state, app) = test_app();

    let resp = app
        .oneshot(form_post("/teknoloji-tarama", "url=www.example.com"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let calls = executor.calls();
    assert_eq!(calls, vec!["whatweb www.example.com".to_string()]);

    let body = body_string(resp.into_body()).await;
    assert!(body.contains("WordPress 6.4"));
    assert!(body.contains("action=\"/process\""));
    assert!(body.contains("value=\"www.example.com\""));

    // Fingerprint output is never persisted.
    let store = state.store.lock().await;
    assert!(store.list_scans().unwrap().is_empty());
}
