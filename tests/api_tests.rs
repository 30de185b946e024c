// ---------------------------------------------------------------------------
// Integration tests for the upload service
// ---------------------------------------------------------------------------

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use contractscan::ledger::MemoryLedger;
use contractscan::server::state::AppState;
use contractscan::{Catalog, Matcher};

const BOUNDARY: &str = "contractscan-test-boundary";
const MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

struct TestService {
    app: axum::Router,
    ledger: Arc<MemoryLedger>,
    upload_dir: tempfile::TempDir,
}

fn test_service() -> TestService {
    let ledger = Arc::new(MemoryLedger::new());
    let upload_dir = tempfile::tempdir().unwrap();

    let state = Arc::new(AppState::new(
        Matcher::new(Arc::new(Catalog::builtin())),
        ledger.clone(),
        upload_dir.path().to_path_buf(),
        "vulnerabilities".into(),
    ));

    TestService {
        app: contractscan::server::build_router(state, MAX_UPLOAD_BYTES),
        ledger,
        upload_dir,
    }
}

fn multipart_body(field_name: &str, payload: &[u8]) -> Body {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field_name}\"; filename=\"contract.sol\"\r\n\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(payload);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    Body::from(body)
}

fn upload_request(payload: &[u8]) -> Request<Body> {
    Request::post("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(multipart_body("file", payload))
        .unwrap()
}

async fn parse_json(body: Body) -> serde_json::Value {
    let bytes = axum::body::to_bytes(body, 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn match_names(json: &serde_json::Value) -> Vec<String> {
    json["vulnerabilities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap().to_string())
        .collect()
}

/// Background persistence and cleanup run after the response; poll
/// until the condition holds or give up.
async fn wait_for(mut condition: impl FnMut() -> bool, what: &str) {
    for _ in 0..200 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("timed out waiting for {what}");
}

/// Polls the ledger until `collection` has seen exactly one append.
async fn wait_for_append(ledger: &MemoryLedger, collection: &str) {
    for _ in 0..200 {
        if ledger.append_count(collection).await == 1 {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("timed out waiting for ledger append");
}

fn upload_dir_is_empty(dir: &tempfile::TempDir) -> bool {
    std::fs::read_dir(dir.path()).unwrap().next().is_none()
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upload_reports_matches_in_catalog_order() {
    let svc = test_service();

    let resp = svc
        .app
        .oneshot(upload_request(b"Reentrancy and Floating Pragma issues"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = parse_json(resp.into_body()).await;
    assert_eq!(match_names(&json), vec!["Reentrancy", "Floating Pragma"]);
    assert_eq!(json["vulnerabilities"][0]["severity"], "Critical");
    assert_eq!(json["vulnerabilities"][1]["severity"], "Medium");
}

#[tokio::test]
async fn upload_with_no_matches_returns_empty_list() {
    let svc = test_service();

    let resp = svc
        .app
        .oneshot(upload_request(b"contract Token { function transfer() public {} }"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = parse_json(resp.into_body()).await;
    assert_eq!(json["vulnerabilities"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn upload_with_every_name_returns_full_catalog() {
    let svc = test_service();
    let catalog = Catalog::builtin();
    let text: String = catalog
        .records()
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let resp = svc.app.oneshot(upload_request(text.as_bytes())).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = parse_json(resp.into_body()).await;
    let names = match_names(&json);
    assert_eq!(names.len(), catalog.len());
    for (found, expected) in names.iter().zip(catalog.records()) {
        assert_eq!(found, &expected.name);
    }
}

// ---------------------------------------------------------------------------
// Failure paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreadable_upload_returns_generic_error_and_skips_persistence() {
    let svc = test_service();

    // Invalid UTF-8 cannot be read back as text.
    let resp = svc
        .app
        .oneshot(upload_request(&[0xff, 0xfe, 0x01, 0x02]))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = parse_json(resp.into_body()).await;
    assert_eq!(json["error"], "Failed to read the uploaded file");

    // The staged file is removed before the error response, and no
    // persistence call is made.
    assert!(upload_dir_is_empty(&svc.upload_dir));
    assert_eq!(svc.ledger.append_count("vulnerabilities").await, 0);
}

#[tokio::test]
async fn upload_without_file_field_is_rejected() {
    let svc = test_service();

    let req = Request::post("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(multipart_body("attachment", b"Reentrancy"))
        .unwrap();

    let resp = svc.app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = parse_json(resp.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("file"));
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let svc = test_service();

    let payload = vec![b'a'; MAX_UPLOAD_BYTES + 1];
    let resp = svc.app.oneshot(upload_request(&payload)).await.unwrap();
    assert!(resp.status().is_client_error());
}

// ---------------------------------------------------------------------------
// Side effects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn matches_are_persisted_after_response() {
    let svc = test_service();

    let resp = svc
        .app
        .oneshot(upload_request(b"Delegatecall Injection found here"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    wait_for_append(&svc.ledger, "vulnerabilities").await;

    let records = svc.ledger.records("vulnerabilities").await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Delegatecall Injection");
}

#[tokio::test]
async fn staged_file_is_removed_after_successful_upload() {
    let svc = test_service();

    let resp = svc
        .app
        .oneshot(upload_request(b"Timestamp Dependence"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    wait_for(|| upload_dir_is_empty(&svc.upload_dir), "upload cleanup").await;
}

#[tokio::test]
async fn empty_match_list_is_still_persisted() {
    let svc = test_service();

    let resp = svc.app.oneshot(upload_request(b"nothing to see")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    wait_for_append(&svc.ledger, "vulnerabilities").await;

    assert!(svc.ledger.records("vulnerabilities").await.is_empty());
}
