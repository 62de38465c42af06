//! Integration tests for `GET /`.

mod common;

use std::io::Write;

use axum::http::StatusCode;
use common::{body_text, get};

// ---------------------------------------------------------------------------
// Test: built-in page is served when no template file exists
// ---------------------------------------------------------------------------

#[tokio::test]
async fn serves_builtin_page_without_template() {
    let response = get(common::build_test_app(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let page = body_text(response).await;
    assert!(page.contains("<title>Pali Transliteration</title>"));
    assert!(page.contains(r#"<option value="latin">Latin/Roman</option>"#));
    assert!(page.contains(r#"<option value="thai1">"#));
    assert!(page.contains(r#"const apiEndpoint = "/process";"#));
}

// ---------------------------------------------------------------------------
// Test: a template file on disk takes precedence
// ---------------------------------------------------------------------------

#[tokio::test]
async fn serves_template_file_when_present() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "<html><body>custom editor</body></html>").unwrap();

    let mut config = common::test_config();
    config.index_template = file.path().to_path_buf();

    let response = get(common::build_test_app_with_config(config), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        "<html><body>custom editor</body></html>"
    );
}

// ---------------------------------------------------------------------------
// Test: an unreadable template is a sanitized 500
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreadable_template_returns_500() {
    // A directory cannot be read as a file.
    let dir = tempfile::tempdir().unwrap();

    let mut config = common::test_config();
    config.index_template = dir.path().to_path_buf();

    let response = get(common::build_test_app_with_config(config), "/").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body_text(response).await.contains(&dir.path().display().to_string()));
}
