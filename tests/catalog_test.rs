//! Comparing the local catalog with the backend's

mod common;

use common::FakeBackend;
use legalease::error::LegalEaseError;
use legalease::shell::compare_remote_catalog;
use legalease::HttpReply;
use legalease_common::document_types;
use serde_json::{json, Map, Value};

fn remote_catalog() -> Value {
    let mut types = Map::new();
    for t in document_types() {
        types.insert(
            t.id.to_string(),
            json!({"title": t.title, "fields": t.fields}),
        );
    }
    json!({"success": true, "document_types": types})
}

/// Identical catalogs report nothing
#[tokio::test]
async fn test_matching_remote_catalog() {
    let backend = FakeBackend::replying(HttpReply::json(200, &remote_catalog()));
    let differences = compare_remote_catalog(&backend).await.unwrap();
    assert!(differences.is_empty());
}

/// A gateway error page is reported by status, not as a JSON error
#[tokio::test]
async fn test_remote_catalog_html_error_page() {
    let backend = FakeBackend::replying(HttpReply::new(502, "<html>Bad Gateway</html>"));
    let err = compare_remote_catalog(&backend).await.unwrap_err();

    assert!(matches!(err, LegalEaseError::OperationFailed(_)));
    assert_eq!(err.to_string(), "document types request failed (502)");
}

/// A JSON error body on a failed reply is shown as is
#[tokio::test]
async fn test_remote_catalog_server_message() {
    let backend = FakeBackend::replying(HttpReply::json(
        500,
        &json!({"success": false, "error": "catalog unavailable"}),
    ));
    let err = compare_remote_catalog(&backend).await.unwrap_err();
    assert_eq!(err.to_string(), "catalog unavailable");
}
