mod common;

use std::sync::Arc;

#[tokio::test]
async fn test_full_link_lifecycle() {
    let server = common::create_test_server(common::memory_store());

    let code = common::shorten(&server, "https://example.com").await;
    let path = format!("/{code}");

    let response = server.get(&path).await;
    assert_eq!(response.status_code(), 301);
    assert_eq!(response.header("location"), "https://example.com");

    let response = server.delete(&path).await;
    assert_eq!(response.status_code(), 204);
    assert!(response.text().is_empty());

    server.get(&path).await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_never_created() {
    let server = common::create_test_server(common::memory_store());

    let response = server.delete("/nosuchcd").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "URL not found or already deleted");
}

#[tokio::test]
async fn test_delete_twice() {
    let server = common::create_test_server(common::memory_store());
    let code = common::shorten(&server, "https://example.com").await;
    let path = format!("/{code}");

    assert_eq!(server.delete(&path).await.status_code(), 204);
    server.delete(&path).await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_empty_code() {
    let server = common::create_test_server(common::memory_store());

    let response = server.delete("/").await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "short code is required"
    );
}

#[tokio::test]
async fn test_delete_store_unavailable() {
    let server = common::create_test_server(Arc::new(common::UnavailableStore));

    let response = server.delete("/abcdEFGH").await;

    assert_eq!(response.status_code(), 500);
}
