mod common;

use kv_shortener::domain::store::KvStore;
use serde_json::{Value, json};
use std::sync::Arc;

#[tokio::test]
async fn test_delete_existing_link() {
    let app = common::spawn_app();
    app.server
        .post("/api/create")
        .json(&json!({ "content": "https://example.com", "customCode": "bye" }))
        .await
        .assert_status_ok();

    let response = app.server.delete("/api/delete/bye").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["success"], true);
    assert!(json["message"].is_string());

    assert_eq!(app.server.get("/bye").await.status_code(), 404);
    assert!(app.store.get("bye").await.unwrap().is_none());
    assert!(
        app.state
            .link_service
            .index()
            .codes()
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let app = common::spawn_app();
    app.server
        .post("/api/create")
        .json(&json!({ "content": "x", "customCode": "once" }))
        .await
        .assert_status_ok();

    app.server.delete("/api/delete/once").await.assert_status_ok();

    let response = app.server.delete("/api/delete/once").await;
    assert_eq!(response.status_code(), 404);
    let json = response.json::<Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Short link not found");
}

#[tokio::test]
async fn test_delete_keeps_other_links() {
    let app = common::spawn_app();
    for code in ["one", "two", "three"] {
        app.server
            .post("/api/create")
            .json(&json!({ "content": code, "customCode": code }))
            .await
            .assert_status_ok();
    }

    app.server.delete("/api/delete/two").await.assert_status_ok();

    let codes: Vec<String> = app
        .state
        .link_service
        .list_live()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.code)
        .collect();
    assert_eq!(codes, vec!["one", "three"]);
}

#[tokio::test]
async fn test_delete_store_failure() {
    let server = common::spawn_app_on(Arc::new(common::DownStore));

    let response = server.delete("/api/delete/abc").await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(response.json::<Value>()["success"], false);
}
