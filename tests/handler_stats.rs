mod common;

use chrono::Duration;
use serde_json::{Value, json};

#[tokio::test]
async fn test_links_api_requires_session() {
    let app = common::spawn_app();

    let response = app.server.get("/api/links").await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(response.json::<Value>()["success"], false);
}

#[tokio::test]
async fn test_stats_page_without_session_shows_password_form() {
    let app = common::spawn_app();

    let response = app.server.get("/stats").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("type=\"password\""));
    assert!(!body.contains("<table>"));
}

#[tokio::test]
async fn test_validate_wrong_password() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/validate")
        .json(&json!({ "password": "wrong" }))
        .await;

    assert_eq!(response.status_code(), 401);
    let json = response.json::<Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Invalid password");
    assert!(response.headers().get("set-cookie").is_none());
}

#[tokio::test]
async fn test_validate_sets_signed_session_cookie() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/validate")
        .json(&json!({ "password": common::TEST_PASSWORD }))
        .await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "/stats");

    let set_cookie = response.header("set-cookie");
    let set_cookie = set_cookie.to_str().unwrap();
    assert!(set_cookie.starts_with("stats_session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Max-Age=3600"));
}

#[tokio::test]
async fn test_session_unlocks_stats() {
    let app = common::spawn_app();
    for (content, code) in [("https://example.com", "site"), ("some text", "text")] {
        app.server
            .post("/api/create")
            .json(&json!({ "content": content, "customCode": code }))
            .await
            .assert_status_ok();
    }
    app.server.get("/site").await;

    let cookie = common::login(&app.server).await;

    let response = app.server.get("/api/links").add_header("Cookie", cookie.clone()).await;
    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["total"], 2);
    assert_eq!(json["links"][0]["shortCode"], "site");
    assert_eq!(json["links"][0]["clicks"], 1);
    assert_eq!(json["links"][0]["isUrl"], true);
    assert_eq!(json["links"][1]["isUrl"], false);

    let response = app
        .server
        .get("/stats")
        .add_header("Cookie", format!("theme=dark; {}", cookie))
        .await;
    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("<table>"));
    assert!(body.contains("href=\"/site\""));
    assert!(body.contains("some text"));
}

#[tokio::test]
async fn test_stats_purges_expired_links() {
    let app = common::spawn_app_with_lagging_store();
    app.server
        .post("/api/create")
        .json(&json!({ "content": "short lived", "customCode": "tmp", "expiration": "10m" }))
        .await
        .assert_status_ok();
    app.server
        .post("/api/create")
        .json(&json!({ "content": "long lived", "customCode": "keep", "expiration": "7d" }))
        .await
        .assert_status_ok();

    let cookie = common::login(&app.server).await;
    app.clock.advance(Duration::minutes(30));

    let response = app.server.get("/api/links").add_header("Cookie", cookie).await;
    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["total"], 1);
    assert_eq!(json["links"][0]["shortCode"], "keep");
}

#[tokio::test]
async fn test_session_expires() {
    let app = common::spawn_app();
    let cookie = common::login(&app.server).await;

    app.clock.advance(Duration::minutes(59));
    app.server
        .get("/api/links")
        .add_header("Cookie", cookie.clone())
        .await
        .assert_status_ok();

    app.clock.advance(Duration::minutes(1));
    let response = app.server.get("/api/links").add_header("Cookie", cookie).await;
    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_forged_cookies_rejected() {
    let app = common::spawn_app();

    for cookie in [
        "validated=true",
        "stats_session=true",
        "stats_session=99999999999.deadbeef",
    ] {
        let response = app.server.get("/api/links").add_header("Cookie", cookie).await;
        assert_eq!(response.status_code(), 401, "cookie {:?}", cookie);
    }
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = common::spawn_app();

    let response = app.server.post("/logout").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "/u");
    let set_cookie = response.header("set-cookie");
    assert!(set_cookie.to_str().unwrap().contains("Max-Age=0"));
}

#[tokio::test]
async fn test_root_redirects_to_home() {
    let app = common::spawn_app();

    let response = app.server.get("/").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "/u");
}

#[tokio::test]
async fn test_home_page_renders_form() {
    let app = common::spawn_app();

    let response = app.server.get("/u").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("/api/create"));
    for class in ["never", "10m", "30m", "1h", "24h", "7d", "30d"] {
        assert!(body.contains(&format!("value=\"{}\"", class)));
    }
}

#[tokio::test]
async fn test_api_allows_cross_origin_calls() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/api/create")
        .add_header("Origin", "https://elsewhere.example")
        .json(&json!({ "content": "x" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
}
