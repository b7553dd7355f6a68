//! Integration tests for the route guard.

mod helpers;

use axum::http::{StatusCode, header};

use chrono::{Duration, Utc};
use socia_auth::SessionEncoder;
use socia_entity::user::{Identity, UserRole};

use helpers::{ADMIN_EMAIL, ADMIN_PASSWORD, TestApp};

const PROTECTED: [&str; 6] = [
    "/dashboard",
    "/dashboard/ads",
    "/dashboard/leads",
    "/dashboard/clients",
    "/dashboard/clients/acme",
    "/dashboard/reports",
];

#[tokio::test]
async fn test_protected_without_session_redirects() {
    let app = TestApp::new();

    for path in PROTECTED {
        let response = app.get(path, None).await;
        assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT, "{path}");
        assert_eq!(response.location(), Some("/"), "{path}");
        assert!(!response.text.contains("<main>"), "{path} rendered");
    }
}

#[tokio::test]
async fn test_unknown_protected_path_redirects_before_404() {
    let app = TestApp::new();

    let response = app.get("/dashboard/settings", None).await;

    assert!(response.is_redirect_to("/"));
}

#[tokio::test]
async fn test_protected_with_session_renders() {
    let app = TestApp::new();
    let cookie = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    for path in PROTECTED {
        let response = app.get(path, Some(&cookie)).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert!(response.text.contains("Admin User"), "{path}");
    }
}

#[tokio::test]
async fn test_bearer_token_is_accepted() {
    let app = TestApp::new();
    let cookie = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let token = cookie
        .split_once('=')
        .map(|(_, token)| token.to_string())
        .unwrap();

    let req = axum::http::Request::builder()
        .uri("/dashboard/ads")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("Ad Campaigns"));
}

#[tokio::test]
async fn test_public_paths_render_regardless_of_session() {
    let app = TestApp::new();
    let cookie = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    for path in ["/", "/login", "/api/health"] {
        let anonymous = app.get(path, None).await;
        let signed_in = app.get(path, Some(&cookie)).await;
        assert_eq!(anonymous.status, StatusCode::OK, "{path}");
        assert_eq!(signed_in.status, StatusCode::OK, "{path}");
    }
}

#[tokio::test]
async fn test_login_page_with_session_renders() {
    let app = TestApp::new();
    let cookie = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let response = app.get("/login", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("Welcome Back"));
}

#[tokio::test]
async fn test_login_page_redirects_when_enabled() {
    let mut config = helpers::test_config();
    config.routes.redirect_authenticated_from_login = true;
    let app = TestApp::with_config(config);
    let cookie = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let signed_in = app.get("/login", Some(&cookie)).await;
    let anonymous = app.get("/login", None).await;

    assert!(signed_in.is_redirect_to("/dashboard"));
    assert_eq!(anonymous.status, StatusCode::OK);
}

#[tokio::test]
async fn test_expired_token_is_treated_as_absent() {
    let app = TestApp::new();
    let identity = Identity::new("1", "Admin User", ADMIN_EMAIL, UserRole::Admin);
    let stale = SessionEncoder::new(&app.config.auth)
        .issue_at(&identity, Utc::now() - Duration::days(31))
        .unwrap();
    let cookie = format!("{}={}", app.config.session.cookie_name, stale.token);

    let response = app.get("/dashboard/clients", Some(&cookie)).await;
    assert!(response.is_redirect_to("/"));

    let session = app.get("/api/auth/session", Some(&cookie)).await;
    assert!(session.body["data"].is_null());
}

#[tokio::test]
async fn test_foreign_and_garbage_tokens_are_treated_as_absent() {
    let app = TestApp::new();
    let identity = Identity::new("1", "Admin User", ADMIN_EMAIL, UserRole::Admin);

    let mut foreign_auth = app.config.auth.clone();
    foreign_auth.session_secret = "some-other-secret".to_string();
    let foreign = SessionEncoder::new(&foreign_auth).issue(&identity).unwrap();

    for token in [foreign.token.as_str(), "not-a-token", "a.b.c"] {
        let cookie = format!("{}={}", app.config.session.cookie_name, token);
        let response = app.get("/dashboard", Some(&cookie)).await;
        assert!(response.is_redirect_to("/"), "{token}");
    }
}

#[tokio::test]
async fn test_segment_boundary_is_public() {
    let app = TestApp::new();

    let response = app.get("/dashboards", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_view_context_from_query() {
    let app = TestApp::new();
    let cookie = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let response = app
        .get("/dashboard/leads?client=acme&sidebar=collapsed", Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains(r#"data-active-client="acme""#));
    assert!(response.text.contains(r#"data-sidebar="collapsed""#));
    assert!(response.text.contains(r#"data-unread="3""#));

    let detail = app.get("/dashboard/clients/globex", Some(&cookie)).await;
    assert!(detail.text.contains(r#"data-active-client="globex""#));
}
