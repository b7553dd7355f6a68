//! Integration tests for the login, logout, and session endpoints.

mod helpers;

use axum::http::StatusCode;

use helpers::{ADMIN_EMAIL, ADMIN_PASSWORD, MANAGER_EMAIL, TestApp};

#[tokio::test]
async fn test_login_dev_credentials() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/auth/login",
            serde_json::json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let user = &response.body["data"]["user"];
    assert_eq!(user["id"], "1");
    assert_eq!(user["name"], "Admin User");
    assert_eq!(user["email"], ADMIN_EMAIL);
    assert_eq!(user["role"], "ADMIN");
    assert!(response.body["data"]["expires_at"].is_string());

    let cookies = response.set_cookies();
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("socia.session-token="));
    assert!(cookies[0].contains("HttpOnly"));
    assert!(cookies[0].contains("SameSite=Lax"));
    assert!(cookies[0].contains("Max-Age=2592000"));
}

#[tokio::test]
async fn test_login_store_user_case_insensitive() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/auth/login",
            serde_json::json!({ "email": "Maya@Agency.com", "password": "anything" }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["user"]["email"], MANAGER_EMAIL);
    assert_eq!(response.body["data"]["user"]["role"], "MANAGER");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/auth/login",
            serde_json::json!({ "email": "ghost@agency.com", "password": "password" }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid email or password");
    assert!(response.set_cookies().is_empty());
}

#[tokio::test]
async fn test_login_malformed_input_is_generic() {
    let app = TestApp::new();

    let missing = app
        .post_json(
            "/api/auth/login",
            serde_json::json!({ "email": ADMIN_EMAIL }),
            None,
        )
        .await;
    let blank = app
        .post_json(
            "/api/auth/login",
            serde_json::json!({ "email": "", "password": "" }),
            None,
        )
        .await;

    for response in [missing, blank] {
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["message"], "Invalid email or password");
        assert!(response.set_cookies().is_empty());
    }
}

#[tokio::test]
async fn test_login_bypass_disabled_falls_through_to_store() {
    let mut config = helpers::test_config();
    config.auth.dev_login.enabled = false;
    let app = TestApp::with_config(config);

    let response = app
        .post_json(
            "/api/auth/login",
            serde_json::json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.set_cookies().is_empty());
}

#[tokio::test]
async fn test_login_store_rejected_without_verifier() {
    let mut config = helpers::test_config();
    config.auth.allow_unverified_store_login = false;
    let app = TestApp::with_config(config);

    let response = app
        .post_json(
            "/api/auth/login",
            serde_json::json!({ "email": MANAGER_EMAIL, "password": "anything" }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_form_login_redirects_to_dashboard() {
    let app = TestApp::new();

    let response = app
        .post_form("/login", "email=admin%40agency.com&password=password")
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/dashboard"));
    assert!(response.session_cookie("socia.session-token").is_some());
}

#[tokio::test]
async fn test_form_login_rejection_returns_to_login() {
    let app = TestApp::new();

    let response = app
        .post_form("/login", "email=ghost%40agency.com&password=nope")
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/login?error=CredentialsSignin"));
    assert!(response.set_cookies().is_empty());

    let page = app.get("/login?error=CredentialsSignin", None).await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.text.contains("Invalid email or password."));
}

#[tokio::test]
async fn test_session_endpoint() {
    let app = TestApp::new();

    let anonymous = app.get("/api/auth/session", None).await;
    assert_eq!(anonymous.status, StatusCode::OK);
    assert!(anonymous.body["data"].is_null());

    let cookie = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let signed_in = app.get("/api/auth/session", Some(&cookie)).await;
    assert_eq!(signed_in.status, StatusCode::OK);
    assert_eq!(signed_in.body["data"]["user"]["id"], "1");
    assert_eq!(signed_in.body["data"]["user"]["role"], "ADMIN");

    let expires_at: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(signed_in.body["data"]["expires_at"].clone()).unwrap();
    let remaining = expires_at - chrono::Utc::now();
    assert!(remaining > chrono::Duration::days(29));
    assert!(remaining <= chrono::Duration::days(30));
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new();
    let cookie = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let response = app.post_json("/api/auth/logout", serde_json::json!({}), Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));

    let cookies = response.set_cookies();
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("socia.session-token=;"));
    assert!(cookies[0].contains("Max-Age=0"));
    assert!(response.session_cookie("socia.session-token").is_none());
}

#[tokio::test]
async fn test_logout_via_get() {
    let app = TestApp::new();

    let response = app.get("/api/auth/logout", None).await;

    assert!(response.is_redirect_to("/"));
    assert_eq!(response.set_cookies().len(), 1);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.get("/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
