//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use socia_auth::store::InMemoryUserStore;
use socia_core::config::{AppConfig, SeedUser};

/// Dev login credentials enabled in the test config.
pub const ADMIN_EMAIL: &str = "admin@agency.com";
pub const ADMIN_PASSWORD: &str = "password";

/// Seeded store user.
pub const MANAGER_EMAIL: &str = "maya@agency.com";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a test application with the dev login enabled and one store user
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a test application from an explicit config
    pub fn with_config(config: AppConfig) -> Self {
        config
            .validate("test")
            .expect("Test config should be valid");

        let store =
            InMemoryUserStore::from_config(&config.users).expect("Failed to seed user store");
        let state = socia_api::AppState::new(config.clone(), Arc::new(store))
            .expect("Failed to build app state");
        let router = socia_api::build_router(state);

        Self { router, config }
    }

    /// Log in through the JSON endpoint and return the `name=value` cookie pair
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post_json(
                "/api/auth/login",
                serde_json::json!({ "email": email, "password": password }),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .session_cookie(&self.config.session.cookie_name)
            .expect("No session cookie in login response")
    }

    /// GET a path with an optional cookie pair
    pub async fn get(&self, path: &str, cookie: Option<&str>) -> TestResponse {
        let mut req = Request::builder().method("GET").uri(path);
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }
        self.send(req.body(Body::empty()).expect("Failed to build request"))
            .await
    }

    /// POST a JSON body with an optional cookie pair
    pub async fn post_json(&self, path: &str, body: Value, cookie: Option<&str>) -> TestResponse {
        let body_str = serde_json::to_string(&body).expect("Failed to serialize body");
        let mut req = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }
        self.send(req.body(Body::from(body_str)).expect("Failed to build request"))
            .await
    }

    /// POST a urlencoded form
    pub async fn post_form(&self, path: &str, form: &str) -> TestResponse {
        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Send a prepared request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            text,
        }
    }
}

/// Config used by most integration tests
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.session_secret = "integration-test-secret".to_string();
    config.auth.dev_login.enabled = true;
    config.users.seed = vec![SeedUser {
        id: "2".to_string(),
        name: "Maya Torres".to_string(),
        email: MANAGER_EMAIL.to_string(),
        role: "MANAGER".to_string(),
    }];
    config
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body, `Null` for non-JSON bodies
    pub body: Value,
    /// Raw body text
    pub text: String,
}

impl TestResponse {
    /// The `Location` header, if any
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// All `Set-Cookie` header values
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect()
    }

    /// The `name=value` pair of a non-empty cookie with the given name
    pub fn session_cookie(&self, name: &str) -> Option<String> {
        self.set_cookies().into_iter().find_map(|c| {
            let pair = c.split(';').next()?.trim().to_string();
            let value = pair.strip_prefix(&format!("{name}="))?;
            (!value.is_empty()).then(|| pair.clone())
        })
    }

    /// Whether the response is a redirect to `target`
    pub fn is_redirect_to(&self, target: &str) -> bool {
        self.status.is_redirection() && self.location() == Some(target)
    }
}
