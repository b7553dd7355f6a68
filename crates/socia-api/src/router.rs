//! Route definitions for the SOCIA HTTP server.
//!
//! Pages live at the root, JSON endpoints under `/api`. The route guard is
//! layered over the whole router, fallback included, so classification sees
//! every request path before anything renders.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use socia_core::error::AppError;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(page_routes())
        .merge(dashboard_routes())
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::guard::route_guard,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Public pages: landing and login
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::landing))
        .route(
            "/login",
            get(handlers::pages::login_page).post(handlers::auth::login_form),
        )
}

/// Protected dashboard pages
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(handlers::pages::overview))
        .route("/dashboard/ads", get(handlers::pages::ads))
        .route("/dashboard/leads", get(handlers::pages::leads))
        .route("/dashboard/clients", get(handlers::pages::clients))
        .route("/dashboard/clients/{id}", get(handlers::pages::client_detail))
        .route("/dashboard/reports", get(handlers::pages::reports))
}

/// Auth endpoints: login, logout, session
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route(
            "/auth/logout",
            post(handlers::auth::logout).get(handlers::auth::logout),
        )
        .route("/auth/session", get(handlers::auth::session))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

async fn not_found() -> AppError {
    AppError::not_found("Page not found")
}
