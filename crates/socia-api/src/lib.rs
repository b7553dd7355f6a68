//! # socia-api
//!
//! HTTP layer for the SOCIA dashboard built on Axum.
//!
//! Provides the login/logout/session endpoints, the route guard middleware
//! that protects dashboard pages, placeholder page handlers, request
//! logging, CORS, and the shared application state.

pub mod cookie;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod view;

pub use router::build_router;
pub use state::AppState;
