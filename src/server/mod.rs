//! HTTP server assembly
//!
//! The completion provider in `AppState` is optional: without a credential
//! the server still boots and serves the frontend and topic list, and
//! `/debate` reports the missing client.

pub mod routes;
mod static_site;

pub use static_site::StaticSite;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::context::ContextWindow;
use crate::llm::ChatProvider;

/// State shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Option<Arc<dyn ChatProvider>>,
    pub window: ContextWindow,
    pub site: StaticSite,
}

/// Build the application router. API routes take precedence over the
/// frontend catch-all.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/debate", post(routes::debate))
        .route("/suggested-topics", get(routes::suggested_topics))
        .route("/", get(routes::spa_root))
        .route("/*path", get(routes::spa_fallback))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
