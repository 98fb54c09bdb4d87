//! HTTP API handlers.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::config::VersionInfo;
use crate::greeting::hello_world;
use crate::types::{
    GreetingResponse, HealthResponse, MessageResponse, TestResponse, VersionResponse, ROOT_TEXT,
};

/// Application state shared with handlers.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Bindings served by `/version`, resolved once at startup.
    pub version: Arc<VersionInfo>,
}

impl AppState {
    /// Create new app state.
    pub fn new(version: VersionInfo) -> Self {
        Self {
            version: Arc::new(version),
        }
    }
}

/// Root handler - plain text banner.
pub async fn root() -> &'static str {
    ROOT_TEXT
}

/// Greeting handler.
pub async fn hello() -> Json<GreetingResponse> {
    Json(GreetingResponse::hello())
}

pub async fn api_hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: hello_world(),
    })
}

/// Version handler - reports the configured bindings.
pub async fn version(State(state): State<AppState>) -> Json<VersionResponse> {
    Json(state.version.to_response())
}

/// Health check handler - always returns 200.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Smoke-test handler.
pub async fn test() -> Json<TestResponse> {
    Json(TestResponse::ok())
}
