//! edumentor-server: HTTP API over the edumentor core.
//!
//! The server shares one read-only [`ContentLibrary`] across requests; there
//! is no endpoint that mutates it.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use edumentor_core::{AssessmentEngine, ContentLibrary, PathGenerator};

pub mod api;

/// Shown when the server starts and returned by `/health`.
pub const EDUCATIONAL_DISCLAIMER: &str = "This tool provides AI-assisted educational recommendations only. \
     Learning plans should be reviewed by qualified educators. \
     This tool does not replace professional pedagogical assessment.";

/// Application state shared across HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub generator: PathGenerator,
    pub engine: AssessmentEngine,
}

impl AppState {
    pub fn new(library: impl Into<Arc<ContentLibrary>>) -> Self {
        Self {
            generator: PathGenerator::new(library),
            engine: AssessmentEngine::new(),
        }
    }

    pub fn library(&self) -> &ContentLibrary {
        self.generator.library()
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health_check))
        .route("/api/subjects", get(api::list_subjects))
        .route("/api/content", get(api::search_content))
        .route("/api/path", post(api::generate_path))
        .route("/api/assess", post(api::run_assessment))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `bind_addr` and serve until the process is stopped.
pub async fn start(bind_addr: &str, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
