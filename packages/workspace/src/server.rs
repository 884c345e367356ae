//! # Content Resource
//!
//! HTTP face of the [`ContentRepository`] at `/__editor/content`.
//!
//! | method | success                         | failure                      |
//! |--------|---------------------------------|------------------------------|
//! | GET    | 200, the document               | 500, `{"error": "..."}`      |
//! | PUT    | 200, `{"ok":true,"savedAt":..}` | 400, `{"error": "..."}`      |
//!
//! A PUT body that isn't JSON, or is JSON missing a section, is a 400.
//! An accepted body is written as received (pretty-printed), including keys
//! the schema doesn't know. File access runs on the blocking pool.

use crate::repository::ContentRepository;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use dwd_editor::CONTENT_ENDPOINT;
use serde::Serialize;
use serde_json::Value;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Router serving only the content resource
pub fn content_router(repository: Arc<ContentRepository>) -> Router {
    Router::new()
        .route(CONTENT_ENDPOINT, get(read_content).put(write_content))
        .with_state(repository)
}

/// Full dev-server app: content resource, optional static files, permissive CORS
pub fn app(repository: Arc<ContentRepository>, static_dir: Option<PathBuf>) -> Router {
    let router = content_router(repository);

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true)),
        None => router,
    };

    router.layer(CorsLayer::permissive())
}

/// Bind `addr` and serve until the process exits
pub async fn serve(
    addr: SocketAddr,
    repository: ContentRepository,
    static_dir: Option<PathBuf>,
) -> std::io::Result<()> {
    tracing::info!(
        %addr,
        data = ?repository.data_path(),
        "content editor listening on {}",
        CONTENT_ENDPOINT
    );

    let app = app(Arc::new(repository), static_dir);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn read_content(State(repository): State<Arc<ContentRepository>>) -> Response {
    let file_name = repository.data_file_name();

    match tokio::task::spawn_blocking(move || repository.read()).await {
        Ok(Ok(document)) => (StatusCode::OK, Json(document)).into_response(),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "failed to read content");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to read {}", file_name),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "content read task failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to read {}", file_name),
            )
        }
    }
}

async fn write_content(
    State(repository): State<Arc<ContentRepository>>,
    body: Bytes,
) -> Response {
    let body: Value = match serde_json::from_slice(&body) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, "rejected content body");
            return error_response(StatusCode::BAD_REQUEST, "Failed to save content data");
        }
    };

    match tokio::task::spawn_blocking(move || repository.write_json(&body)).await {
        Ok(Ok(receipt)) => (StatusCode::OK, Json(receipt)).into_response(),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "failed to save content");
            error_response(StatusCode::BAD_REQUEST, "Failed to save content data")
        }
        Err(e) => {
            tracing::error!(error = %e, "content write task failed");
            error_response(StatusCode::BAD_REQUEST, "Failed to save content data")
        }
    }
}
