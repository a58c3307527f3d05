//! HTTP surface: routing, shared state, handlers, and views.
//!
//! One axum router with three routes plus a 404 fallback. The only shared
//! state is the definition service behind an `Arc`, read-only after startup.

pub mod handlers;
pub mod views;

use crate::ai::DefinitionService;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;

#[derive(Clone)]
pub struct AppState {
    pub definitions: Arc<dyn DefinitionService>,
}

impl AppState {
    pub fn new(definitions: Arc<dyn DefinitionService>) -> Self {
        Self { definitions }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/search", post(handlers::search))
        .route("/define", get(handlers::define))
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Last-resort boundary: a panic anywhere in a handler is logged and turned
/// into the search form view with a 500 status instead of a dropped
/// connection.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!("Unhandled panic while serving a request: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(views::index_page(Some((
            "error",
            "An unexpected error occurred. Please try again later.",
        )))),
    )
        .into_response()
}
