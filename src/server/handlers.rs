//! Request handlers for the search form, result page, and JSON API.

use super::views;
use super::AppState;
use crate::models::{WordQuery, WordQueryError};
use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

/// Flash-style message carried back to the search form via the query string.
#[derive(Debug, Deserialize, Default)]
pub struct NoticeParams {
    pub notice: Option<String>,
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub word: String,
}

#[derive(Debug, Deserialize)]
pub struct DefineParams {
    pub word: Option<String>,
}

/// `GET /` - search form, with an optional notice banner after a redirect.
pub async fn index(Query(params): Query<NoticeParams>) -> Html<String> {
    let notice = params
        .notice
        .as_deref()
        .map(|message| (params.kind.as_deref().unwrap_or("error"), message));
    Html(views::index_page(notice))
}

/// `POST /search` - validate the submitted word, look it up, and render the
/// result page. Invalid input and lookup failures redirect back to the form
/// with a notice instead of surfacing an error page.
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Response {
    let query = match WordQuery::parse(&form.word) {
        Ok(query) => query,
        Err(e) => {
            let kind = match e {
                WordQueryError::Empty => "warning",
                WordQueryError::Invalid => "error",
            };
            return redirect_with_notice(kind, &e.to_string()).into_response();
        }
    };

    match state.definitions.lookup(query.as_str()).await {
        Ok(entry) => Html(views::result_page(query.as_str(), &entry)).into_response(),
        Err(e) => redirect_with_notice("error", &e.to_string()).into_response(),
    }
}

/// `GET /define?word=` - JSON lookup endpoint.
///
/// Missing or invalid words are client errors (400) and never reach the
/// definition service; lookup failures map to a 500 with the failure body.
pub async fn define(
    State(state): State<AppState>,
    Query(params): Query<DefineParams>,
) -> (StatusCode, Json<serde_json::Value>) {
    let raw = match params.word {
        Some(word) => word,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "error": "Missing required query parameter: word"
                })),
            );
        }
    };

    let query = match WordQuery::parse(&raw) {
        Ok(query) => query,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": e.to_string() })),
            );
        }
    };

    match state.definitions.lookup(query.as_str()).await {
        Ok(entry) => (
            StatusCode::OK,
            Json(json!({ "success": true, "word": query.as_str(), "data": entry })),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "success": false, "error": e.to_string() })),
        ),
    }
}

/// Fallback for unknown routes: the search form with a 404 status.
pub async fn not_found() -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(views::index_page(Some((
            "warning",
            "Page not found. Try searching for a word below.",
        )))),
    )
}

fn redirect_with_notice(kind: &str, message: &str) -> Redirect {
    let query = serde_urlencoded::to_string([("kind", kind), ("notice", message)])
        .unwrap_or_default();
    Redirect::to(&format!("/?{}", query))
}
