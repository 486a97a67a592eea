use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::{debug, error, warn};

use super::pages;
use super::AppState;
use crate::constants::API_CACHE_CONTROL;
use crate::date::{is_valid, parse_route, route_path, Month};
use crate::github::{DiscussionKind, SearchError};
use crate::posts::JobPost;

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(latest))
        .route("/hiring", get(latest))
        .route("/hiring/:year/:month", get(board))
        .route("/api/v0/hiring/:ts", get(api_hiring))
        .route("/healthz", get(health))
}

/// Hiring posts for a month, through the cache.
///
/// Invalid months are empty and never cached. A failed fetch falls back to
/// an expired cache entry when one exists.
async fn load_posts(
    state: &AppState,
    month: Month,
    now: DateTime<Utc>,
) -> Result<Arc<Vec<JobPost>>, SearchError> {
    if !is_valid(month, now) {
        return Ok(Arc::new(Vec::new()));
    }

    let key = (DiscussionKind::Hiring, month);
    if let Some(posts) = state.cache.fresh(&key) {
        debug!(month = %month, "Serving cached posts");
        return Ok(posts);
    }

    match state.fetcher.hiring_posts(month, now).await {
        Ok(mut posts) => {
            if state.config.hide_empty_posts {
                posts.retain(|post| !post.is_empty());
            }
            let posts = Arc::new(posts);
            state.cache.insert(key, posts.clone());
            Ok(posts)
        }
        Err(e) => match state.cache.stale(&key) {
            Some(stale) => {
                warn!(month = %month, "Fetch failed, serving stale posts: {e}");
                Ok(stale)
            }
            None => Err(e),
        },
    }
}

// ========== HTML Routes ==========

async fn latest(State(state): State<AppState>) -> Redirect {
    Redirect::to(&route_path(Month::normalize(&state.clock.now())))
}

async fn board(
    State(state): State<AppState>,
    Path((year, month)): Path<(String, String)>,
) -> Response {
    let Some(route) = parse_route(&year, &month) else {
        let html = pages::render_not_found_page(&state.config.site_name);
        return (StatusCode::NOT_FOUND, Html(html.into_string())).into_response();
    };

    if !route.canonical {
        return Redirect::permanent(&route_path(route.month)).into_response();
    }

    let now = state.clock.now();
    let posts = match load_posts(&state, route.month, now).await {
        Ok(posts) => posts,
        Err(e) => {
            error!(month = %route.month, "Failed to fetch posts: {e}");
            let html = pages::render_unavailable_page(&state.config.site_name);
            return (StatusCode::BAD_GATEWAY, Html(html.into_string())).into_response();
        }
    };

    let html = pages::render_board_page(&pages::BoardView {
        month: route.month,
        posts: &posts,
        now,
        site_name: &state.config.site_name,
        repository: &state.config.search_repository,
    });
    Html(html.into_string()).into_response()
}

async fn health() -> &'static str {
    "OK"
}

// ========== API Routes ==========

/// Posts for the month containing a millisecond timestamp.
///
/// A timestamp that is not a number, or is zero, means now.
async fn api_hiring(State(state): State<AppState>, Path(ts): Path<String>) -> Response {
    let now = state.clock.now();
    let at = ts
        .parse::<i64>()
        .ok()
        .filter(|ms| *ms != 0)
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .unwrap_or(now);
    let month = Month::normalize(&at);

    match load_posts(&state, month, now).await {
        Ok(posts) if posts.is_empty() => {
            (StatusCode::NOT_FOUND, Json(Vec::<JobPost>::new())).into_response()
        }
        Ok(posts) => (
            [(header::CACHE_CONTROL, API_CACHE_CONTROL)],
            Json(posts.as_slice()),
        )
            .into_response(),
        Err(e) => {
            error!(month = %month, "Failed to fetch posts: {e}");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "Failed to fetch posts" })),
            )
                .into_response()
        }
    }
}
