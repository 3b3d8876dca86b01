use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;

use super::ResultsResponse;
use crate::domain::CanonicalItem;
use crate::modules::gateway::state::AppState;
use crate::shared::errors::error_json;

const DEFAULT_WATCH_SERVER: &str = "gogocdn";

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WatchQuery {
    pub server: Option<String>,
}

pub async fn recent(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageQuery>,
) -> Response {
    let page = params.page.unwrap_or(1);

    match state.anime.recent_episodes(page).await {
        Some(outcome) => {
            log::debug!("Recent episodes served by {}", outcome.provider);
            Json(ResultsResponse {
                results: outcome.data,
            })
            .into_response()
        }
        None => Json(ResultsResponse::<CanonicalItem>::empty()).into_response(),
    }
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Response {
    let Some(query) = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
    else {
        return error_json(StatusCode::BAD_REQUEST, "Search query is required", None);
    };

    match state.anime.search(query).await {
        Some(outcome) => {
            log::debug!("Anime search served by {}", outcome.provider);
            Json(ResultsResponse {
                results: outcome.data,
            })
            .into_response()
        }
        None => Json(ResultsResponse::<CanonicalItem>::empty()).into_response(),
    }
}

pub async fn episodes(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match state.anime.info(&id).await {
        Some(outcome) => {
            log::debug!("Anime info for '{}' served by {}", id, outcome.provider);
            Json(outcome.data).into_response()
        }
        None => error_json(StatusCode::NOT_FOUND, "Anime not found", None),
    }
}

pub async fn watch(
    State(state): State<Arc<AppState>>,
    Path(episode_id): Path<String>,
    Query(params): Query<WatchQuery>,
) -> Response {
    let server = params.server.as_deref().unwrap_or(DEFAULT_WATCH_SERVER);

    match state.anime.watch(&episode_id, server).await {
        Some(outcome) => {
            log::debug!(
                "Streaming links for '{}' served by {}",
                episode_id,
                outcome.provider
            );
            Json(outcome.data).into_response()
        }
        None => error_json(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch streaming links",
            Some("all providers failed".to_string()),
        ),
    }
}
