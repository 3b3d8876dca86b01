use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;

use super::ResultsResponse;
use crate::domain::CanonicalItem;
use crate::modules::gateway::state::AppState;
use crate::shared::errors::error_json;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct WatchQuery {
    #[serde(rename = "mediaId")]
    pub media_id: Option<String>,
}

pub async fn recent(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageQuery>,
) -> Response {
    let page = params.page.unwrap_or(1);

    match state.movies.recent(page).await {
        Ok(results) => Json(ResultsResponse { results }).into_response(),
        Err(e) => {
            log::error!("Movie recent error: {}", e);
            Json(ResultsResponse::<CanonicalItem>::empty()).into_response()
        }
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
    let page = params.page.unwrap_or(1);

    match state.movies.search(query, page).await {
        Ok(results) => Json(ResultsResponse { results }).into_response(),
        Err(e) => {
            log::error!("Movie search error: {}", e);
            Json(ResultsResponse::<CanonicalItem>::empty()).into_response()
        }
    }
}

pub async fn info(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match state.movies.info(&id).await {
        Ok(movie) => Json(movie).into_response(),
        Err(e) => {
            log::error!("Movie info error: {}", e);
            error_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch movie info",
                Some(e.to_string()),
            )
        }
    }
}

pub async fn watch(
    State(state): State<Arc<AppState>>,
    Path(episode_id): Path<String>,
    Query(params): Query<WatchQuery>,
) -> Response {
    match state
        .movies
        .watch(&episode_id, params.media_id.as_deref())
        .await
    {
        Ok(stream) => Json(stream).into_response(),
        Err(e) => {
            log::error!("Movie watch error: {}", e);
            error_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch movie streaming links",
                Some(e.to_string()),
            )
        }
    }
}
