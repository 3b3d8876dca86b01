use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use super::ResultsResponse;
use crate::domain::{CanonicalItem, ChapterRef};
use crate::modules::gateway::state::AppState;
use crate::shared::errors::error_json;

const DEFAULT_LISTING_LIMIT: u32 = 20;
const DEFAULT_FEED_LIMIT: u32 = 500;

#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ChaptersResponse {
    pub chapters: Vec<ChapterRef>,
}

#[derive(Debug, Serialize)]
pub struct PagesResponse {
    pub pages: Vec<String>,
}

pub async fn recent(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListingQuery>,
) -> Response {
    let limit = params.limit.unwrap_or(DEFAULT_LISTING_LIMIT);
    let offset = params.offset.unwrap_or(0);

    match state.manga.recent(limit, offset).await {
        Ok(results) => Json(ResultsResponse { results }).into_response(),
        Err(e) => {
            log::error!("Manga recent error: {}", e);
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
    let limit = params.limit.unwrap_or(DEFAULT_LISTING_LIMIT);

    match state.manga.search(query, limit).await {
        Ok(results) => Json(ResultsResponse { results }).into_response(),
        Err(e) => {
            log::error!("Manga search error: {}", e);
            error_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to search manga",
                Some(e.to_string()),
            )
        }
    }
}

pub async fn info(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match state.manga.info(&id).await {
        Ok(manga) => Json(manga).into_response(),
        Err(e) => {
            log::error!("Manga info error: {}", e);
            error_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch manga info",
                Some(e.to_string()),
            )
        }
    }
}

pub async fn chapters(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<ListingQuery>,
) -> Response {
    let limit = params.limit.unwrap_or(DEFAULT_FEED_LIMIT);
    let offset = params.offset.unwrap_or(0);

    match state.manga.chapters(&id, limit, offset).await {
        Ok(chapters) => Json(ChaptersResponse { chapters }).into_response(),
        Err(e) => {
            log::error!("Chapters error: {}", e);
            error_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch chapters",
                Some(e.to_string()),
            )
        }
    }
}

pub async fn chapter_pages(
    State(state): State<Arc<AppState>>,
    Path(chapter_id): Path<String>,
) -> Response {
    match state.manga.chapter_pages(&chapter_id).await {
        Ok(pages) => Json(PagesResponse { pages }).into_response(),
        Err(e) => {
            log::error!("Chapter pages error: {}", e);
            error_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch chapter pages",
                Some(e.to_string()),
            )
        }
    }
}
