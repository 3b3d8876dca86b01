use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::handlers::{anime, health, manga, media_proxy, movie};
use super::state::AppState;
use crate::shared::GatewayConfig;

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        // Manga (MangaDex)
        .route("/content/manga/recent", get(manga::recent))
        .route("/content/manga/search", get(manga::search))
        .route("/content/manga/chapter/:chapter_id", get(manga::chapter_pages))
        .route(
            "/content/manga/cover/:manga_id/:file_name",
            get(media_proxy::manga_cover),
        )
        .route("/content/manga/:id/info", get(manga::info))
        .route("/content/manga/:id/chapters", get(manga::chapters))
        // Anime (gogoanime with zoro fallback)
        .route("/content/anime/recent", get(anime::recent))
        .route("/content/anime/search", get(anime::search))
        .route("/content/anime/watch/:episode_id", get(anime::watch))
        .route("/content/anime/:id/episodes", get(anime::episodes))
        // Movies (flixhq)
        .route("/content/movie/recent", get(movie::recent))
        .route("/content/movie/search", get(movie::search))
        .route("/content/movie/watch/:episode_id", get(movie::watch))
        .route("/content/movie/:id/episodes", get(movie::info))
        .with_state(state)
        .layer(cors)
}

fn cors_layer(config: &GatewayConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
