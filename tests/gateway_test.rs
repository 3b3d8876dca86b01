//! End-to-end tests for the HTTP surface: router -> orchestrator -> fetch
//! client against a wiremock upstream.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use streamhub_lib::modules::gateway::{build_router, AppState};
use streamhub_lib::modules::provider::RetryPolicy;
use streamhub_lib::shared::GatewayConfig;

fn test_router(upstream: &str) -> Router {
    let policy = RetryPolicy::new(1, Duration::from_millis(10), Duration::from_secs(2));
    let config = GatewayConfig {
        consumet_url: upstream.to_string(),
        mangadex_url: upstream.to_string(),
        mangadex_uploads_url: upstream.to_string(),
        frontend_url: "http://localhost:3000".to_string(),
        port: 0,
        api_retry: policy,
        media_retry: policy,
    };
    build_router(Arc::new(AppState::new(config)))
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, body.to_vec())
}

async fn get_json(router: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(router, uri).await;
    let value = serde_json::from_slice(&body).expect("JSON body");
    (status, value)
}

#[tokio::test]
async fn recent_anime_degrades_to_empty_when_all_providers_are_down() {
    // No mocks mounted: every provider call 404s.
    let server = MockServer::start().await;
    let router = test_router(&server.uri());

    let (status, value) = get_json(&router, "/content/anime/recent?page=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value, serde_json::json!({"results": []}));
}

#[tokio::test]
async fn anime_search_requires_a_query() {
    let server = MockServer::start().await;
    let router = test_router(&server.uri());

    let (status, value) = get_json(&router, "/content/anime/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"], serde_json::json!("Search query is required"));

    let (status, _) = get_json(&router, "/content/anime/search?q=%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn anime_search_falls_back_to_second_provider() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/anime/gogoanime/naruto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/anime/zoro/naruto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{
                "id": "naruto",
                "title": "Naruto",
                "image": "https://cdn.example/naruto.png",
                "subOrDub": "sub",
                "status": "Completed"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let router = test_router(&server.uri());
    let (status, value) = get_json(&router, "/content/anime/search?q=naruto").await;

    assert_eq!(status, StatusCode::OK);
    let results = value["results"].as_array().expect("results array");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], serde_json::json!("naruto"));
    assert_eq!(results[0]["subOrDub"], serde_json::json!("sub"));
}

#[tokio::test]
async fn anime_info_answers_404_when_no_provider_has_it() {
    let server = MockServer::start().await;
    let router = test_router(&server.uri());

    let (status, value) = get_json(&router, "/content/anime/missing-show/episodes").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(value["error"], serde_json::json!("Anime not found"));
}

#[tokio::test]
async fn manga_info_is_canonical_and_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/manga/manga-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "id": "manga-1",
                "attributes": {
                    "title": {"ja-ro": "Shingeki no Kyojin", "en": "Attack on Titan"},
                    "description": {"en": "Humanity fights."},
                    "status": "completed",
                    "year": 2009,
                    "contentRating": "safe",
                    "tags": [{"attributes": {"name": {"en": "Action"}}}]
                },
                "relationships": [
                    {"id": "c1", "type": "cover_art", "attributes": {"fileName": "cover.jpg"}}
                ]
            }
        })))
        .expect(2)
        .mount(&server)
        .await;

    let router = test_router(&server.uri());
    let (status, first) = get(&router, "/content/manga/manga-1/info").await;
    assert_eq!(status, StatusCode::OK);

    let value: serde_json::Value = serde_json::from_slice(&first).expect("JSON body");
    assert_eq!(value["title"], serde_json::json!("Attack on Titan"));
    assert_eq!(
        value["image"],
        serde_json::json!("/content/manga/cover/manga-1/cover.jpg")
    );
    assert_eq!(value["tags"], serde_json::json!(["Action"]));

    // Same id, unchanged upstream: byte-identical canonical JSON.
    let (_, second) = get(&router, "/content/manga/manga-1/info").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn manga_chapters_are_filtered_and_numerically_sorted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/manga/manga-1/feed"))
        .and(query_param("translatedLanguage[]", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {"id": "c10", "attributes": {"chapter": "10", "title": "Ten", "pages": 20, "publishAt": "2024-03-01T00:00:00+00:00"}},
                {"id": "c2", "attributes": {"chapter": "2", "title": null, "pages": 18, "publishAt": "2024-01-01T00:00:00+00:00"}},
                {"id": "c15", "attributes": {"chapter": "1.5", "title": "Extra", "pages": 8, "publishAt": "2024-02-01T00:00:00+00:00"}},
                {"id": "bad", "attributes": {"chapter": "abc", "title": "Broken", "pages": 1, "publishAt": "2024-02-02T00:00:00+00:00"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let router = test_router(&server.uri());
    let (status, value) = get_json(&router, "/content/manga/manga-1/chapters").await;

    assert_eq!(status, StatusCode::OK);
    let chapters = value["chapters"].as_array().expect("chapters array");
    let order: Vec<&str> = chapters
        .iter()
        .map(|c| c["chapter"].as_str().unwrap())
        .collect();
    assert_eq!(order, vec!["1.5", "2", "10"]);
    assert_eq!(chapters[1]["title"], serde_json::json!("Chapter 2"));
}

#[tokio::test]
async fn chapter_pages_compose_at_home_urls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/at-home/server/chapter-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "baseUrl": "https://pages.example",
            "chapter": {"hash": "h4sh", "data": ["1.png", "2.png"]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let router = test_router(&server.uri());
    let (status, value) = get_json(&router, "/content/manga/chapter/chapter-9").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        value["pages"],
        serde_json::json!([
            "https://pages.example/data/h4sh/1.png",
            "https://pages.example/data/h4sh/2.png"
        ])
    );
}

#[tokio::test]
async fn cover_proxy_streams_bytes_with_cache_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/covers/manga-1/cover.jpg"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(vec![0xFF, 0xD8, 0xFF])
                .insert_header("content-type", "image/jpeg"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let router = test_router(&server.uri());
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/content/manga/cover/manga-1/cover.jpg")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/jpeg"
    );
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "public, max-age=86400"
    );
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    assert_eq!(body.as_ref(), &[0xFF, 0xD8, 0xFF]);
}

#[tokio::test]
async fn cover_proxy_answers_404_when_origin_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/covers/manga-1/missing.jpg"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let router = test_router(&server.uri());
    let (status, _) = get(&router, "/content/manga/cover/manga-1/missing.jpg").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn movie_recent_falls_back_from_trending_to_popular() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movies/flixhq/trending"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movies/flixhq/popular"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{"id": "movie/example", "title": "Example", "releaseDate": "2020"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let router = test_router(&server.uri());
    let (status, value) = get_json(&router, "/content/movie/recent").await;

    assert_eq!(status, StatusCode::OK);
    let results = value["results"].as_array().expect("results array");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["type"], serde_json::json!("Movie"));
}

#[tokio::test]
async fn health_reports_ok() {
    let server = MockServer::start().await;
    let router = test_router(&server.uri());

    let (status, value) = get_json(&router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["status"], serde_json::json!("ok"));
    assert!(value["timestamp"].is_string());
}
