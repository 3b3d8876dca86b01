// Consumet API models, shared by the anime providers and FlixHQ
// Consumet mirrors each upstream site loosely, so almost everything is
// optional here and defaults are applied at mapping time.

use serde::Deserialize;
use serde_json::Number;

use crate::domain::normalize::TitleValue;

/// Standard consumet list envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct Paginated<T> {
    #[serde(default)]
    pub results: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeListItem {
    pub id: String,
    #[serde(default)]
    pub title: Option<TitleValue>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub episode_number: Option<Number>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub sub_or_dub: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeDetails {
    pub id: String,
    #[serde(default)]
    pub title: Option<TitleValue>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub episodes: Vec<RawEpisode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEpisode {
    pub id: String,
    #[serde(default)]
    pub number: Option<Number>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStream {
    #[serde(default)]
    pub sources: Vec<RawVideoSource>,
    #[serde(default)]
    pub subtitles: Vec<RawSubtitle>,
    #[serde(default)]
    pub download: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVideoSource {
    pub url: String,
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(rename = "isM3U8", default)]
    pub is_m3u8: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSubtitle {
    pub url: String,
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieListItem {
    pub id: String,
    #[serde(default)]
    pub title: Option<TitleValue>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(rename = "type", default)]
    pub media_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    pub id: String,
    #[serde(default)]
    pub title: Option<TitleValue>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub episodes: Vec<RawEpisode>,
}
