//! The gateway's canonical item shapes.
//!
//! Every provider response is mapped into these types before it reaches the
//! client, so the client never sees a provider-specific field name or a
//! missing display field. Fields that do not apply to an item's source kind
//! are omitted from the serialized object entirely, never emitted as `null`.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A single catalog entry (anime, manga or movie) in the canonical shape.
///
/// `title`, `image` and `description` are always present: the normalizer
/// substitutes deterministic defaults when the source omits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalItem {
    pub id: String,
    pub title: String,
    pub image: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_or_dub: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_number: Option<Number>,
}

impl CanonicalItem {
    /// An item with only the always-present fields set. Mappers start from
    /// this and fill in the fields their source kind carries.
    pub fn new(id: String, title: String, image: String, description: String) -> Self {
        Self {
            id,
            title,
            image,
            description,
            release_date: None,
            status: None,
            sub_or_dub: None,
            media_type: None,
            rating: None,
            tags: None,
            episode_number: None,
        }
    }
}

/// A manga chapter reference. `chapter` keeps the provider's numeric string
/// form; ordering is by its floating-point value, decided at mapping time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterRef {
    pub id: String,
    pub chapter: String,
    pub title: String,
    pub pages: u32,
    pub publish_at: String,
}

/// An episode reference, order preserved from the provider response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeRef {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Detail view of an anime: canonical display fields plus its episode list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub episodes: Vec<EpisodeRef>,
}

/// Detail view of a movie or series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub release_date: String,
    pub episodes: Vec<EpisodeRef>,
}

/// Streaming sources for one episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamSource {
    pub sources: Vec<VideoSource>,
    pub subtitles: Vec<Subtitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSource {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(rename = "isM3U8", skip_serializing_if = "Option::is_none")]
    pub is_m3u8: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtitle {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}
