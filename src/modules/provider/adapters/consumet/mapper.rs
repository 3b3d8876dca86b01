use super::models::{
    AnimeDetails, AnimeListItem, MovieDetails, MovieListItem, RawEpisode, RawStream,
};
use crate::domain::normalize;
use crate::domain::{AnimeInfo, CanonicalItem, EpisodeRef, MovieInfo, StreamSource, Subtitle, VideoSource};
use serde_json::Number;

/// Consumet to canonical-schema mapper
///
/// Consumet responses are already flat, so mapping is mostly defaulting:
/// each source kind carries a different subset of the canonical fields and
/// gets stable values for the ones its provider omitted.
#[derive(Debug, Clone, Default)]
pub struct ConsumetMapper;

impl ConsumetMapper {
    pub fn new() -> Self {
        Self
    }

    /// Recent-episode row: carries an episode number, defaulting to 1.
    pub fn map_recent_episode(&self, item: AnimeListItem) -> CanonicalItem {
        let mut canonical = self.map_anime_common(&item);
        canonical.episode_number = Some(item.episode_number.unwrap_or_else(|| Number::from(1u32)));
        canonical
    }

    /// Anime search row: carries release date, sub/dub marker and status.
    pub fn map_anime_search(&self, item: AnimeListItem) -> CanonicalItem {
        let mut canonical = self.map_anime_common(&item);
        canonical.release_date = Some(item.release_date.clone().unwrap_or_default());
        canonical.sub_or_dub = Some(
            item.sub_or_dub
                .clone()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "sub".to_string()),
        );
        canonical.status = Some(
            item.status
                .clone()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
        );
        canonical
    }

    /// Movie row: carries release date and media type.
    pub fn map_movie_item(&self, item: MovieListItem) -> CanonicalItem {
        let mut canonical = CanonicalItem::new(
            item.id,
            normalize::resolve_title(item.title.as_ref()),
            normalize::image_or_placeholder(item.image),
            normalize::NO_DESCRIPTION.to_string(),
        );
        canonical.release_date = Some(item.release_date.unwrap_or_default());
        canonical.media_type = Some(
            item.media_type
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| "Movie".to_string()),
        );
        canonical
    }

    pub fn map_anime_info(&self, details: AnimeDetails) -> AnimeInfo {
        AnimeInfo {
            id: details.id,
            title: normalize::resolve_title(details.title.as_ref()),
            description: normalize::description_or_default(details.description),
            image: normalize::image_or_placeholder(details.image),
            episodes: details.episodes.into_iter().map(Self::map_episode).collect(),
        }
    }

    pub fn map_movie_info(&self, details: MovieDetails) -> MovieInfo {
        MovieInfo {
            id: details.id,
            title: normalize::resolve_title(details.title.as_ref()),
            description: normalize::description_or_default(details.description),
            image: normalize::image_or_placeholder(details.image),
            release_date: details.release_date.unwrap_or_default(),
            episodes: details.episodes.into_iter().map(Self::map_episode).collect(),
        }
    }

    pub fn map_stream(&self, raw: RawStream) -> StreamSource {
        StreamSource {
            sources: raw
                .sources
                .into_iter()
                .map(|s| VideoSource {
                    url: s.url,
                    quality: s.quality,
                    is_m3u8: s.is_m3u8,
                })
                .collect(),
            subtitles: raw
                .subtitles
                .into_iter()
                .map(|s| Subtitle {
                    url: s.url,
                    lang: s.lang,
                })
                .collect(),
            download: raw.download,
        }
    }

    fn map_anime_common(&self, item: &AnimeListItem) -> CanonicalItem {
        CanonicalItem::new(
            item.id.clone(),
            normalize::resolve_title(item.title.as_ref()),
            normalize::image_or_placeholder(item.image.clone()),
            normalize::NO_DESCRIPTION.to_string(),
        )
    }

    // Episode order is preserved as the provider sent it; consumet lists
    // are assumed chronological.
    fn map_episode(raw: RawEpisode) -> EpisodeRef {
        EpisodeRef {
            id: raw.id,
            number: raw.number,
            title: raw.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::normalize::{NO_DESCRIPTION, PLACEHOLDER_IMAGE, UNKNOWN_TITLE};

    #[test]
    fn recent_episode_defaults_episode_number_to_one() {
        let item: AnimeListItem = serde_json::from_value(serde_json::json!({
            "id": "one-piece-episode-1000",
            "title": "One Piece",
            "image": "https://cdn.example/op.png"
        }))
        .unwrap();
        let canonical = ConsumetMapper::new().map_recent_episode(item);

        assert_eq!(canonical.episode_number, Some(serde_json::Number::from(1u32)));
        assert_eq!(canonical.title, "One Piece");
        assert_eq!(canonical.description, NO_DESCRIPTION);
    }

    #[test]
    fn search_row_gets_stable_defaults() {
        let item: AnimeListItem = serde_json::from_value(serde_json::json!({
            "id": "naruto"
        }))
        .unwrap();
        let canonical = ConsumetMapper::new().map_anime_search(item);

        assert_eq!(canonical.title, UNKNOWN_TITLE);
        assert_eq!(canonical.image, PLACEHOLDER_IMAGE);
        assert_eq!(canonical.release_date.as_deref(), Some(""));
        assert_eq!(canonical.sub_or_dub.as_deref(), Some("sub"));
        assert_eq!(canonical.status.as_deref(), Some("Unknown"));
        assert!(canonical.episode_number.is_none());
    }

    #[test]
    fn movie_row_defaults_type_to_movie() {
        let item: MovieListItem = serde_json::from_value(serde_json::json!({
            "id": "movie/the-example",
            "title": "The Example",
            "releaseDate": "2021"
        }))
        .unwrap();
        let canonical = ConsumetMapper::new().map_movie_item(item);

        assert_eq!(canonical.media_type.as_deref(), Some("Movie"));
        assert_eq!(canonical.release_date.as_deref(), Some("2021"));
    }

    #[test]
    fn info_preserves_episode_order() {
        let details: AnimeDetails = serde_json::from_value(serde_json::json!({
            "id": "spy-x-family",
            "title": {"romaji": "Spy x Family"},
            "episodes": [
                {"id": "e3", "number": 3},
                {"id": "e1", "number": 1},
                {"id": "e2", "number": 2}
            ]
        }))
        .unwrap();
        let info = ConsumetMapper::new().map_anime_info(details);

        assert_eq!(info.title, "Spy x Family");
        let ids: Vec<&str> = info.episodes.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e3", "e1", "e2"]);
    }

    #[test]
    fn stream_mapping_keeps_sources_and_download() {
        let raw: RawStream = serde_json::from_value(serde_json::json!({
            "sources": [
                {"url": "https://cdn.example/ep.m3u8", "quality": "1080p", "isM3U8": true}
            ],
            "subtitles": [{"url": "https://cdn.example/en.vtt", "lang": "English"}],
            "download": "https://cdn.example/ep.mp4"
        }))
        .unwrap();
        let stream = ConsumetMapper::new().map_stream(raw);

        assert_eq!(stream.sources.len(), 1);
        assert_eq!(stream.sources[0].quality.as_deref(), Some("1080p"));
        assert_eq!(stream.subtitles[0].lang.as_deref(), Some("English"));
        assert_eq!(stream.download.as_deref(), Some("https://cdn.example/ep.mp4"));
    }

    #[test]
    fn empty_stream_response_maps_to_empty_lists() {
        let raw: RawStream = serde_json::from_value(serde_json::json!({})).unwrap();
        let stream = ConsumetMapper::new().map_stream(raw);
        assert!(stream.sources.is_empty());
        assert!(stream.subtitles.is_empty());
        assert!(stream.download.is_none());
    }
}
