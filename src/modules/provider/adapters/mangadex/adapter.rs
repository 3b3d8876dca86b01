use super::mapper::MangaDexMapper;
use super::models::{AtHomeServer, ChapterFeed, MangaEntity, MangaList};
use crate::domain::{CanonicalItem, ChapterRef};
use crate::modules::provider::http_client::{FetchClient, RetryPolicy};
use crate::shared::errors::AppResult;
use crate::shared::GatewayConfig;

/// MangaDex provider adapter
///
/// Manga is single-provider: there is no fallback chain, so failures
/// propagate to the handler which decides between degrade-to-empty and an
/// explicit error per endpoint.
pub struct MangaDexAdapter {
    http: FetchClient,
    base_url: String,
    policy: RetryPolicy,
    mapper: MangaDexMapper,
}

impl MangaDexAdapter {
    pub fn new(http: FetchClient, config: &GatewayConfig) -> Self {
        Self {
            http,
            base_url: config.mangadex_url.clone(),
            policy: config.api_retry,
            mapper: MangaDexMapper::new(),
        }
    }

    /// Recently updated manga, ordered by latest uploaded chapter.
    pub async fn recent(&self, limit: u32, offset: u32) -> AppResult<Vec<CanonicalItem>> {
        let url = format!("{}/manga", self.base_url);
        let mut query = vec![
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
            ("order[latestUploadedChapter]", "desc".to_string()),
        ];
        query.extend(Self::listing_filters());

        log::info!("MangaDex: recent listing (limit: {}, offset: {})", limit, offset);

        let list: MangaList = self.http.get_json(&url, &query, &self.policy).await?;
        Ok(list
            .data
            .into_iter()
            .map(|manga| self.mapper.map_listing_item(manga))
            .collect())
    }

    pub async fn search(&self, query_text: &str, limit: u32) -> AppResult<Vec<CanonicalItem>> {
        let url = format!("{}/manga", self.base_url);
        let mut query = vec![
            ("title", query_text.to_string()),
            ("limit", limit.to_string()),
        ];
        query.extend(Self::listing_filters());

        log::info!("MangaDex: searching for '{}' (limit: {})", query_text, limit);

        let list: MangaList = self.http.get_json(&url, &query, &self.policy).await?;
        log::info!("MangaDex: found {} results for '{}'", list.data.len(), query_text);
        Ok(list
            .data
            .into_iter()
            .map(|manga| self.mapper.map_search_item(manga))
            .collect())
    }

    pub async fn info(&self, id: &str) -> AppResult<CanonicalItem> {
        let url = format!("{}/manga/{}", self.base_url, id);
        let query = [
            ("includes[]", "cover_art"),
            ("includes[]", "author"),
            ("includes[]", "artist"),
        ];

        log::info!("MangaDex: getting manga by ID '{}'", id);

        let entity: MangaEntity = self.http.get_json(&url, &query, &self.policy).await?;
        Ok(self.mapper.map_info(entity.data))
    }

    /// English chapter feed for a manga, oldest chapter first.
    pub async fn chapters(&self, id: &str, limit: u32, offset: u32) -> AppResult<Vec<ChapterRef>> {
        let url = format!("{}/manga/{}/feed", self.base_url, id);
        let query = vec![
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
            ("translatedLanguage[]", "en".to_string()),
            ("order[chapter]", "asc".to_string()),
            ("includeFutureUpdates", "0".to_string()),
        ];

        log::info!("MangaDex: chapter feed for '{}' (limit: {}, offset: {})", id, limit, offset);

        let feed: ChapterFeed = self.http.get_json(&url, &query, &self.policy).await?;
        let chapters = self.mapper.map_chapters(feed.data);
        log::info!("MangaDex: {} usable chapters for '{}'", chapters.len(), id);
        Ok(chapters)
    }

    /// Page image URLs for a chapter, via the at-home server lookup.
    pub async fn chapter_pages(&self, chapter_id: &str) -> AppResult<Vec<String>> {
        let url = format!("{}/at-home/server/{}", self.base_url, chapter_id);

        log::info!("MangaDex: page server for chapter '{}'", chapter_id);

        let no_query: [(&str, &str); 0] = [];
        let server: AtHomeServer = self.http.get_json(&url, &no_query, &self.policy).await?;
        Ok(server
            .chapter
            .data
            .iter()
            .map(|page| format!("{}/data/{}/{}", server.base_url, server.chapter.hash, page))
            .collect())
    }

    /// Filters shared by listing and search: safe-ish content with at least
    /// one English chapter, cover art included for the proxy URL.
    fn listing_filters() -> Vec<(&'static str, String)> {
        vec![
            ("includes[]", "cover_art".to_string()),
            ("includes[]", "author".to_string()),
            ("includes[]", "artist".to_string()),
            ("contentRating[]", "safe".to_string()),
            ("contentRating[]", "suggestive".to_string()),
            ("hasAvailableChapters", "true".to_string()),
            ("availableTranslatedLanguage[]", "en".to_string()),
        ]
    }
}
