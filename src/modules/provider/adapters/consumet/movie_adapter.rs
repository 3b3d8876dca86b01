use super::mapper::ConsumetMapper;
use super::models::{MovieDetails, MovieListItem, Paginated, RawStream};
use crate::domain::{CanonicalItem, MovieInfo, StreamSource};
use crate::modules::provider::http_client::{FetchClient, RetryPolicy};
use crate::shared::errors::AppResult;
use crate::shared::GatewayConfig;

/// FlixHQ movie adapter (via Consumet)
pub struct FlixHqAdapter {
    http: FetchClient,
    base_url: String,
    policy: RetryPolicy,
    mapper: ConsumetMapper,
}

impl FlixHqAdapter {
    pub fn new(http: FetchClient, config: &GatewayConfig) -> Self {
        Self {
            http,
            base_url: config.consumet_url.clone(),
            policy: config.api_retry,
            mapper: ConsumetMapper::new(),
        }
    }

    /// Trending movies, falling back to the popular listing when trending is
    /// down or empty. Same fixed-order, first-usable-wins policy as the
    /// anime chain, just within a single provider.
    pub async fn recent(&self, page: u32) -> AppResult<Vec<CanonicalItem>> {
        match self.listing("trending", page).await {
            Ok(results) if !results.is_empty() => Ok(results),
            Ok(_) => {
                log::debug!("flixhq: trending empty, falling back to popular");
                self.listing("popular", page).await
            }
            Err(e) => {
                log::warn!("flixhq: trending failed ({}), falling back to popular", e);
                self.listing("popular", page).await
            }
        }
    }

    pub async fn search(&self, query_text: &str, page: u32) -> AppResult<Vec<CanonicalItem>> {
        let url = format!(
            "{}/movies/flixhq/{}",
            self.base_url,
            urlencoding::encode(query_text)
        );
        let query = [("page", page.to_string())];

        log::info!("flixhq: searching for '{}'", query_text);

        let list: Paginated<MovieListItem> = self.http.get_json(&url, &query, &self.policy).await?;
        log::info!(
            "flixhq: found {} results for '{}'",
            list.results.len(),
            query_text
        );
        Ok(list
            .results
            .into_iter()
            .map(|item| self.mapper.map_movie_item(item))
            .collect())
    }

    pub async fn info(&self, id: &str) -> AppResult<MovieInfo> {
        let url = format!("{}/movies/flixhq/info", self.base_url);
        let query = [("id", id.to_string())];

        log::info!("flixhq: info for '{}'", id);

        let details: MovieDetails = self.http.get_json(&url, &query, &self.policy).await?;
        Ok(self.mapper.map_movie_info(details))
    }

    pub async fn watch(
        &self,
        episode_id: &str,
        media_id: Option<&str>,
    ) -> AppResult<StreamSource> {
        let url = format!("{}/movies/flixhq/watch", self.base_url);
        let mut query = vec![("episodeId", episode_id.to_string())];
        if let Some(media_id) = media_id {
            query.push(("mediaId", media_id.to_string()));
        }

        log::info!("flixhq: streaming links for '{}'", episode_id);

        let raw: RawStream = self.http.get_json(&url, &query, &self.policy).await?;
        Ok(self.mapper.map_stream(raw))
    }

    async fn listing(&self, kind: &str, page: u32) -> AppResult<Vec<CanonicalItem>> {
        let url = format!("{}/movies/flixhq/{}", self.base_url, kind);
        let query = [("page", page.to_string())];

        let list: Paginated<MovieListItem> = self.http.get_json(&url, &query, &self.policy).await?;
        Ok(list
            .results
            .into_iter()
            .map(|item| self.mapper.map_movie_item(item))
            .collect())
    }
}
