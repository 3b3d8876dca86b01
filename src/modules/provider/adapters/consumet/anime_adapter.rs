use async_trait::async_trait;

use super::mapper::ConsumetMapper;
use super::models::{AnimeDetails, AnimeListItem, Paginated, RawStream};
use crate::domain::{AnimeInfo, CanonicalItem, Provider, StreamSource};
use crate::modules::provider::http_client::{FetchClient, RetryPolicy};
use crate::modules::provider::traits::AnimeSource;
use crate::shared::errors::AppResult;
use crate::shared::GatewayConfig;

/// Consumet-hosted anime provider adapter
///
/// One instance per upstream provider slug; the fallback chain decides the
/// order they are tried in.
pub struct ConsumetAnimeAdapter {
    http: FetchClient,
    base_url: String,
    policy: RetryPolicy,
    provider: Provider,
    mapper: ConsumetMapper,
}

impl ConsumetAnimeAdapter {
    pub fn new(http: FetchClient, config: &GatewayConfig, provider: Provider) -> Self {
        Self {
            http,
            base_url: config.consumet_url.clone(),
            policy: config.api_retry,
            provider,
            mapper: ConsumetMapper::new(),
        }
    }
}

#[async_trait]
impl AnimeSource for ConsumetAnimeAdapter {
    fn provider(&self) -> Provider {
        self.provider
    }

    async fn recent_episodes(&self, page: u32) -> AppResult<Vec<CanonicalItem>> {
        let url = format!(
            "{}/anime/{}/recent-episodes",
            self.base_url,
            self.provider.slug()
        );
        let query = [("page", page.to_string())];

        log::info!("{}: recent episodes (page {})", self.provider, page);

        let list: Paginated<AnimeListItem> = self.http.get_json(&url, &query, &self.policy).await?;
        Ok(list
            .results
            .into_iter()
            .map(|item| self.mapper.map_recent_episode(item))
            .collect())
    }

    async fn search(&self, query_text: &str) -> AppResult<Vec<CanonicalItem>> {
        let url = format!(
            "{}/anime/{}/{}",
            self.base_url,
            self.provider.slug(),
            urlencoding::encode(query_text)
        );
        let no_query: [(&str, &str); 0] = [];

        log::info!("{}: searching for '{}'", self.provider, query_text);

        let list: Paginated<AnimeListItem> =
            self.http.get_json(&url, &no_query, &self.policy).await?;
        log::info!(
            "{}: found {} results for '{}'",
            self.provider,
            list.results.len(),
            query_text
        );
        Ok(list
            .results
            .into_iter()
            .map(|item| self.mapper.map_anime_search(item))
            .collect())
    }

    async fn info(&self, id: &str) -> AppResult<AnimeInfo> {
        let url = format!(
            "{}/anime/{}/info/{}",
            self.base_url,
            self.provider.slug(),
            id
        );
        let no_query: [(&str, &str); 0] = [];

        log::info!("{}: info for '{}'", self.provider, id);

        let details: AnimeDetails = self.http.get_json(&url, &no_query, &self.policy).await?;
        Ok(self.mapper.map_anime_info(details))
    }

    async fn watch(&self, episode_id: &str, server: &str) -> AppResult<StreamSource> {
        log::info!("{}: streaming links for '{}'", self.provider, episode_id);

        // Zoro's consumet route takes the episode as a query parameter and
        // has no server selection; the others take it in the path.
        let raw: RawStream = match self.provider {
            Provider::Zoro => {
                let url = format!("{}/anime/zoro/watch", self.base_url);
                let query = [("episodeId", episode_id.to_string())];
                self.http.get_json(&url, &query, &self.policy).await?
            }
            _ => {
                let url = format!(
                    "{}/anime/{}/watch/{}",
                    self.base_url,
                    self.provider.slug(),
                    episode_id
                );
                let query = [("server", server.to_string())];
                self.http.get_json(&url, &query, &self.policy).await?
            }
        };

        Ok(self.mapper.map_stream(raw))
    }
}
