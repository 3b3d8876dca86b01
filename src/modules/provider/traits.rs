use crate::domain::{AnimeInfo, CanonicalItem, Provider, StreamSource};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Uniform surface every anime provider adapter exposes.
///
/// The fallback chain only depends on this trait, so provider order stays a
/// plain list instead of a dispatch hierarchy.
#[async_trait]
pub trait AnimeSource: Send + Sync {
    /// Which provider this adapter queries
    fn provider(&self) -> Provider;

    /// Recently released episodes, paginated
    async fn recent_episodes(&self, page: u32) -> AppResult<Vec<CanonicalItem>>;

    /// Title search
    async fn search(&self, query: &str) -> AppResult<Vec<CanonicalItem>>;

    /// Detail view with the episode list
    async fn info(&self, id: &str) -> AppResult<AnimeInfo>;

    /// Streaming sources for one episode. `server` is a hint some providers
    /// understand; adapters that don't simply ignore it.
    async fn watch(&self, episode_id: &str, server: &str) -> AppResult<StreamSource>;
}
