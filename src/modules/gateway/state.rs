use std::sync::Arc;

use crate::domain::Provider;
use crate::modules::provider::{
    ConsumetAnimeAdapter, FetchClient, FlixHqAdapter, MangaDexAdapter, SourceChain,
};
use crate::shared::GatewayConfig;

/// Immutable per-process state shared by every handler.
///
/// Built once at startup from the configuration; adapters share one
/// connection pool through the cloned [`FetchClient`].
pub struct AppState {
    pub config: GatewayConfig,
    pub fetch: FetchClient,
    pub manga: MangaDexAdapter,
    pub anime: SourceChain,
    pub movies: FlixHqAdapter,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Self {
        let fetch = FetchClient::new();
        let manga = MangaDexAdapter::new(fetch.clone(), &config);
        // Fixed anime priority order: gogoanime first, zoro as fallback.
        let anime = SourceChain::new(vec![
            Arc::new(ConsumetAnimeAdapter::new(
                fetch.clone(),
                &config,
                Provider::Gogoanime,
            )),
            Arc::new(ConsumetAnimeAdapter::new(
                fetch.clone(),
                &config,
                Provider::Zoro,
            )),
        ]);
        let movies = FlixHqAdapter::new(fetch.clone(), &config);

        Self {
            config,
            fetch,
            manga,
            anime,
            movies,
        }
    }
}
