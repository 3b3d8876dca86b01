//! Provider fallback orchestration
//!
//! Walks an ordered list of provider adapters until one yields usable data.
//! A provider counts as usable when its call succeeds and, for list
//! capabilities, the list is non-empty. Total failure is an explicit empty
//! outcome, never an error: callers on listing endpoints always have a valid
//! empty response to fall back to.

use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};

use crate::domain::{AnimeInfo, CanonicalItem, Provider, StreamSource};
use crate::modules::provider::traits::AnimeSource;
use crate::shared::errors::AppResult;

/// Outcome of a successful fallback walk: the data plus which provider
/// supplied it.
#[derive(Debug)]
pub struct FallbackOutcome<T> {
    pub data: T,
    pub provider: Provider,
}

/// Ephemeral record of one provider attempt. Drives the continue/stop
/// decision and the exhaustion log line; never serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderAttempt {
    pub provider: Provider,
    pub succeeded: bool,
    pub result_count: usize,
}

/// Whether a capability result is worth stopping the fallback walk for.
pub trait FallbackResult {
    fn is_usable(&self) -> bool {
        true
    }
    fn result_count(&self) -> usize {
        1
    }
}

impl<T> FallbackResult for Vec<T> {
    fn is_usable(&self) -> bool {
        !self.is_empty()
    }
    fn result_count(&self) -> usize {
        self.len()
    }
}

impl FallbackResult for AnimeInfo {}
impl FallbackResult for StreamSource {}

/// Ordered chain of anime providers for every multi-provider capability.
pub struct SourceChain {
    sources: Vec<Arc<dyn AnimeSource>>,
}

impl SourceChain {
    pub fn new(sources: Vec<Arc<dyn AnimeSource>>) -> Self {
        Self { sources }
    }

    pub async fn recent_episodes(
        &self,
        page: u32,
    ) -> Option<FallbackOutcome<Vec<CanonicalItem>>> {
        self.first_usable("recent-episodes", move |source| {
            async move { source.recent_episodes(page).await }.boxed()
        })
        .await
    }

    pub async fn search(&self, query: &str) -> Option<FallbackOutcome<Vec<CanonicalItem>>> {
        let query = query.to_string();
        self.first_usable("search", move |source| {
            let query = query.clone();
            async move { source.search(&query).await }.boxed()
        })
        .await
    }

    pub async fn info(&self, id: &str) -> Option<FallbackOutcome<AnimeInfo>> {
        let id = id.to_string();
        self.first_usable("info", move |source| {
            let id = id.clone();
            async move { source.info(&id).await }.boxed()
        })
        .await
    }

    pub async fn watch(
        &self,
        episode_id: &str,
        server: &str,
    ) -> Option<FallbackOutcome<StreamSource>> {
        let episode_id = episode_id.to_string();
        let server = server.to_string();
        self.first_usable("watch", move |source| {
            let episode_id = episode_id.clone();
            let server = server.clone();
            async move { source.watch(&episode_id, &server).await }.boxed()
        })
        .await
    }

    /// Try each provider in priority order and stop at the first usable
    /// result. Provider failures are logged and skipped; they never abort
    /// the walk.
    async fn first_usable<T, F>(
        &self,
        capability: &str,
        op: F,
    ) -> Option<FallbackOutcome<T>>
    where
        T: FallbackResult,
        F: Fn(Arc<dyn AnimeSource>) -> BoxFuture<'static, AppResult<T>>,
    {
        let mut attempts: Vec<ProviderAttempt> = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            let provider = source.provider();
            match op(Arc::clone(source)).await {
                Ok(data) if data.is_usable() => {
                    log::debug!(
                        "{}: provider {} returned {} result(s)",
                        capability,
                        provider,
                        data.result_count()
                    );
                    return Some(FallbackOutcome { data, provider });
                }
                Ok(data) => {
                    log::debug!(
                        "{}: provider {} returned no usable data, trying next",
                        capability,
                        provider
                    );
                    attempts.push(ProviderAttempt {
                        provider,
                        succeeded: true,
                        result_count: data.result_count(),
                    });
                }
                Err(e) => {
                    log::warn!("{}: provider {} failed: {}", capability, provider, e);
                    attempts.push(ProviderAttempt {
                        provider,
                        succeeded: false,
                        result_count: 0,
                    });
                }
            }
        }

        log::warn!(
            "{}: all {} provider(s) exhausted without usable data: {:?}",
            capability,
            attempts.len(),
            attempts
        );
        None
    }
}
