pub mod adapters;
pub mod http_client;
pub mod orchestrator;
pub mod traits;

// Re-exports for easy external access
pub use adapters::{ConsumetAnimeAdapter, FlixHqAdapter, MangaDexAdapter};
pub use http_client::{FetchClient, RetryPolicy};
pub use orchestrator::{FallbackOutcome, ProviderAttempt, SourceChain};
pub use traits::AnimeSource;
