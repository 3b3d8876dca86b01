// Canonical schema and normalization rules shared by every provider adapter.

pub mod canonical;
pub mod normalize;
pub mod provider;

pub use canonical::{
    AnimeInfo, CanonicalItem, ChapterRef, EpisodeRef, MovieInfo, StreamSource, Subtitle,
    VideoSource,
};
pub use provider::Provider;
