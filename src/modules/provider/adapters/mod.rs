pub mod consumet;
pub mod mangadex;

// Use specific imports to avoid conflicts
pub use consumet::{ConsumetAnimeAdapter, FlixHqAdapter};
pub use mangadex::MangaDexAdapter;
