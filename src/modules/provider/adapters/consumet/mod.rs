pub mod anime_adapter;
pub mod mapper;
pub mod models;
pub mod movie_adapter;

pub use anime_adapter::ConsumetAnimeAdapter;
pub use movie_adapter::FlixHqAdapter;
