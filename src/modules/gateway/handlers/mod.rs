pub mod anime;
pub mod health;
pub mod manga;
pub mod media_proxy;
pub mod movie;

use serde::Serialize;

/// Listing envelope. Listing endpoints always answer with this shape, even
/// on total provider failure, so the gallery view never sees an error.
#[derive(Debug, Serialize)]
pub struct ResultsResponse<T> {
    pub results: Vec<T>,
}

impl<T> ResultsResponse<T> {
    pub fn empty() -> Self {
        Self { results: vec![] }
    }
}
