//! Content provider identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported content providers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Provider {
    /// Gogoanime via the Consumet aggregator - primary anime provider
    #[serde(rename = "gogoanime")]
    Gogoanime,
    /// Zoro via the Consumet aggregator - anime fallback
    #[serde(rename = "zoro")]
    Zoro,
    /// FlixHQ via the Consumet aggregator - movies
    #[serde(rename = "flixhq")]
    FlixHq,
    /// MangaDex REST API - manga
    #[serde(rename = "mangadex")]
    MangaDex,
}

impl Provider {
    /// Path segment used by the upstream API for this provider.
    pub fn slug(&self) -> &'static str {
        match self {
            Provider::Gogoanime => "gogoanime",
            Provider::Zoro => "zoro",
            Provider::FlixHq => "flixhq",
            Provider::MangaDex => "mangadex",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
