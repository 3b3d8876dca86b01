use super::models::{ChapterEntity, Manga, Relationship};
use crate::domain::normalize::{self, TitleValue};
use crate::domain::{CanonicalItem, ChapterRef};

/// How many tags a listing row carries; detail views get the full list.
const LISTING_TAG_LIMIT: usize = 5;

/// MangaDex to canonical-schema mapper
#[derive(Debug, Clone, Default)]
pub struct MangaDexMapper;

impl MangaDexMapper {
    pub fn new() -> Self {
        Self
    }

    /// Map a manga for the recent listing: capped tags.
    pub fn map_listing_item(&self, manga: Manga) -> CanonicalItem {
        let mut item = self.map_common(&manga);
        item.tags = Some(
            Self::tag_names(&manga)
                .take(LISTING_TAG_LIMIT)
                .collect(),
        );
        item
    }

    /// Map a manga for search results: no tags.
    pub fn map_search_item(&self, manga: Manga) -> CanonicalItem {
        self.map_common(&manga)
    }

    /// Map a manga detail view: full tag list.
    pub fn map_info(&self, manga: Manga) -> CanonicalItem {
        let mut item = self.map_common(&manga);
        item.tags = Some(Self::tag_names(&manga).collect());
        item
    }

    /// Map a chapter feed: entries without a parsable chapter number are
    /// dropped, the rest sort ascending by numeric chapter value.
    pub fn map_chapters(&self, feed: Vec<ChapterEntity>) -> Vec<ChapterRef> {
        let mut keyed: Vec<(f64, ChapterRef)> = feed
            .into_iter()
            .filter_map(|entity| {
                let raw = entity.attributes.chapter?;
                let number = normalize::parse_chapter_number(&raw)?;
                let title = entity
                    .attributes
                    .title
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| format!("Chapter {}", raw));
                Some((
                    number,
                    ChapterRef {
                        id: entity.id,
                        chapter: raw,
                        title,
                        pages: entity.attributes.pages,
                        publish_at: entity.attributes.publish_at.unwrap_or_default(),
                    },
                ))
            })
            .collect();

        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        keyed.into_iter().map(|(_, chapter)| chapter).collect()
    }

    fn map_common(&self, manga: &Manga) -> CanonicalItem {
        let title = TitleValue::Localized(manga.attributes.title.clone());
        let mut item = CanonicalItem::new(
            manga.id.clone(),
            normalize::resolve_title(Some(&title)),
            normalize::cover_url(&manga.id, Self::cover_file_name(&manga.relationships)),
            normalize::resolve_description(Some(&manga.attributes.description)),
        );
        item.status = Some(
            manga
                .attributes
                .status
                .clone()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
        );
        item.release_date = Some(
            manga
                .attributes
                .year
                .map(|y| y.to_string())
                .unwrap_or_default(),
        );
        item.rating = manga.attributes.content_rating.clone();
        item
    }

    fn cover_file_name(relationships: &[Relationship]) -> Option<&str> {
        relationships
            .iter()
            .find(|rel| rel.kind == "cover_art")
            .and_then(|rel| rel.attributes.as_ref())
            .and_then(|attrs| attrs.file_name.as_deref())
    }

    fn tag_names(manga: &Manga) -> impl Iterator<Item = String> + '_ {
        manga
            .attributes
            .tags
            .iter()
            .filter_map(|tag| tag.attributes.name.get("en").cloned())
    }
}
