//! Normalization rules shared by all provider mappers.
//!
//! Providers disagree on how (and whether) they send titles, descriptions
//! and cover images. The helpers here collapse those shapes into the
//! canonical defaults so the client always receives a displayable value.

use indexmap::IndexMap;
use serde::Deserialize;

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const NO_DESCRIPTION: &str = "No description available";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x450?text=No+Image";

/// Locale preference order for multi-locale title objects.
const TITLE_LOCALES: [&str; 4] = ["en", "en-us", "romaji", "ja-ro"];

/// Locale preference order for descriptions.
const DESCRIPTION_LOCALES: [&str; 2] = ["en", "en-us"];

/// A provider title: either a plain string or a locale-keyed object.
///
/// The map variant uses an [`IndexMap`] so "first available value" means the
/// first entry in the provider's JSON, deterministically.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TitleValue {
    Text(String),
    Localized(IndexMap<String, String>),
}

/// Resolve a title to a non-empty string.
///
/// Preference order for locale maps: `en`, `en-us`, `romaji`, `ja-ro`, then
/// the first non-empty value, then [`UNKNOWN_TITLE`].
pub fn resolve_title(title: Option<&TitleValue>) -> String {
    match title {
        Some(TitleValue::Text(text)) => non_empty(text).unwrap_or(UNKNOWN_TITLE).to_string(),
        Some(TitleValue::Localized(map)) => resolve_localized(map, &TITLE_LOCALES, UNKNOWN_TITLE),
        None => UNKNOWN_TITLE.to_string(),
    }
}

/// Resolve a locale-keyed description map: `en`, `en-us`, first available,
/// then [`NO_DESCRIPTION`].
pub fn resolve_description(description: Option<&IndexMap<String, String>>) -> String {
    match description {
        Some(map) => resolve_localized(map, &DESCRIPTION_LOCALES, NO_DESCRIPTION),
        None => NO_DESCRIPTION.to_string(),
    }
}

/// Default a plain-string description.
pub fn description_or_default(description: Option<String>) -> String {
    description
        .as_deref()
        .and_then(non_empty)
        .unwrap_or(NO_DESCRIPTION)
        .to_string()
}

/// Gateway-relative proxied URL for a manga cover, or the placeholder when
/// the source has no cover filename. The client loads the proxied path from
/// the gateway's own origin, sidestepping the upload host's CORS policy.
pub fn cover_url(manga_id: &str, file_name: Option<&str>) -> String {
    match file_name.and_then(non_empty) {
        Some(name) => format!("/content/manga/cover/{}/{}", manga_id, name),
        None => PLACEHOLDER_IMAGE.to_string(),
    }
}

/// Pass a provider image URL through, or substitute the placeholder.
pub fn image_or_placeholder(image: Option<String>) -> String {
    image
        .as_deref()
        .and_then(non_empty)
        .unwrap_or(PLACEHOLDER_IMAGE)
        .to_string()
}

/// Parse a chapter number for ordering. Rejects non-numeric and non-finite
/// values, so entries like `"abc"` drop out of chapter listings.
pub fn parse_chapter_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn resolve_localized(
    map: &IndexMap<String, String>,
    preferred: &[&str],
    default: &str,
) -> String {
    for locale in preferred {
        if let Some(value) = map.get(*locale).map(String::as_str).and_then(non_empty) {
            return value.to_string();
        }
    }
    map.values()
        .find_map(|v| non_empty(v))
        .unwrap_or(default)
        .to_string()
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::indexmap;

    #[test]
    fn title_prefers_en_over_other_locales() {
        let title = TitleValue::Localized(indexmap! {
            "ja-ro".to_string() => "Shingeki no Kyojin".to_string(),
            "en".to_string() => "Attack on Titan".to_string(),
        });
        assert_eq!(resolve_title(Some(&title)), "Attack on Titan");
    }

    #[test]
    fn title_falls_back_through_locale_order() {
        let title = TitleValue::Localized(indexmap! {
            "romaji".to_string() => "X".to_string(),
            "ja-ro".to_string() => "Y".to_string(),
        });
        assert_eq!(resolve_title(Some(&title)), "X");
    }

    #[test]
    fn title_uses_first_value_when_no_known_locale() {
        let title = TitleValue::Localized(indexmap! {
            "pt-br".to_string() => "Título".to_string(),
        });
        assert_eq!(resolve_title(Some(&title)), "Título");
    }

    #[test]
    fn empty_title_map_resolves_to_unknown() {
        let title = TitleValue::Localized(IndexMap::new());
        assert_eq!(resolve_title(Some(&title)), UNKNOWN_TITLE);
        assert_eq!(resolve_title(None), UNKNOWN_TITLE);
    }

    #[test]
    fn blank_string_title_resolves_to_unknown() {
        let title = TitleValue::Text("   ".to_string());
        assert_eq!(resolve_title(Some(&title)), UNKNOWN_TITLE);
    }

    #[test]
    fn empty_locale_values_are_skipped() {
        let title = TitleValue::Localized(indexmap! {
            "en".to_string() => "".to_string(),
            "romaji".to_string() => "Koe no Katachi".to_string(),
        });
        assert_eq!(resolve_title(Some(&title)), "Koe no Katachi");
    }

    #[test]
    fn description_prefers_en_then_first_available() {
        let map = indexmap! {
            "fr".to_string() => "Une description".to_string(),
            "en".to_string() => "A description".to_string(),
        };
        assert_eq!(resolve_description(Some(&map)), "A description");

        let no_en = indexmap! {
            "fr".to_string() => "Une description".to_string(),
        };
        assert_eq!(resolve_description(Some(&no_en)), "Une description");
        assert_eq!(resolve_description(None), NO_DESCRIPTION);
    }

    #[test]
    fn cover_url_is_proxied_or_placeholder() {
        assert_eq!(
            cover_url("abc-123", Some("cover.jpg")),
            "/content/manga/cover/abc-123/cover.jpg"
        );
        assert_eq!(cover_url("abc-123", None), PLACEHOLDER_IMAGE);
        assert_eq!(cover_url("abc-123", Some("")), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn missing_image_gets_placeholder() {
        assert_eq!(image_or_placeholder(None), PLACEHOLDER_IMAGE);
        assert_eq!(
            image_or_placeholder(Some("https://cdn.example/x.png".to_string())),
            "https://cdn.example/x.png"
        );
    }

    #[test]
    fn chapter_numbers_parse_as_floats() {
        assert_eq!(parse_chapter_number("9.5"), Some(9.5));
        assert_eq!(parse_chapter_number("10"), Some(10.0));
        assert_eq!(parse_chapter_number("abc"), None);
        assert_eq!(parse_chapter_number("nan"), None);
        assert_eq!(parse_chapter_number(""), None);
    }

    #[test]
    fn untagged_title_deserializes_both_shapes() {
        let text: TitleValue = serde_json::from_str("\"One Piece\"").unwrap();
        assert_eq!(resolve_title(Some(&text)), "One Piece");

        let map: TitleValue = serde_json::from_str(r#"{"romaji":"X","ja-ro":"Y"}"#).unwrap();
        assert_eq!(resolve_title(Some(&map)), "X");
    }
}
