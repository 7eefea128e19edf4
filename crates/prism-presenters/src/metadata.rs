//! Page head metadata
//!
//! An item-backed model: the head-of-page metadata fields are read
//! straight off the backing item, so no presenter is registered for it.
//! Resolution takes the fast path and the standard presenter converts the
//! item in place.

use serde::{Deserialize, Serialize};

use prism_domain::{Item, Locale, Model};

const BROWSER_TITLE_FIELD: &str = "browser title";
const META_DESCRIPTION_FIELD: &str = "meta description";
const META_KEYWORDS_FIELD: &str = "meta keywords";

/// Head-of-page metadata for the current item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Text for the browser title bar
    pub browser_title: String,
    /// Meta description, absent when the item declares none
    pub description: Option<String>,
    /// Meta keywords, empty when the item declares none
    pub keywords: Vec<String>,
    /// Canonical path of the page
    pub canonical_path: String,
    /// Language tag the metadata was read in
    pub language: String,
}

impl Model for PageMetadata {
    const ITEM_BACKED: bool = true;

    fn from_item(item: &Item, locale: &Locale) -> Option<Self> {
        let browser_title = item
            .field(BROWSER_TITLE_FIELD)
            .filter(|value| !value.is_empty())
            .unwrap_or(&item.name)
            .to_string();
        let keywords = item
            .field(META_KEYWORDS_FIELD)
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|keyword| !keyword.is_empty())
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            browser_title,
            description: item
                .field(META_DESCRIPTION_FIELD)
                .map(ToString::to_string),
            keywords,
            canonical_path: item.path.clone(),
            language: locale.to_string(),
        })
    }
}
