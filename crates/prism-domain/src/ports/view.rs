//! View port
//!
//! A view is the hosting environment's abstraction over one rendering
//! position: the backing item(s) resolved for it, the active locale and
//! its output-caching preferences. Prism reads item identity and locale
//! from it; markup concerns stay on the host side.

use crate::value_objects::{CacheHints, Item, Locale};

/// Port: the rendering context a model is produced from
///
/// Implementations are supplied by the host. The datasource-to-item
/// resolution policy (path lookup, query evaluation, localization) happens
/// before a view reaches Prism; here the items are already concrete.
pub trait View: Send + Sync {
    /// The primary backing item, if one resolved for this view
    fn item(&self) -> Option<&Item>;

    /// All backing items resolved for this view, possibly empty
    fn items(&self) -> &[Item];

    /// The item backing the page the view renders on
    fn context_item(&self) -> Option<&Item>;

    /// The locale the view renders in
    fn locale(&self) -> &Locale;

    /// Output-caching preferences declared for this view
    fn cache_hints(&self) -> CacheHints;
}

/// A plain data-carrier [`View`]
///
/// Suitable for hosts that resolve items ahead of time, and for tests.
/// The primary item is the first datasource item, falling back to the
/// context item when no datasource resolved.
#[derive(Debug, Clone, Default)]
pub struct StaticView {
    items: Vec<Item>,
    context_item: Option<Item>,
    locale: Locale,
    cache_hints: CacheHints,
}

impl StaticView {
    /// Create an empty view for the given locale
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    /// Append a resolved datasource item
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Set the context item
    pub fn with_context_item(mut self, item: Item) -> Self {
        self.context_item = Some(item);
        self
    }

    /// Set the output-caching preferences
    pub fn with_cache_hints(mut self, hints: CacheHints) -> Self {
        self.cache_hints = hints;
        self
    }
}

impl View for StaticView {
    fn item(&self) -> Option<&Item> {
        self.items.first().or(self.context_item.as_ref())
    }

    fn items(&self) -> &[Item] {
        &self.items
    }

    fn context_item(&self) -> Option<&Item> {
        self.context_item.as_ref()
    }

    fn locale(&self) -> &Locale {
        &self.locale
    }

    fn cache_hints(&self) -> CacheHints {
        self.cache_hints
    }
}
