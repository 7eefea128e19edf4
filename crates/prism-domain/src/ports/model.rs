//! Model contract for presentable types
//!
//! Any type produced by a presenter implements [`Model`]. Types that
//! directly mirror a backing content item additionally declare the
//! item-backed capability, which lets resolution skip candidate search
//! entirely and convert the item in place.

use crate::value_objects::{Item, Locale};

/// Contract for view-model types
///
/// `ITEM_BACKED` marks types that are a strongly-typed reading of a content
/// item: for those, the standard presenter is always the right
/// implementation and [`from_item`](Model::from_item) must produce the
/// model whenever the item carries the expected shape.
///
/// The default `from_item` declines every item, which is the correct
/// behavior for computed models that only a dedicated presenter can build.
pub trait Model: Sized + Send + Sync + 'static {
    /// Whether this type is a direct strongly-typed reading of an item
    const ITEM_BACKED: bool = false;

    /// Convert a backing item into this model, absent when the item does
    /// not carry the shape this type expects
    fn from_item(item: &Item, locale: &Locale) -> Option<Self> {
        let _ = (item, locale);
        None
    }
}
