//! Content item record and identity
//!
//! The item is the opaque backing-data record a model is derived from.
//! Prism never resolves items itself - the hosting environment looks them
//! up and hands them to presenters through a view.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Value Object: Content Item Identity
///
/// Stable identity of a content item, independent of its tree position.
/// This is the backing-data identity request caching keys are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Create a fresh random identity
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identity from its canonical string form
    pub fn parse(value: &str) -> Result<Self> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|e| Error::invalid_argument(format!("Invalid item id '{value}': {e}")))
    }

    /// The underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Value Object: Backing Content Item
///
/// A flat record of the content underlying one rendered component: identity,
/// display name, tree path and named string fields.
///
/// ## Business Rules
///
/// - Identity never changes after creation
/// - The path is the `/`-separated position in the content tree
/// - Field names are free-form; missing fields read as absent, not empty
///
/// ## Example
///
/// ```rust
/// use prism_domain::value_objects::{Item, ItemId};
///
/// let item = Item::new(ItemId::new(), "About Us", "/home/about")
///     .with_field("browser title", "About Us | Example Site");
///
/// assert_eq!(item.field("browser title"), Some("About Us | Example Site"));
/// assert_eq!(item.field("missing"), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Stable identity of this item
    pub id: ItemId,
    /// Display name of the item
    pub name: String,
    /// Position of the item in the content tree
    pub path: String,
    /// Named string fields of the item version being presented
    pub fields: HashMap<String, String>,
}

impl Item {
    /// Create a new item with no fields
    pub fn new(id: ItemId, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            path: path.into(),
            fields: HashMap::new(),
        }
    }

    /// Add a named field
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Read a named field, absent when the item does not carry it
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}
