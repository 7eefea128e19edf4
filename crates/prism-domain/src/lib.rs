//! # Prism Domain
//!
//! Domain layer for Prism: the value objects describing backing content
//! items and the ports through which presentation code observes them.
//!
//! This crate has no knowledge of presenter discovery or request caching;
//! it only defines what a content item *is* and what a rendering host must
//! expose (a [`View`](ports::View)) for a model to be produced from it.

pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Model, StaticView, View};
pub use value_objects::{CacheHints, Item, ItemId, Locale};
