//! The memoizing presenter decorator
//!
//! Wraps a model-building recipe into a [`Presenter`] that constructs the
//! model at most once per (implementation, item) pair per request. Per
//! request, the decorated implementation moves through three states:
//! uncomputed, suppressed (the guard declined, remembered for the rest of
//! the request) and cached.

use std::any::{Any, type_name};
use std::sync::Arc;

use prism_domain::{Model, Result, View};

use crate::ports::Presenter;
use crate::request::scope::RequestScope;

/// Marker stored in the scope when the guard declined
struct Suppressed;

/// A recipe for building one model type from a view
///
/// Implementations supply the guard and the creation routine; the
/// decorator owns caching. The default cache key is
/// `"<implementation type>#<item id>"`, and `None` - no backing item, no
/// usable key - turns memoization off for the call.
pub trait ModelBuilder<M: Model>: Send + Sync {
    /// Whether a model should be created for this view at all
    fn should_create_model(&self, view: &dyn View) -> bool;

    /// Build the model, absent when the view's data does not yield one
    fn create_model(&self, view: &dyn View) -> Result<Option<M>>;

    /// Derive the request-cache key for this view
    fn cache_key(&self, view: &dyn View) -> Option<String> {
        view.item()
            .map(|item| format!("{}#{}", type_name::<Self>(), item.id))
    }
}

/// Decorator memoizing a [`ModelBuilder`] in the request scope
///
/// Within one scope, the first successful construction is the one every
/// later call observes (identical `Arc`), and a declined guard is
/// remembered without re-evaluation. Across scopes nothing is shared.
/// When the key derivation yields no key, guard and creation run on every
/// call - the view has no backing identity to memoize under.
pub struct RequestCachedPresenter<B> {
    builder: B,
}

impl<B> RequestCachedPresenter<B> {
    /// Wrap a builder
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    /// The wrapped builder
    pub fn builder(&self) -> &B {
        &self.builder
    }
}

impl<B: Default> Default for RequestCachedPresenter<B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}

impl<M: Model, B: ModelBuilder<M>> Presenter<M> for RequestCachedPresenter<B> {
    fn model(&self, view: &dyn View, scope: &RequestScope) -> Result<Option<Arc<M>>> {
        let suppressed_key = format!("{}#suppressed", type_name::<B>());
        if scope.get(&suppressed_key).is_some() {
            return Ok(None);
        }

        let Some(key) = self.builder.cache_key(view) else {
            // No usable key: construct directly, nothing is remembered.
            if !self.builder.should_create_model(view) {
                return Ok(None);
            }
            return Ok(self.builder.create_model(view)?.map(Arc::new));
        };

        if let Some(stored) = scope.get(&key) {
            if let Ok(model) = stored.downcast::<M>() {
                tracing::trace!(key = %key, "request cache hit");
                return Ok(Some(model));
            }
        }

        if !self.builder.should_create_model(view) {
            scope.insert(suppressed_key, Arc::new(Suppressed));
            return Ok(None);
        }

        match self.builder.create_model(view)? {
            Some(model) => {
                let created = Arc::new(model);
                let stored =
                    scope.insert(key, Arc::clone(&created) as Arc<dyn Any + Send + Sync>);
                // First write wins: hand back whatever the scope holds.
                Ok(Some(stored.downcast::<M>().unwrap_or(created)))
            }
            None => Ok(None),
        }
    }
}
