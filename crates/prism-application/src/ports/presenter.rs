//! The presenter contract
//!
//! A presenter turns the backing data of one view into the strongly-typed
//! model that view renders. One operation, nothing else: resolution and
//! caching live around the contract, not inside it.

use std::sync::Arc;

use prism_domain::{Model, Result, View};

use crate::request::RequestScope;

/// Contract for presenters of model type `M`
///
/// `Ok(None)` means "nothing to render" and is not an error; the host is
/// expected to skip the view. Errors are reserved for failed model
/// construction, which aborts the calling operation.
///
/// The request scope is threaded explicitly so implementations that memoize
/// (see [`RequestCachedPresenter`](crate::request::RequestCachedPresenter))
/// need no ambient request state; plain implementations ignore it.
pub trait Presenter<M: Model>: Send + Sync {
    /// Produce the model for the given view, absent when there is nothing
    /// to render
    fn model(&self, view: &dyn View, scope: &RequestScope) -> Result<Option<Arc<M>>>;
}
