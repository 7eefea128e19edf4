//! The generic item-conversion presenter
//!
//! Serves two roles: the fast path for item-backed model types, and the
//! silent fallback when no candidate is registered for a model. Either
//! way it does one thing - hand the view's backing item to the model's
//! own conversion.

use std::marker::PhantomData;
use std::sync::Arc;

use prism_domain::{Model, Result, View};

use crate::ports::Presenter;
use crate::request::RequestScope;

/// Converts the view's backing item into the requested model
///
/// Absent when the view has no backing item or the model's conversion
/// declines it; for non-item-backed models the default conversion always
/// declines, so the fallback path yields "nothing to render" rather than
/// a wrong model.
pub struct StandardItemPresenter<M> {
    _model: PhantomData<fn() -> M>,
}

impl<M> StandardItemPresenter<M> {
    /// Create a new standard presenter
    pub fn new() -> Self {
        Self { _model: PhantomData }
    }
}

impl<M> Default for StandardItemPresenter<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Model> Presenter<M> for StandardItemPresenter<M> {
    fn model(&self, view: &dyn View, _scope: &RequestScope) -> Result<Option<Arc<M>>> {
        Ok(view
            .item()
            .and_then(|item| M::from_item(item, view.locale()))
            .map(Arc::new))
    }
}
