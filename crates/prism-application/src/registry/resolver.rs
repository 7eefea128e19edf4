//! Model-type resolution
//!
//! Answers "which presenter serves this model type right now": item-backed
//! models take the fast path to the standard presenter, registered models
//! resolve through the candidate index, and everything else falls back to
//! the standard presenter silently - a missing candidate is not an error.

use std::any::{TypeId, type_name};

use prism_domain::{Model, Result};

use crate::ports::Presenter;
use crate::presenters::StandardItemPresenter;
use crate::registry::factory::instantiate;
use crate::registry::index::presenter_index;

/// Resolve the presenter serving model type `M`
///
/// The returned presenter is always compatible with `M`; the only failure
/// mode is a candidate whose construction fails, which propagates to the
/// caller uncaught.
pub fn resolve_presenter<M: Model>() -> Result<Box<dyn Presenter<M>>> {
    // Item-backed models never need a candidate search: the standard
    // presenter is always correct for them.
    if M::ITEM_BACKED {
        tracing::trace!(model = type_name::<M>(), "item-backed model, standard presenter");
        return Ok(Box::new(StandardItemPresenter::<M>::new()));
    }

    if let Some(candidate) = presenter_index().lookup(TypeId::of::<M>()) {
        tracing::debug!(
            presenter = candidate.name,
            model = candidate.model_name,
            "resolved presenter"
        );
        return instantiate::<M>(candidate);
    }

    tracing::trace!(model = type_name::<M>(), "no candidate, standard presenter");
    Ok(Box::new(StandardItemPresenter::<M>::new()))
}

/// The generic fallback presenter for model type `M`
pub fn default_presenter<M: Model>() -> StandardItemPresenter<M> {
    StandardItemPresenter::new()
}

/// List all registered presenters as (name, description) pairs
///
/// Useful for CLI output and host diagnostics.
pub fn list_presenters() -> Vec<(&'static str, &'static str)> {
    presenter_index()
        .candidates()
        .iter()
        .map(|candidate| (candidate.name, candidate.description))
        .collect()
}
