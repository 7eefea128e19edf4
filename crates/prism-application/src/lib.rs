//! # Prism Application
//!
//! The presenter-resolution core: the [`Presenter`](ports::Presenter)
//! contract, the discovery registry that indexes every implementation
//! linked into the process, the resolver that picks one per model type,
//! and the request-scoped model cache.
//!
//! ## Resolution flow
//!
//! ```text
//! resolve_presenter::<M>()
//!        │
//!        ├─ M::ITEM_BACKED ──────────────► StandardItemPresenter<M>
//!        │
//!        ├─ presenter_index().lookup(M) ─► instantiate the candidate
//!        │
//!        └─ no candidate ────────────────► StandardItemPresenter<M>
//! ```
//!
//! Implementations self-declare through a [`linkme`] distributed slice
//! (see [`registry::PRESENTERS`]); nothing here names a concrete
//! implementation.

pub mod ports;
pub mod presenters;
pub mod registry;
pub mod request;

pub use ports::Presenter;
pub use presenters::StandardItemPresenter;
pub use registry::{
    Candidate, CandidateIndex, Diagnostic, PresenterEntry, PRESENTERS, SkipReason,
    default_presenter, list_presenters, presenter_index, resolve_presenter,
};
pub use request::{ModelBuilder, RequestCachedPresenter, RequestScope};
