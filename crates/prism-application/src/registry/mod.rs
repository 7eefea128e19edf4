//! Presenter Registry System
//!
//! Auto-registration infrastructure for presenter implementations. Uses the
//! `linkme` crate for compile-time registration of presenters that are
//! discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                 Presenter Registration Flow                    │
//! ├────────────────────────────────────────────────────────────────┤
//! │                                                                │
//! │  1. Implementation:  #[linkme::distributed_slice(PRESENTERS)]  │
//! │                      static ENTRY: PresenterEntry = ...        │
//! │                            ↓                                   │
//! │  2. First use:       presenter_index() builds the validated,   │
//! │                      deterministically ordered CandidateIndex  │
//! │                            ↓                                   │
//! │  3. Resolution:      resolve_presenter::<M>() looks up the     │
//! │                      candidate registered for TypeId::of::<M>  │
//! │                            ↓                                   │
//! │  4. Construction:    the entry's constructor runs; the erased  │
//! │                      result downcasts to Box<dyn Presenter<M>> │
//! │                                                                │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Invalid registrations never fail the build of the index: they are
//! skipped with a [`Diagnostic`] and a warning, and every other module's
//! entries stay usable.

/// Registration entry and the distributed slice
pub mod entry;
/// Candidate instantiation
pub mod factory;
/// The candidate index
pub mod index;
/// Model-type resolution
pub mod resolver;

pub use entry::{PRESENTERS, PresenterEntry};
pub use factory::instantiate;
pub use index::{Candidate, CandidateIndex, Diagnostic, SkipReason, presenter_index};
pub use resolver::{default_presenter, list_presenters, resolve_presenter};
