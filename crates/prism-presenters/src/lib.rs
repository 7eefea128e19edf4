//! # Prism Presenters
//!
//! Presenter implementations and their models. Every presenter in this
//! crate registers itself into the discovery slice declared by
//! `prism-application`; linking this crate is what makes the
//! implementations resolvable.
//!
//! | Model | Presenter | Notes |
//! |-------|-----------|-------|
//! | [`NavigationModel`] | `navigation` | request-cached |
//! | [`BreadcrumbModel`] | `breadcrumb` | plain, rebuilt per call |
//! | [`PageMetadata`] | none | item-backed, served by the standard presenter |

pub mod breadcrumb;
pub mod metadata;
pub mod navigation;

pub use breadcrumb::{BreadcrumbModel, BreadcrumbPresenter, BreadcrumbSegment};
pub use metadata::PageMetadata;
pub use navigation::{NavigationEntry, NavigationModel, NavigationModelBuilder, NavigationPresenter};
