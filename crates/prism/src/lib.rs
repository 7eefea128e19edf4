//! # Prism
//!
//! Presenter resolution for content rendering: discover every presenter
//! implementation linked into the process, resolve the one registered for
//! a requested model type, and memoize produced models per request.
//!
//! ## Example
//!
//! ```rust
//! use prism::{RequestScope, StaticView, resolve_presenter};
//! use prism::domain::{Item, ItemId, Locale};
//! use prism::presenters::NavigationModel;
//!
//! let view = StaticView::new(Locale::default())
//!     .with_item(Item::new(ItemId::new(), "Products", "/home/products"));
//! let scope = RequestScope::new();
//!
//! let presenter = resolve_presenter::<NavigationModel>().expect("construction succeeds");
//! let model = presenter.model(&view, &scope).expect("no construction failure");
//! assert!(model.is_some());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - content item value objects and the view/model ports
//! - `application` - registry, resolver and the request-scoped cache
//! - `presenters` - the shipped presenter implementations
//! - `config` / `logging` - host-side wiring for the CLI and embedders

/// Domain layer - value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use prism_domain::*;
}

/// Application layer - registry, resolver, request scope
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use prism_application::*;
}

/// Presenter implementations
///
/// Re-exporting this module links the implementations in, which is what
/// registers them for discovery
pub mod presenters {
    pub use prism_presenters::*;
}

pub mod config;
pub mod logging;

// Re-export the working surface at the crate root
pub use prism_application::{
    Presenter, RequestScope, StandardItemPresenter, default_presenter, list_presenters,
    presenter_index, resolve_presenter,
};
pub use prism_domain::{Error, Model, Result, StaticView, View};

pub use config::{AppConfig, ConfigLoader, LoggingConfig};
pub use logging::init_logging;
