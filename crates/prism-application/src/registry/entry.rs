//! Registration entry and the distributed slice
//!
//! Each presenter implementation contributes one [`PresenterEntry`] to the
//! [`PRESENTERS`] slice, declaring which model type it serves and how to
//! construct it. The declaration is the whole discovery surface: no
//! inheritance walking, no runtime scanning beyond reading the slice.

use std::any::{Any, TypeId};

use prism_domain::Result;

/// Registry entry for presenter implementations
///
/// The constructor returns the presenter double-boxed
/// (`Box<dyn Presenter<M>>` inside `Box<dyn Any>`) so entries for
/// different model types share one slice; resolution recovers the typed
/// box by downcast. An entry whose constructor produces a presenter for a
/// model other than the one it declares fails resolution with a registry
/// error.
///
/// ## Registering an implementation
///
/// ```ignore
/// use prism_application::registry::{PRESENTERS, PresenterEntry};
///
/// #[linkme::distributed_slice(PRESENTERS)]
/// static NAVIGATION: PresenterEntry = PresenterEntry {
///     name: "navigation",
///     description: "Menu structure for the current view",
///     module: module_path!(),
///     priority: 0,
///     model: std::any::TypeId::of::<NavigationModel>,
///     model_name: std::any::type_name::<NavigationModel>,
///     construct: || {
///         Ok(Box::new(
///             Box::new(NavigationPresenter::default()) as Box<dyn Presenter<NavigationModel>>
///         ))
///     },
/// };
/// ```
pub struct PresenterEntry {
    /// Unique registration name (e.g. "navigation")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Module that contributed the entry, for diagnostics
    pub module: &'static str,
    /// Tie-break when several entries serve the same model; higher wins
    pub priority: i16,
    /// Type handle of the model this implementation serves
    pub model: fn() -> TypeId,
    /// Type name of the model, for listings and diagnostics
    pub model_name: fn() -> &'static str,
    /// Zero-argument constructor producing the type-erased presenter
    pub construct: fn() -> Result<Box<dyn Any + Send + Sync>>,
}

// Auto-collection via linkme distributed slices - implementations submit
// entries at compile time
#[linkme::distributed_slice]
pub static PRESENTERS: [PresenterEntry] = [..];
