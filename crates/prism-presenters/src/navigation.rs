//! Navigation presenter
//!
//! Builds the menu structure for a view from its datasource items. Menus
//! are rendered by several components on one page, so the presenter is
//! request-cached: the model is built once per request and shared.

use serde::{Deserialize, Serialize};

use prism_domain::{Item, Model, Result, View};
use prism_application::ports::Presenter;
use prism_application::registry::{PRESENTERS, PresenterEntry};
use prism_application::request::{ModelBuilder, RequestCachedPresenter};

/// Field holding the label a navigation entry shows, when it differs from
/// the item name
const MENU_TITLE_FIELD: &str = "menu title";

/// One entry of a navigation menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationEntry {
    /// Text the entry displays
    pub label: String,
    /// Content tree path the entry links to
    pub path: String,
}

impl NavigationEntry {
    fn from_item(item: &Item) -> Self {
        let label = item
            .field(MENU_TITLE_FIELD)
            .filter(|value| !value.is_empty())
            .unwrap_or(&item.name)
            .to_string();
        Self {
            label,
            path: item.path.clone(),
        }
    }
}

/// Menu structure for one view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationModel {
    /// Locale the labels were read in
    pub locale: String,
    /// Menu entries in datasource order
    pub entries: Vec<NavigationEntry>,
}

impl Model for NavigationModel {}

/// Builds [`NavigationModel`] from a view's datasource items
#[derive(Debug, Default)]
pub struct NavigationModelBuilder;

impl ModelBuilder<NavigationModel> for NavigationModelBuilder {
    fn should_create_model(&self, view: &dyn View) -> bool {
        !view.items().is_empty()
    }

    fn create_model(&self, view: &dyn View) -> Result<Option<NavigationModel>> {
        let entries: Vec<NavigationEntry> =
            view.items().iter().map(NavigationEntry::from_item).collect();
        tracing::trace!(entries = entries.len(), "navigation model built");
        Ok(Some(NavigationModel {
            locale: view.locale().to_string(),
            entries,
        }))
    }
}

/// The registered navigation presenter: the builder behind the
/// request-cache decorator
pub type NavigationPresenter = RequestCachedPresenter<NavigationModelBuilder>;

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(PRESENTERS)]
static NAVIGATION: PresenterEntry = PresenterEntry {
    name: "navigation",
    description: "Menu structure built from the view's datasource items, cached per request",
    module: module_path!(),
    priority: 0,
    model: std::any::TypeId::of::<NavigationModel>,
    model_name: std::any::type_name::<NavigationModel>,
    construct: || {
        Ok(Box::new(
            Box::new(NavigationPresenter::default()) as Box<dyn Presenter<NavigationModel>>
        ))
    },
};
