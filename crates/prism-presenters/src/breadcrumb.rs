//! Breadcrumb presenter
//!
//! Derives the ancestor trail of the current page from its content tree
//! path. Cheap enough to rebuild on every call, so it implements the
//! presenter contract directly without the request-cache decorator.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use prism_domain::{Model, Result, View};
use prism_application::ports::Presenter;
use prism_application::registry::{PRESENTERS, PresenterEntry};
use prism_application::request::RequestScope;

/// One ancestor in a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbSegment {
    /// Text the segment displays
    pub label: String,
    /// Content tree path the segment links to
    pub path: String,
}

/// The ancestor trail of the current page, root first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbModel {
    /// Trail segments from the root down to the current page
    pub trail: Vec<BreadcrumbSegment>,
}

impl Model for BreadcrumbModel {}

/// Builds [`BreadcrumbModel`] from the backing item's tree path
#[derive(Debug, Default)]
pub struct BreadcrumbPresenter;

impl Presenter<BreadcrumbModel> for BreadcrumbPresenter {
    fn model(
        &self,
        view: &dyn View,
        _scope: &RequestScope,
    ) -> Result<Option<Arc<BreadcrumbModel>>> {
        let Some(item) = view.item() else {
            return Ok(None);
        };

        let mut trail = Vec::new();
        let mut path = String::new();
        for segment in item.path.split('/').filter(|segment| !segment.is_empty()) {
            path.push('/');
            path.push_str(segment);
            trail.push(BreadcrumbSegment {
                label: segment.replace('-', " "),
                path: path.clone(),
            });
        }

        if trail.is_empty() {
            return Ok(None);
        }

        // The deepest segment represents the item itself; show its name.
        if let Some(last) = trail.last_mut() {
            last.label = item.name.clone();
        }

        Ok(Some(Arc::new(BreadcrumbModel { trail })))
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(PRESENTERS)]
static BREADCRUMB: PresenterEntry = PresenterEntry {
    name: "breadcrumb",
    description: "Ancestor trail derived from the backing item's tree path",
    module: module_path!(),
    priority: 0,
    model: std::any::TypeId::of::<BreadcrumbModel>,
    model_name: std::any::type_name::<BreadcrumbModel>,
    construct: || {
        Ok(Box::new(
            Box::new(BreadcrumbPresenter) as Box<dyn Presenter<BreadcrumbModel>>
        ))
    },
};
