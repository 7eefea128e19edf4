//! Tests for presenter resolution
//!
//! Uses `extern crate prism_presenters` to force linkme registration of
//! the real presenters, then resolves through the real process-wide index.
//! Additional entries registered by this test binary cover the fast path,
//! construction failures, registration defects and partial-failure
//! tolerance end to end.

// Force linkme registration of all presenters from prism-presenters
extern crate prism_presenters;

use std::any::TypeId;
use std::sync::Arc;

use prism_application::ports::Presenter;
use prism_application::registry::{
    PRESENTERS, PresenterEntry, SkipReason, list_presenters, presenter_index, resolve_presenter,
};
use prism_application::request::RequestScope;
use prism_application::StandardItemPresenter;
use prism_domain::{Error, Item, ItemId, Locale, Model, Result, StaticView, View};
use prism_presenters::{NavigationModel, PageMetadata};

fn view_with_item(item: Item) -> StaticView {
    StaticView::new(Locale::default()).with_item(item)
}

fn page_item() -> Item {
    Item::new(ItemId::new(), "Products", "/home/products")
        .with_field("browser title", "Products | Example Site")
}

// ============================================================================
// Candidate resolution and fallback
// ============================================================================

#[test]
fn registered_model_resolves_to_its_candidate() {
    let presenter = resolve_presenter::<NavigationModel>().expect("construction should succeed");

    let view = view_with_item(page_item());
    let scope = RequestScope::new();
    let model = presenter
        .model(&view, &scope)
        .expect("navigation creation should succeed")
        .expect("a view with items should yield a menu");

    // The standard presenter would have produced nothing for this computed
    // model type; content proves the registered candidate served the call.
    assert_eq!(model.entries.len(), 1);
    assert_eq!(model.entries[0].path, "/home/products");
}

struct UnregisteredModel;

impl Model for UnregisteredModel {}

#[test]
fn unregistered_model_falls_back_to_standard_presenter() {
    assert!(
        presenter_index()
            .lookup(TypeId::of::<UnregisteredModel>())
            .is_none(),
        "precondition: nothing registered for this model"
    );

    let presenter =
        resolve_presenter::<UnregisteredModel>().expect("fallback must not be an error");

    let view = view_with_item(page_item());
    let scope = RequestScope::new();
    let model = presenter.model(&view, &scope).expect("conversion cannot fail");
    assert!(
        model.is_none(),
        "the default conversion declines items for computed models"
    );
}

#[test]
fn list_includes_shipped_presenters() {
    let listed = list_presenters();
    let names: Vec<&str> = listed.iter().map(|(name, _)| *name).collect();

    assert!(names.contains(&"navigation"), "available: {names:?}");
    assert!(names.contains(&"breadcrumb"), "available: {names:?}");
    for (name, description) in &listed {
        assert!(!name.is_empty());
        assert!(!description.is_empty(), "'{name}' should have a description");
    }
}

// ============================================================================
// Item-backed fast path
// ============================================================================

/// Deliberately-wrong candidate for an item-backed model; resolution must
/// never consult it.
struct MisleadingMetadataPresenter;

impl Presenter<PageMetadata> for MisleadingMetadataPresenter {
    fn model(&self, _view: &dyn View, _scope: &RequestScope) -> Result<Option<Arc<PageMetadata>>> {
        Ok(Some(Arc::new(PageMetadata {
            browser_title: "WRONG PRESENTER".to_string(),
            description: None,
            keywords: Vec::new(),
            canonical_path: String::new(),
            language: String::new(),
        })))
    }
}

#[linkme::distributed_slice(PRESENTERS)]
static MISLEADING_METADATA: PresenterEntry = PresenterEntry {
    name: "misleading-metadata",
    description: "Candidate that must lose to the item-backed fast path",
    module: module_path!(),
    priority: 100,
    model: TypeId::of::<PageMetadata>,
    model_name: std::any::type_name::<PageMetadata>,
    construct: || {
        Ok(Box::new(
            Box::new(MisleadingMetadataPresenter) as Box<dyn Presenter<PageMetadata>>
        ))
    },
};

#[test]
fn item_backed_model_skips_the_candidate_index() {
    assert!(
        presenter_index()
            .lookup(TypeId::of::<PageMetadata>())
            .is_some(),
        "precondition: the index, if consulted, would return the misleading candidate"
    );

    let presenter = resolve_presenter::<PageMetadata>().expect("fast path cannot fail");

    let view = view_with_item(page_item());
    let scope = RequestScope::new();
    let metadata = presenter
        .model(&view, &scope)
        .expect("conversion should succeed")
        .expect("item-backed conversion should accept the item");

    assert_eq!(metadata.browser_title, "Products | Example Site");
}

// ============================================================================
// Construction failures and registration defects
// ============================================================================

struct FailingConstructionModel;

impl Model for FailingConstructionModel {}

#[linkme::distributed_slice(PRESENTERS)]
static FAILING_CONSTRUCTION: PresenterEntry = PresenterEntry {
    name: "failing-construction",
    description: "Candidate whose constructor always fails",
    module: module_path!(),
    priority: 0,
    model: TypeId::of::<FailingConstructionModel>,
    model_name: std::any::type_name::<FailingConstructionModel>,
    construct: || Err(Error::construction("failing-construction", "backing service unavailable")),
};

#[test]
fn constructor_failure_propagates_to_the_caller() {
    let result = resolve_presenter::<FailingConstructionModel>();
    assert!(
        matches!(result, Err(Error::Construction { .. })),
        "construction failures must surface unmodified"
    );
}

struct DeclaredModel;

impl Model for DeclaredModel {}

struct ActualModel;

impl Model for ActualModel {}

#[linkme::distributed_slice(PRESENTERS)]
static MISMATCHED: PresenterEntry = PresenterEntry {
    name: "mismatched",
    description: "Candidate declaring one model but constructing for another",
    module: module_path!(),
    priority: 0,
    model: TypeId::of::<DeclaredModel>,
    model_name: std::any::type_name::<DeclaredModel>,
    construct: || {
        Ok(Box::new(
            Box::new(StandardItemPresenter::<ActualModel>::new()) as Box<dyn Presenter<ActualModel>>
        ))
    },
};

#[test]
fn model_type_mismatch_is_a_registry_error() {
    let result = resolve_presenter::<DeclaredModel>();
    assert!(
        matches!(result, Err(Error::Registry { .. })),
        "an incompatible presenter must never be handed back"
    );
}

// ============================================================================
// Partial-failure tolerance through the real slice
// ============================================================================

struct IgnoredModel;

impl Model for IgnoredModel {}

#[linkme::distributed_slice(PRESENTERS)]
static NAMELESS: PresenterEntry = PresenterEntry {
    name: "",
    description: "Entry that cannot be indexed",
    module: module_path!(),
    priority: 0,
    model: TypeId::of::<IgnoredModel>,
    model_name: std::any::type_name::<IgnoredModel>,
    construct: || Ok(Box::new(())),
};

#[test]
fn invalid_registration_is_diagnosed_and_the_rest_stay_usable() {
    let index = presenter_index();

    assert!(
        index
            .diagnostics()
            .iter()
            .any(|d| d.reason == SkipReason::EmptyName),
        "the nameless registration should be diagnosed, not fatal"
    );

    // Discovery of everything else is unaffected.
    assert!(index.lookup(TypeId::of::<NavigationModel>()).is_some());
}
