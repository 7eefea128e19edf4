//! Tests for candidate index construction
//!
//! Builds indexes over crafted entry sets to pin down validation,
//! deterministic ordering, conflict handling and partial-failure
//! tolerance - independent of what happens to be linked into the test
//! binary.

use std::any::{Any, TypeId, type_name};

use prism_application::registry::{CandidateIndex, PresenterEntry, SkipReason};

struct AlphaModel;
struct BetaModel;

fn construct_nothing() -> prism_domain::Result<Box<dyn Any + Send + Sync>> {
    Ok(Box::new(()))
}

fn entry(
    name: &'static str,
    priority: i16,
    model: fn() -> TypeId,
    model_name: fn() -> &'static str,
) -> PresenterEntry {
    PresenterEntry {
        name,
        description: "test entry",
        module: module_path!(),
        priority,
        model,
        model_name,
        construct: construct_nothing,
    }
}

#[test]
fn build_orders_by_priority_then_name() {
    let entries = [
        entry("zebra", 0, TypeId::of::<AlphaModel>, type_name::<AlphaModel>),
        entry("apple", 0, TypeId::of::<BetaModel>, type_name::<BetaModel>),
        entry("late-but-important", 5, TypeId::of::<BetaModel>, type_name::<BetaModel>),
    ];

    let index = CandidateIndex::build(&entries);

    let names: Vec<&str> = index.candidates().iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec!["late-but-important", "apple", "zebra"],
        "order must be priority descending, then name ascending"
    );
}

#[test]
fn invalid_entries_are_skipped_without_affecting_the_rest() {
    let entries = [
        entry("", 0, TypeId::of::<AlphaModel>, type_name::<AlphaModel>),
        entry("valid", 0, TypeId::of::<BetaModel>, type_name::<BetaModel>),
        entry("nameless-model", 0, TypeId::of::<AlphaModel>, || ""),
    ];

    let index = CandidateIndex::build(&entries);

    assert_eq!(index.len(), 1, "only the valid entry should survive");
    assert_eq!(index.candidates()[0].name, "valid");

    let reasons: Vec<&SkipReason> = index.diagnostics().iter().map(|d| &d.reason).collect();
    assert!(reasons.contains(&&SkipReason::EmptyName));
    assert!(reasons.contains(&&SkipReason::EmptyModelName));
}

#[test]
fn higher_priority_wins_the_model() {
    let entries = [
        entry("standard", 0, TypeId::of::<AlphaModel>, type_name::<AlphaModel>),
        entry("special", 10, TypeId::of::<AlphaModel>, type_name::<AlphaModel>),
    ];

    let index = CandidateIndex::build(&entries);

    let winner = index
        .lookup(TypeId::of::<AlphaModel>())
        .expect("a candidate should win the model");
    assert_eq!(winner.name, "special");

    let shadowed: Vec<_> = index
        .diagnostics()
        .iter()
        .filter(|d| matches!(d.reason, SkipReason::Shadowed { by: "special" }))
        .collect();
    assert_eq!(shadowed.len(), 1);
    assert_eq!(shadowed[0].name, "standard");
}

#[test]
fn equal_priority_conflict_resolves_lexicographically() {
    let entries = [
        entry("walnut", 0, TypeId::of::<AlphaModel>, type_name::<AlphaModel>),
        entry("almond", 0, TypeId::of::<AlphaModel>, type_name::<AlphaModel>),
    ];

    let index = CandidateIndex::build(&entries);

    let winner = index
        .lookup(TypeId::of::<AlphaModel>())
        .expect("a candidate should win the model");
    assert_eq!(
        winner.name, "almond",
        "equal priority must resolve deterministically by name"
    );
}

#[test]
fn exact_re_registration_is_dropped_as_duplicate() {
    let entries = [
        entry("nav", 0, TypeId::of::<AlphaModel>, type_name::<AlphaModel>),
        entry("nav", 0, TypeId::of::<AlphaModel>, type_name::<AlphaModel>),
    ];

    let index = CandidateIndex::build(&entries);

    assert_eq!(index.len(), 1);
    assert!(
        index
            .diagnostics()
            .iter()
            .any(|d| d.reason == SkipReason::Duplicate)
    );
}

#[test]
fn lookup_misses_for_unregistered_model() {
    let entries = [entry("nav", 0, TypeId::of::<AlphaModel>, type_name::<AlphaModel>)];

    let index = CandidateIndex::build(&entries);

    assert!(index.lookup(TypeId::of::<BetaModel>()).is_none());
}

#[test]
fn empty_entry_set_builds_an_empty_index() {
    let index = CandidateIndex::build(&[]);
    assert!(index.is_empty());
    assert!(index.diagnostics().is_empty());
}
