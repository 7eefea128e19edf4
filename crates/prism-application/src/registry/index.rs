//! The candidate index
//!
//! Builds the process-wide snapshot of presenter candidates from the
//! registration slice. The build validates every contributed entry,
//! orders the survivors deterministically and records one winner per
//! model type. It runs once, lazily, behind a [`LazyLock`]; afterwards
//! the snapshot is immutable and read without synchronization.

use std::any::TypeId;
use std::collections::hash_map::Entry as MapEntry;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

use crate::registry::entry::{PRESENTERS, PresenterEntry};

/// A validated presenter registration
///
/// Captured once at index build from a [`PresenterEntry`]; the fn-pointer
/// type handles of the entry are resolved to concrete values here.
pub struct Candidate {
    /// Registration name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Module that contributed the registration
    pub module: &'static str,
    /// Tie-break priority; higher wins
    pub priority: i16,
    /// Type name of the model this candidate serves
    pub model_name: &'static str,
    /// Type id of the model this candidate serves
    pub(crate) model: TypeId,
    /// Zero-argument constructor, run by the factory at resolution time
    pub(crate) construct: fn() -> prism_domain::Result<Box<dyn std::any::Any + Send + Sync>>,
}

/// Why an entry was left out of the candidate set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry declared no registration name
    EmptyName,
    /// The entry declared no model type name
    EmptyModelName,
    /// The same (name, model) pair was already registered
    Duplicate,
    /// Another candidate won the model this entry serves
    Shadowed {
        /// Name of the winning candidate
        by: &'static str,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => f.write_str("registration name is empty"),
            Self::EmptyModelName => f.write_str("model type name is empty"),
            Self::Duplicate => f.write_str("duplicate registration"),
            Self::Shadowed { by } => write!(f, "shadowed by '{by}'"),
        }
    }
}

/// Record of an entry the index build skipped or demoted
///
/// Partial discovery failure is not an error: the affected entry is left
/// out, the rest of its module's entries stay in, and the record lands
/// here for operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Registration name as declared, possibly empty
    pub name: &'static str,
    /// Module that contributed the entry
    pub module: &'static str,
    /// Model type name as declared, possibly empty
    pub model_name: &'static str,
    /// Why the entry was skipped
    pub reason: SkipReason,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' (model {}, from {}): {}",
            self.name, self.model_name, self.module, self.reason
        )
    }
}

/// Immutable snapshot of every usable presenter registration
///
/// Candidates are ordered by descending priority, then name, then model
/// type name - never by link order, which is not reproducible across
/// builds. Exactly one candidate wins each model type; shadowed rivals
/// stay listed but are recorded in the diagnostics.
pub struct CandidateIndex {
    candidates: Vec<Candidate>,
    by_model: HashMap<TypeId, usize>,
    diagnostics: Vec<Diagnostic>,
}

impl CandidateIndex {
    /// Build an index from a set of registration entries
    ///
    /// Never fails: entries that do not validate are skipped with a
    /// diagnostic and a warning, and the build proceeds with the rest.
    pub fn build(entries: &[PresenterEntry]) -> Self {
        let mut candidates = Vec::with_capacity(entries.len());
        let mut diagnostics = Vec::new();

        for entry in entries {
            let model_name = (entry.model_name)();
            if entry.name.trim().is_empty() {
                diagnostics.push(Diagnostic {
                    name: entry.name,
                    module: entry.module,
                    model_name,
                    reason: SkipReason::EmptyName,
                });
                continue;
            }
            if model_name.trim().is_empty() {
                diagnostics.push(Diagnostic {
                    name: entry.name,
                    module: entry.module,
                    model_name,
                    reason: SkipReason::EmptyModelName,
                });
                continue;
            }
            candidates.push(Candidate {
                name: entry.name,
                description: entry.description,
                module: entry.module,
                priority: entry.priority,
                model_name,
                model: (entry.model)(),
                construct: entry.construct,
            });
        }

        candidates.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| a.name.cmp(b.name))
                .then_with(|| a.model_name.cmp(b.model_name))
        });

        // Drop exact re-registrations, keeping the first in sorted order.
        let mut seen: HashSet<(&'static str, TypeId)> = HashSet::new();
        let mut deduped = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if seen.insert((candidate.name, candidate.model)) {
                deduped.push(candidate);
            } else {
                diagnostics.push(Diagnostic {
                    name: candidate.name,
                    module: candidate.module,
                    model_name: candidate.model_name,
                    reason: SkipReason::Duplicate,
                });
            }
        }

        let mut by_model: HashMap<TypeId, usize> = HashMap::new();
        for (position, candidate) in deduped.iter().enumerate() {
            match by_model.entry(candidate.model) {
                MapEntry::Vacant(slot) => {
                    slot.insert(position);
                }
                MapEntry::Occupied(slot) => {
                    let winner = &deduped[*slot.get()];
                    diagnostics.push(Diagnostic {
                        name: candidate.name,
                        module: candidate.module,
                        model_name: candidate.model_name,
                        reason: SkipReason::Shadowed { by: winner.name },
                    });
                }
            }
        }

        for diagnostic in &diagnostics {
            tracing::warn!(
                name = diagnostic.name,
                module = diagnostic.module,
                model = diagnostic.model_name,
                reason = %diagnostic.reason,
                "presenter registration skipped"
            );
        }

        Self {
            candidates: deduped,
            by_model,
            diagnostics,
        }
    }

    /// The candidate registered for a model type, if any
    pub fn lookup(&self, model: TypeId) -> Option<&Candidate> {
        self.by_model.get(&model).map(|&position| &self.candidates[position])
    }

    /// All candidates in deterministic order
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Entries skipped or demoted during the build
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of usable candidates
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the index holds no candidates at all
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

static PRESENTER_INDEX: LazyLock<CandidateIndex> = LazyLock::new(|| {
    let index = CandidateIndex::build(&PRESENTERS);
    tracing::debug!(
        candidates = index.len(),
        skipped = index.diagnostics().len(),
        "presenter index built"
    );
    index
});

/// The process-wide candidate index for the presenter contract
///
/// Built once on first use; concurrent first callers block on the same
/// build and every later call reads the published snapshot lock-free.
pub fn presenter_index() -> &'static CandidateIndex {
    &PRESENTER_INDEX
}
