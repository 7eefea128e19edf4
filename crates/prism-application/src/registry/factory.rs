//! Candidate instantiation
//!
//! Runs a candidate's zero-argument constructor and recovers the typed
//! presenter from the erased construction. Construction failures are the
//! one fatal path in resolution and propagate to the caller unmodified.

use prism_domain::{Error, Model, Result};

use crate::ports::Presenter;
use crate::registry::index::Candidate;

/// Construct a ready-to-use presenter from a resolved candidate
///
/// Fails with [`Error::Construction`] when the candidate's constructor
/// fails, and with [`Error::Registry`] when the constructed presenter does
/// not serve the model type the registration declared - the registration
/// lied, and handing back an incompatible object is never an option.
pub fn instantiate<M: Model>(candidate: &Candidate) -> Result<Box<dyn Presenter<M>>> {
    let erased = (candidate.construct)().map_err(|source| Error::Construction {
        presenter: candidate.name.to_string(),
        message: "presenter constructor failed".to_string(),
        source: Some(Box::new(source)),
    })?;

    match erased.downcast::<Box<dyn Presenter<M>>>() {
        Ok(presenter) => Ok(*presenter),
        Err(_) => Err(Error::registry(format!(
            "candidate '{}' is registered for model {} but constructed an incompatible presenter",
            candidate.name, candidate.model_name
        ))),
    }
}
