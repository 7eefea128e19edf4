//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Prism
///
/// Only presenter construction is fatal to a resolution call. Discovery
/// skips invalid registrations with diagnostics, a missing candidate falls
/// back to the standard presenter, and an absent model is `Ok(None)` at the
/// call site - none of those surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// A presenter constructor or model creation routine failed
    #[error("Construction of '{presenter}' failed: {message}")]
    Construction {
        /// Name of the presenter implementation that failed
        presenter: String,
        /// Description of the construction failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A registration declared one model type but produced another
    #[error("Registry error: {message}")]
    Registry {
        /// Description of the registry defect
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a construction error without a source
    pub fn construction(presenter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Construction {
            presenter: presenter.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a construction error wrapping a source error
    pub fn construction_with_source(
        presenter: impl Into<String>,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Construction {
            presenter: presenter.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a registry error
    pub fn registry(message: impl Into<String>) -> Self {
        Self::Registry {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }
}
