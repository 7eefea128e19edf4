//! Output-caching preference flags
//!
//! Views declare how their rendered output may be cached by the host.
//! Prism carries these flags for the rendering layer; model resolution
//! itself never interprets them.

use serde::{Deserialize, Serialize};

/// Value Object: Output-Caching Preferences
///
/// Declares whether a view's output is cacheable at all and which request
/// dimensions the cached output must vary by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheHints {
    /// Whether the output can be cached at all
    pub cacheable: bool,
    /// Cache discretely per backing-data item
    pub vary_by_data: bool,
    /// Cache discretely per device profile
    pub vary_by_device: bool,
    /// Cache discretely per authenticated user
    pub vary_by_login: bool,
    /// Cache discretely per rendering parameters
    pub vary_by_parameters: bool,
    /// Cache discretely per query string
    pub vary_by_query_string: bool,
    /// Cache discretely per visitor session
    pub vary_by_session: bool,
}

impl CacheHints {
    /// Cacheable output varying by backing-data item, the common case
    pub fn cacheable_by_data() -> Self {
        Self {
            cacheable: true,
            vary_by_data: true,
            ..Self::default()
        }
    }
}
