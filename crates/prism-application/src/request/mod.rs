//! Request-scoped state
//!
//! One [`RequestScope`] lives for one logical request; hosts construct it
//! at request start and drop it at request end. The
//! [`RequestCachedPresenter`] decorator memoizes model construction in the
//! scope so a model is built at most once per (implementation, item) pair
//! per request.

/// The memoizing presenter decorator
pub mod cached;
/// The request-lifetime key/value store
pub mod scope;

pub use cached::{ModelBuilder, RequestCachedPresenter};
pub use scope::RequestScope;
