//! Trait definition for pluggable organic search backends.
//!
//! The rank-check pipeline only depends on [`OrganicSearch`], never on a
//! particular transport, endpoint or authentication scheme.

use crate::error::SearchError;
use crate::types::OrganicResult;

/// A backend that returns the organic results for a query.
///
/// Implementors handle their own request construction, authentication and
/// response parsing. An empty result set is a successful lookup, not an
/// error.
///
/// All implementations must be `Send + Sync` so a checker can be moved
/// onto a runtime task.
pub trait OrganicSearch: Send + Sync {
    /// Look up the organic results for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the request fails, the API answers with a
    /// non-success status, or the response cannot be parsed.
    fn organic(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Vec<OrganicResult>, SearchError>> + Send;

    /// Short backend name used in log fields.
    fn name(&self) -> &'static str;
}

impl<T: OrganicSearch + ?Sized> OrganicSearch for &T {
    fn organic(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Vec<OrganicResult>, SearchError>> + Send {
        (**self).organic(query)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
