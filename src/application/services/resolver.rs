//! Path → target URL resolution.

use std::sync::Arc;

use crate::domain::{RedirectStore, StoreError};
use tracing::{debug, error};
use url::Url;

/// Why a path could not be resolved to a redirect target.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("No redirect for path")]
    NotFound,

    #[error("Retrieving path \"{path}\" from the store failed: {source}")]
    Store {
        path: String,
        #[source]
        source: StoreError,
    },

    #[error("Target URL for path \"{path}\" is not a valid URL: {source}")]
    InvalidTarget {
        path: String,
        #[source]
        source: url::ParseError,
    },
}

/// Resolves request paths against the redirect mapping.
///
/// Holds no per-request state; one instance is shared by all requests.
#[derive(Clone)]
pub struct RedirectResolver {
    store: Arc<dyn RedirectStore>,
}

impl RedirectResolver {
    pub fn new(store: Arc<dyn RedirectStore>) -> Self {
        Self { store }
    }

    /// Looks up `path` and parses the stored value as an absolute URL.
    ///
    /// The path is used as the key verbatim. Store failures and malformed
    /// targets are logged here with the path; misses are not.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::Store`] if the lookup itself fails
    /// - [`ResolveError::NotFound`] if the path has no mapping
    /// - [`ResolveError::InvalidTarget`] if the stored value does not parse
    pub async fn resolve(&self, path: &str) -> Result<Url, ResolveError> {
        let stored = match self.store.lookup(path).await {
            Ok(stored) => stored,
            Err(e) => {
                error!(path, error = %e, "Retrieving path from store returned an error");
                return Err(ResolveError::Store {
                    path: path.to_string(),
                    source: e,
                });
            }
        };

        let Some(raw_target) = stored else {
            debug!(path, "No redirect mapping");
            return Err(ResolveError::NotFound);
        };

        match Url::parse(&raw_target) {
            Ok(target) => Ok(target),
            Err(e) => {
                error!(path, error = %e, "Target URL is not a valid URL");
                Err(ResolveError::InvalidTarget {
                    path: path.to_string(),
                    source: e,
                })
            }
        }
    }
}
