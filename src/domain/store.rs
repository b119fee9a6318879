//! Read-only capability over the redirect mapping.

use async_trait::async_trait;

/// Errors raised by a store backend while performing a lookup.
///
/// The handler treats every variant the same way (500, logged); the split
/// exists so logs say whether the backend was unreachable or misbehaved.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Key-value lookup over the path → target URL mapping.
///
/// Keys are request paths used verbatim; values are the raw stored strings,
/// which may or may not be valid URLs. The store gives no read-after-write
/// guarantee.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis-backed store
/// - [`crate::infrastructure::store::MemoryStore`] - Fixed in-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectStore: Send + Sync {
    /// Looks up the stored target for `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if the key is present
    /// - `Ok(None)` if the key is absent
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot answer. Implementations
    /// must not retry internally on behalf of the handler.
    async fn lookup(&self, key: &str) -> Result<Option<String>, StoreError>;
}
