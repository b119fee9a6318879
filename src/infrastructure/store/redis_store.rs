//! Redis-backed redirect store.

use crate::domain::{RedirectStore, StoreError};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, aio::ConnectionManager};
use tracing::{debug, info};

/// Reads redirect mappings from Redis string keys.
///
/// Keys are `<prefix><path>`; with the default empty prefix the request path
/// is the Redis key. Uses `ConnectionManager` so clones share one
/// multiplexed connection that reconnects on its own.
///
/// Unlike a cache, lookup errors are not swallowed: they surface as
/// [`StoreError`] so the handler can answer 500.
pub struct RedisStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `key_prefix` - Namespace prepended to every lookup key (may be empty)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, key_prefix: impl Into<String>) -> Result<Self, StoreError> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            StoreError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.into(),
        })
    }
}

fn build_key(prefix: &str, path: &str) -> String {
    format!("{}{}", prefix, path)
}

fn map_redis_error(e: RedisError) -> StoreError {
    if e.is_io_error() {
        StoreError::Connection(e.to_string())
    } else {
        StoreError::Backend(e.to_string())
    }
}

#[async_trait]
impl RedirectStore for RedisStore {
    async fn lookup(&self, key: &str) -> Result<Option<String>, StoreError> {
        let redis_key = build_key(&self.key_prefix, key);
        let mut conn = self.client.clone();

        let value = conn
            .get::<_, Option<String>>(&redis_key)
            .await
            .map_err(map_redis_error)?;

        debug!(key = %redis_key, hit = value.is_some(), "Redis GET");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redis::ErrorKind;
    use std::io;

    #[test]
    fn test_build_key_without_prefix_is_the_path() {
        assert_eq!(build_key("", "/old-page"), "/old-page");
    }

    #[test]
    fn test_build_key_with_prefix() {
        assert_eq!(build_key("redirects:", "/old-page"), "redirects:/old-page");
        assert_eq!(build_key("redirects:", "/"), "redirects:/");
    }

    #[test]
    fn test_io_errors_map_to_connection() {
        let e = RedisError::from(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));

        assert!(matches!(map_redis_error(e), StoreError::Connection(_)));
    }

    #[test]
    fn test_other_errors_map_to_backend() {
        let e = RedisError::from((
            ErrorKind::UnexpectedReturnType,
            "Response was of incompatible type",
        ));

        match map_redis_error(e) {
            StoreError::Backend(message) => assert!(message.contains("incompatible type")),
            other => panic!("expected backend error, got {:?}", other),
        }
    }
}
