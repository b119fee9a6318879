//! Redirect mapping backends.
//!
//! - [`RedisStore`] - Production Redis-backed store
//! - [`MemoryStore`] - Fixed in-memory mapping for tests and embedding

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
