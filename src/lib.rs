//! # Redirect Resolver
//!
//! A minimal HTTP redirect service: the request path is looked up in a
//! key-value store and the client is redirected to the stored URL.
//!
//! ## Request handling
//!
//! | Condition | Response |
//! |---|---|
//! | Method is not `GET` | 405 |
//! | Store lookup fails | 500 (logged) |
//! | Path has no mapping | 404 |
//! | Stored value is not an absolute URL | 500 (logged) |
//! | Otherwise | Configured redirect status (default 302) to the target |
//!
//! Error responses are small `text/html` documents. Paths are matched
//! exactly, without normalization.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Store trait and redirect status
//! - **Application Layer** ([`application`]) - Lookup and target validation
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - Handler, error pages, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"
//! redis-cli SET /old-page https://example.com/new
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

#[cfg(test)]
mod test_support;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{RedirectResolver, ResolveError};
    pub use crate::domain::{RedirectStatus, RedirectStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryStore, RedisStore};
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
