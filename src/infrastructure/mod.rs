//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of [`crate::domain::RedirectStore`].
//!
//! # Modules
//!
//! - [`store`] - Redis and in-memory redirect stores

pub mod store;
