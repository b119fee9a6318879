//! Business logic services for the application layer.

pub mod resolver;

pub use resolver::{RedirectResolver, ResolveError};
