//! HTTP layer: request handling and response rendering.
//!
//! # Modules
//!
//! - [`error_page`] - HTML error documents
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing

pub mod error_page;
pub mod handlers;
pub mod middleware;
