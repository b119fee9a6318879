//! Application layer services.
//!
//! Services consume the domain store trait and give HTTP handlers a single
//! call per request.
//!
//! # Available Services
//!
//! - [`services::resolver::RedirectResolver`] - Path lookup and target validation

pub mod services;
