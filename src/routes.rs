//! Top-level router configuration.
//!
//! # Route Structure
//!
//! There are no named routes: every method and every path goes to
//! [`redirect_handler`] through the fallback, so any path can be a mapping
//! key. Paths are not normalized.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;

/// Constructs the application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .fallback(redirect_handler)
        .with_state(state)
        .layer(tracing::layer())
}
