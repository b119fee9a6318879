//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::RedirectResolver;
use crate::domain::{RedirectStatus, RedirectStore};

/// Per-process state shared by every request.
///
/// Immutable after startup; cloning is cheap (one `Arc` and a status code).
#[derive(Clone)]
pub struct AppState {
    pub resolver: RedirectResolver,
    pub redirect_status: RedirectStatus,
}

impl AppState {
    pub fn new(store: Arc<dyn RedirectStore>, redirect_status: RedirectStatus) -> Self {
        Self {
            resolver: RedirectResolver::new(store),
            redirect_status,
        }
    }
}
