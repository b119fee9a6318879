//! Domain layer: the store capability and redirect semantics.
//!
//! Nothing in here knows about HTTP transports or Redis. The infrastructure
//! layer implements [`RedirectStore`]; the API layer consumes it through the
//! resolver service.

pub mod redirect_status;
pub mod store;

pub use redirect_status::{InvalidRedirectStatus, RedirectStatus};
pub use store::{RedirectStore, StoreError};
#[cfg(test)]
pub use store::MockRedirectStore;
