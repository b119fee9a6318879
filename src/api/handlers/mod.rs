//! HTTP request handlers.

pub mod redirect;

pub use redirect::redirect_handler;
