//! Redirect status code carried by every successful resolution.

use axum::http::StatusCode;
use std::fmt;

/// Redirect statuses a resolver is allowed to answer with.
const ALLOWED: [u16; 5] = [301, 302, 303, 307, 308];

/// Configured redirect status is not a redirect.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Redirect status must be one of 301, 302, 303, 307 or 308, got {0}")]
pub struct InvalidRedirectStatus(pub u16);

/// HTTP status used for successful redirects.
///
/// Defaults to `302 Found`. A configured value of `0` is treated as unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectStatus(StatusCode);

impl RedirectStatus {
    /// `302 Found`.
    pub const DEFAULT: Self = Self(StatusCode::FOUND);

    /// Builds the status from a raw configured value.
    ///
    /// `None` and `Some(0)` fall back to [`RedirectStatus::DEFAULT`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRedirectStatus`] for anything outside the redirect set.
    pub fn from_config(raw: Option<u16>) -> Result<Self, InvalidRedirectStatus> {
        match raw {
            None | Some(0) => Ok(Self::DEFAULT),
            Some(code) if ALLOWED.contains(&code) => StatusCode::from_u16(code)
                .map(Self)
                .map_err(|_| InvalidRedirectStatus(code)),
            Some(code) => Err(InvalidRedirectStatus(code)),
        }
    }

    pub fn status_code(self) -> StatusCode {
        self.0
    }
}

impl Default for RedirectStatus {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for RedirectStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.as_u16())
    }
}
