//! Cookie store error types.
//!
//! The store itself never fails an operation. These errors describe single
//! records that [`CookieStore::add_cookies`] had to leave out; they are
//! collected into an [`AddCookiesReport`] instead of aborting the call.
//!
//! [`CookieStore::add_cookies`]: crate::cookies::CookieStore::add_cookies

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CookieError {
    #[error("Cookie domain {domain:?} is not a valid URL: {source}")]
    InvalidDomain {
        domain: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Cookie domain {domain:?} has no host component")]
    MissingHost { domain: String },
}

impl CookieError {
    /// The domain attribute that could not be turned into a host key.
    pub fn domain(&self) -> &str {
        match self {
            CookieError::InvalidDomain { domain, .. } | CookieError::MissingHost { domain } => {
                domain
            }
        }
    }
}

/// Outcome of a bulk import.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddCookiesReport {
    /// Records appended to the store.
    pub added: usize,
    /// Records left out, in input order.
    pub skipped: Vec<CookieError>,
}

impl AddCookiesReport {
    /// `true` when every record made it into the store.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}
