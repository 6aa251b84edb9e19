//! Host keys partition the store.
//!
//! A key is the host component of a URL: no scheme, no port. Keys taken
//! from a `Url` come out of the URL parser already lowercased; keys passed as
//! plain strings are used verbatim.

use crate::cookies::error::CookieError;
use std::borrow::Borrow;
use std::fmt;
use url::{ParseError, Url};

/// The host a cookie collection is filed under.
#[derive(Clone, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct HostKey {
    host: Box<str>,
}

impl HostKey {
    /// Wraps a host string as-is. No validation is done.
    #[inline]
    pub fn new(host: impl Into<Box<str>>) -> Self {
        Self { host: host.into() }
    }

    /// Key for a request URL, or `None` for URLs that have no host
    /// (`data:`, `mailto:` and friends).
    pub fn from_url(url: &Url) -> Option<Self> {
        url.host_str().map(HostKey::new)
    }

    /// Derives a key from a cookie's `domain` attribute.
    ///
    /// The attribute is parsed as a URL. A bare domain like `example.com`
    /// has no scheme, so it is retried as `http://example.com`.
    pub fn from_domain(domain: &str) -> Result<Self, CookieError> {
        let url = match Url::parse(domain) {
            Ok(url) => url,
            Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("http://{domain}"))
                .map_err(|source| CookieError::InvalidDomain {
                    domain: domain.to_string(),
                    source,
                })?,
            Err(source) => {
                return Err(CookieError::InvalidDomain {
                    domain: domain.to_string(),
                    source,
                })
            }
        };

        Self::from_url(&url).ok_or_else(|| CookieError::MissingHost {
            domain: domain.to_string(),
        })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.host
    }
}

// Lets the store look entries up by `&str`.
impl Borrow<str> for HostKey {
    fn borrow(&self) -> &str {
        &self.host
    }
}

impl From<&str> for HostKey {
    fn from(value: &str) -> Self {
        HostKey::new(value)
    }
}

impl From<String> for HostKey {
    fn from(value: String) -> Self {
        HostKey::new(value)
    }
}

impl fmt::Debug for HostKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.host, f)
    }
}

impl fmt::Display for HostKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.host, f)
    }
}
