//! The cookie jar contract an HTTP client talks to.

use crate::cookies::record::CookieRecord;
use std::sync::Arc;
use url::Url;

/// Trait for cookie jars.
///
/// This is the capability set an HTTP client depends on: store the cookies
/// of a response, and fetch the cookies for the next request. Both calls are
/// keyed by the host of the request URL. Implementations must be thread-safe.
///
/// # Design Notes
///
/// - Uses `&self` so a jar can be shared between requests without mutable
///   access; implementations synchronize internally.
/// - Records arrive already parsed; attribute semantics (domain/path
///   matching, expiry) stay with the client.
pub trait CookieJar: Send + Sync {
    /// Stores the cookies received in a response to `url`.
    ///
    /// A jar may decide not to write, e.g. when it already holds an
    /// equivalent collection.
    fn set_cookies(&self, url: &Url, cookies: Vec<CookieRecord>);

    /// Returns the cookies to attach to a request for `url`.
    fn cookies(&self, url: &Url) -> Vec<CookieRecord>;
}

/// Blanket implementation for Arc-wrapped jars.
impl<J: CookieJar + ?Sized> CookieJar for Arc<J> {
    fn set_cookies(&self, url: &Url, cookies: Vec<CookieRecord>) {
        (**self).set_cookies(url, cookies)
    }

    fn cookies(&self, url: &Url) -> Vec<CookieRecord> {
        (**self).cookies(url)
    }
}
