use http::HeaderValue;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One HTTP cookie as handed to the store by an HTTP client.
///
/// Only `name`, `value` and `domain` are ever looked at by the store; the
/// remaining attributes are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieRecord {
    pub name: String,
    pub value: String,
    /// Domain attribute as received. [`CookieStore::add_cookies`] derives the
    /// host key from it.
    ///
    /// [`CookieStore::add_cookies`]: crate::cookies::CookieStore::add_cookies
    pub domain: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub expires: Option<OffsetDateTime>,
    /// Max-Age in seconds.
    #[serde(default)]
    pub max_age: Option<i64>,
    #[serde(default)]
    pub secure: bool,
    #[serde(default)]
    pub http_only: bool,
    #[serde(default)]
    pub same_site: SameSite,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SameSite {
    #[default]
    Unspecified,
    NoRestriction,
    Lax,
    Strict,
}

impl CookieRecord {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: domain.into(),
            path: None,
            expires: None,
            max_age: None,
            secure: false,
            http_only: false,
            same_site: SameSite::Unspecified,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_expires(mut self, expires: OffsetDateTime) -> Self {
        self.expires = Some(expires);
        self
    }

    pub fn with_max_age(mut self, seconds: i64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    pub fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }

    /// Whether `other` carries the same `(name, value)` pair.
    pub fn same_pair(&self, other: &CookieRecord) -> bool {
        self.name == other.name && self.value == other.value
    }

    /// Converts back into a [`cookie::Cookie`], e.g. for re-emitting a
    /// `Set-Cookie` line. An empty domain is left unset.
    pub fn to_cookie(&self) -> cookie::Cookie<'static> {
        let mut builder = cookie::Cookie::build((self.name.clone(), self.value.clone()))
            .secure(self.secure)
            .http_only(self.http_only);

        if !self.domain.is_empty() {
            builder = builder.domain(self.domain.clone());
        }
        if let Some(path) = &self.path {
            builder = builder.path(path.clone());
        }
        if let Some(expires) = self.expires {
            builder = builder.expires(expires);
        }
        if let Some(seconds) = self.max_age {
            builder = builder.max_age(time::Duration::seconds(seconds));
        }
        builder = match self.same_site {
            SameSite::Lax => builder.same_site(cookie::SameSite::Lax),
            SameSite::Strict => builder.same_site(cookie::SameSite::Strict),
            SameSite::NoRestriction => builder.same_site(cookie::SameSite::None),
            SameSite::Unspecified => builder,
        };

        builder.build()
    }
}

impl From<&cookie::Cookie<'_>> for CookieRecord {
    fn from(parsed: &cookie::Cookie<'_>) -> Self {
        let same_site = match parsed.same_site() {
            Some(cookie::SameSite::Lax) => SameSite::Lax,
            Some(cookie::SameSite::Strict) => SameSite::Strict,
            Some(cookie::SameSite::None) => SameSite::NoRestriction,
            None => SameSite::Unspecified,
        };

        Self {
            name: parsed.name().to_string(),
            value: parsed.value().to_string(),
            domain: parsed.domain().unwrap_or_default().to_string(),
            path: parsed.path().map(str::to_string),
            expires: parsed.expires_datetime(),
            max_age: parsed.max_age().map(|d| d.whole_seconds()),
            secure: parsed.secure().unwrap_or(false),
            http_only: parsed.http_only().unwrap_or(false),
            same_site,
        }
    }
}

impl From<cookie::Cookie<'_>> for CookieRecord {
    fn from(parsed: cookie::Cookie<'_>) -> Self {
        Self::from(&parsed)
    }
}

/// Renders records as a `Cookie` request header (`a=1; b=2`).
///
/// Returns `None` for an empty slice, or when a name/value contains bytes
/// that are not allowed in a header.
pub fn request_header(cookies: &[CookieRecord]) -> Option<HeaderValue> {
    if cookies.is_empty() {
        return None;
    }

    let line = cookies
        .iter()
        .map(|c| format!("{}={}", c.name, c.value))
        .collect::<Vec<_>>()
        .join("; ");

    HeaderValue::from_str(&line).ok()
}
