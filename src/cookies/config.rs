//! Store configuration.

use serde::{Deserialize, Serialize};

/// How [`CookieStore::set_host_cookies`] decides that an incoming collection
/// is the same as the stored one, in which case the write is skipped.
///
/// [`CookieStore::set_host_cookies`]: crate::cookies::CookieStore::set_host_cookies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Equivalence {
    /// `(name, value)` pairs are compared position by position, only up to
    /// the shorter collection's length. Lengths are not compared, so
    /// `[a=1]` and `[a=1, b=2]` count as the same collection.
    #[default]
    Prefix,
    /// Same length and the same `(name, value)` pair at every position.
    Strict,
}

/// Configuration for a [`CookieStore`](crate::cookies::CookieStore).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieStoreConfig {
    /// Equivalence policy for replacing a host's collection (default: prefix).
    pub equivalence: Equivalence,
}

impl CookieStoreConfig {
    /// Create a config that only skips writes of identical collections.
    pub fn strict() -> Self {
        Self {
            equivalence: Equivalence::Strict,
        }
    }
}
