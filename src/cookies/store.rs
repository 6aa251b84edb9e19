use crate::cookies::config::{CookieStoreConfig, Equivalence};
use crate::cookies::error::AddCookiesReport;
use crate::cookies::hostkey::HostKey;
use crate::cookies::jar::CookieJar;
use crate::cookies::record::CookieRecord;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use url::Url;

/// In-memory cookie jar that files cookie collections by host.
///
/// Store: Map<Host, List<Cookie>>, behind a single mutex. Every operation
/// holds the lock for its whole body; reads and writes are serialized
/// against each other. Share it across threads with `Arc<CookieStore>`.
///
/// The store never looks at cookie attributes beyond `name`, `value` and
/// `domain`, and never expires or evicts anything. Reads hand out copies.
pub struct CookieStore {
    config: CookieStoreConfig,
    entries: Mutex<HashMap<HostKey, Vec<CookieRecord>>>,
}

impl Default for CookieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieStore {
    pub fn new() -> Self {
        Self::with_config(CookieStoreConfig::default())
    }

    pub fn with_config(config: CookieStoreConfig) -> Self {
        Self {
            config,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &CookieStoreConfig {
        &self.config
    }

    /// No operation leaves the map half-updated, so a poisoned lock still
    /// guards consistent data.
    fn entries(&self) -> MutexGuard<'_, HashMap<HostKey, Vec<CookieRecord>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the collection stored for `host`.
    ///
    /// If the host already has a collection that is equivalent to `cookies`
    /// under the configured [`Equivalence`], the write is skipped and the
    /// stored collection is kept as-is. With the default prefix policy this
    /// also skips collections that only differ in length.
    pub fn set_host_cookies(&self, host: &str, cookies: Vec<CookieRecord>) {
        let mut entries = self.entries();

        match entries.get_mut(host) {
            None => {
                tracing::trace!(host = %host, count = cookies.len(), "storing cookies for new host");
                entries.insert(HostKey::new(host), cookies);
            }
            Some(current) if self.equivalent(current.as_slice(), &cookies) => {
                tracing::trace!(host = %host, "cookies unchanged, skipping write");
            }
            Some(current) => {
                tracing::trace!(
                    host = %host,
                    old = current.len(),
                    new = cookies.len(),
                    "replacing cookies"
                );
                *current = cookies;
            }
        }
    }

    fn equivalent(&self, current: &[CookieRecord], incoming: &[CookieRecord]) -> bool {
        if self.config.equivalence == Equivalence::Strict && current.len() != incoming.len() {
            return false;
        }

        // zip stops at the shorter side
        current
            .iter()
            .zip(incoming)
            .all(|(a, b)| a.same_pair(b))
    }

    /// Returns the collection stored for `host`, or `None` if nothing was
    /// ever stored (or it was cleared).
    pub fn host_cookies(&self, host: &str) -> Option<Vec<CookieRecord>> {
        self.entries().get(host).cloned()
    }

    /// Bulk import. Each record is filed under the host derived from its
    /// `domain` attribute and appended after whatever that host already has.
    ///
    /// Records whose domain does not yield a host are left out and reported;
    /// the rest of the batch is still imported.
    pub fn add_cookies<I>(&self, cookies: I) -> AddCookiesReport
    where
        I: IntoIterator<Item = CookieRecord>,
    {
        let mut report = AddCookiesReport::default();
        let mut entries = self.entries();

        for cookie in cookies {
            match HostKey::from_domain(&cookie.domain) {
                Ok(key) => {
                    entries.entry(key).or_default().push(cookie);
                    report.added += 1;
                }
                Err(e) => {
                    tracing::debug!(
                        domain = %cookie.domain,
                        name = %cookie.name,
                        error = %e,
                        "skipping cookie with unusable domain"
                    );
                    report.skipped.push(e);
                }
            }
        }

        report
    }

    /// Every stored record, across all hosts. Host order is unspecified;
    /// within a host, records keep their stored order.
    pub fn all_cookies(&self) -> Vec<CookieRecord> {
        self.entries()
            .values()
            .flat_map(|cookies| cookies.iter().cloned())
            .collect()
    }

    /// Removes everything stored for `host`. Unknown hosts are a no-op.
    pub fn clear_host(&self, host: &str) {
        if self.entries().remove(host).is_some() {
            tracing::trace!(host = %host, "cleared cookies");
        }
    }

    /// Removes everything stored for the host of `url`.
    pub fn clear(&self, url: &Url) {
        if let Some(key) = HostKey::from_url(url) {
            self.clear_host(key.as_str());
        }
    }

    /// Clear all cookies.
    pub fn clear_all(&self) {
        self.entries().clear();
    }

    /// Get total cookie count.
    pub fn len(&self) -> usize {
        self.entries().values().map(Vec::len).sum()
    }

    /// `true` when no host holds a cookie.
    pub fn is_empty(&self) -> bool {
        self.entries().values().all(Vec::is_empty)
    }

    /// Number of hosts with an entry (an empty collection still counts).
    pub fn host_count(&self) -> usize {
        self.entries().len()
    }

    pub fn contains_host(&self, host: &str) -> bool {
        self.entries().contains_key(host)
    }

    /// Hosts with an entry, sorted.
    pub fn hosts(&self) -> Vec<String> {
        let mut hosts: Vec<String> = self
            .entries()
            .keys()
            .map(|k| k.as_str().to_string())
            .collect();
        hosts.sort_unstable();
        hosts
    }
}

impl CookieJar for CookieStore {
    fn set_cookies(&self, url: &Url, cookies: Vec<CookieRecord>) {
        match HostKey::from_url(url) {
            Some(key) => self.set_host_cookies(key.as_str(), cookies),
            None => tracing::debug!(url = %url, "ignoring cookies for URL without host"),
        }
    }

    fn cookies(&self, url: &Url) -> Vec<CookieRecord> {
        HostKey::from_url(url)
            .and_then(|key| self.host_cookies(key.as_str()))
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for CookieStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.entries();
        f.debug_struct("CookieStore")
            .field("config", &self.config)
            .field("hosts", &entries.len())
            .field("cookies", &entries.values().map(Vec::len).sum::<usize>())
            .finish()
    }
}
