//! Host-keyed cookie storage.
//!
//! This module provides the cookie jar an HTTP client plugs in to carry
//! cookies from one request to the next:
//!
//! - **Storage**: In-memory store keyed by host ([`CookieStore`])
//! - **Contract**: The client-facing [`CookieJar`] trait
//! - **Records**: Already-parsed cookies ([`CookieRecord`]), convertible
//!   to and from the `cookie` crate
//! - **Import/Export**: Bulk [`CookieStore::add_cookies`] and
//!   [`CookieStore::all_cookies`]
//!
//! # Architecture
//!
//! | Type | Responsibility |
//! |------|----------------|
//! | [`CookieJar`] | `set_cookies` / `cookies` by request URL |
//! | [`CookieStore`] | Mutex-guarded `host -> Vec<CookieRecord>` map |
//! | [`HostKey`] | Host component of a URL, used as the map key |
//! | [`CookieStoreConfig`] | When a write counts as unchanged |
//!
//! Parsing `Set-Cookie` lines, domain/path matching and expiry are left to
//! the client. The store files and returns whatever it is given.
//!
//! # Example
//!
//! ```rust
//! use hostjar::cookies::{CookieJar, CookieRecord, CookieStore};
//! use url::Url;
//!
//! let jar = CookieStore::new();
//! let url = Url::parse("https://example.com/login").unwrap();
//!
//! jar.set_cookies(&url, vec![CookieRecord::new("sid", "42", "example.com")]);
//! assert_eq!(jar.cookies(&url)[0].value, "42");
//! ```
//!
//! # Bulk import
//!
//! ```rust
//! use hostjar::cookies::{CookieRecord, CookieStore};
//!
//! let jar = CookieStore::new();
//! let report = jar.add_cookies(vec![
//!     CookieRecord::new("a", "1", "https://x.com"),
//!     CookieRecord::new("b", "2", "http://[broken"),
//! ]);
//!
//! assert_eq!(report.added, 1);
//! assert_eq!(report.skipped.len(), 1);
//! assert_eq!(jar.host_cookies("x.com").unwrap().len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod hostkey;
pub mod jar;
pub mod record;
pub mod store;

pub use config::{CookieStoreConfig, Equivalence};
pub use error::{AddCookiesReport, CookieError};
pub use hostkey::HostKey;
pub use jar::CookieJar;
pub use record::{request_header, CookieRecord, SameSite};
pub use store::CookieStore;
