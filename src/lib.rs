//! # hostjar
//!
//! An in-memory cookie jar for Rust HTTP clients.
//!
//! `hostjar` keeps the cookies a client has received, filed under the host
//! that sent them, and hands them back when the client talks to that host
//! again. It does not parse headers or apply cookie attribute rules; it is
//! the storage a client layer plugs in behind the [`cookies::CookieJar`]
//! trait.
//!
//! ## Features
//!
//! - **Host-keyed storage**: one cookie collection per host
//! - **Thread-safe**: a single lock per store, shareable through `Arc`
//! - **Pluggable**: clients depend on the [`cookies::CookieJar`] trait
//! - **Bulk import/export**: merge records by domain, dump everything
//!
//! ## Quick Start
//!
//! ```rust
//! use hostjar::cookies::{CookieJar, CookieRecord, CookieStore};
//! use std::sync::Arc;
//! use url::Url;
//!
//! let jar: Arc<dyn CookieJar> = Arc::new(CookieStore::new());
//! let url = Url::parse("https://example.com/").unwrap();
//!
//! // After a response:
//! jar.set_cookies(&url, vec![CookieRecord::new("sid", "abc", "example.com")]);
//!
//! // Before the next request:
//! let cookies = jar.cookies(&url);
//! assert_eq!(cookies.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`cookies`] - Cookie records, the jar trait and the host-keyed store

pub mod cookies;
