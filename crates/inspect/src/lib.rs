//! Header classification and presentation for an HTTP traffic inspector
//!
//! This crate turns the raw headers of a captured request or response into the
//! header list an inspector shows: sorted, with HTTP/2 pseudo-headers split out,
//! long values truncated, and each header described where possible.
//!
//! # Features
//!
//! - Case-insensitive, stable ordering of captured headers
//! - HTTP/2 and HTTP/3 pseudo-header partitioning
//! - Truncation of long values, with caller-owned expansion state
//! - Docs summaries and reference links from a pluggable docs source
//! - Rich `Set-Cookie` and `User-Agent` descriptions for paid accounts
//!
//! # Example
//!
//! ```
//! use http::Version;
//! use micro_inspect::classify::classify;
//! use micro_inspect::protocol::RawHeader;
//!
//! let headers = vec![RawHeader::new("Content-Type", "text/html"), RawHeader::new(":status", "200")];
//! let classified = classify(&headers, Version::HTTP_2);
//!
//! assert_eq!(classified.pseudo_headers(), &[RawHeader::new(":status", "200")]);
//! assert_eq!(classified.normal_headers(), &[RawHeader::new("Content-Type", "text/html")]);
//! ```
//!
//! # Architecture
//!
//! - [`protocol`]: raw header type and HTTP version helpers
//! - [`classify`]: ordering and pseudo-header partitioning
//! - [`present`]: truncation, description selection and the resulting view
//! - [`describe`]: `Set-Cookie` and `User-Agent` descriptions
//! - [`docs`]: the [`docs::HeaderDocs`] seam and the built-in catalogue
//! - [`entitlement`]: the [`entitlement::Entitlement`] seam
//!
//! # Error Handling
//!
//! Classification and presentation can't fail: missing docs or a free account
//! only mean less output. Errors exist only at the edges:
//!
//! - [`docs::DocsError`]: loading a docs catalogue
//! - [`present::PresenterBuildError`]: invalid presenter configuration
//!
//! # Logging
//!
//! Decisions are logged with `tracing` at `debug` and `trace` level; installing a
//! subscriber is left to the application.

pub mod classify;
pub mod describe;
pub mod docs;
pub mod entitlement;
pub mod present;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
