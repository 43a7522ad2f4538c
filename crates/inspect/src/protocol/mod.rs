//! Core header types shared by the classifier and the presenter.
//!
//! - [`RawHeader`]: a captured `(name, value)` pair
//! - [`RawHeaders`]: headers in capture order
//! - [`major_version`] / [`version_from_major`]: conversions between `http::Version`
//!   and the version number captured exchanges carry

mod header;
pub use header::RawHeader;
pub use header::RawHeaders;

mod version;
pub use version::has_pseudo_headers;
pub use version::major_version;
pub use version::version_from_major;
