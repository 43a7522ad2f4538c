//! Header documentation lookup.
//!
//! The presenter never reaches for a global docs table; it asks a [`HeaderDocs`]
//! implementation instead. [`DocsCatalogue`] is the stock implementation, with a
//! built-in table of well-known headers that can be extended from JSON.

use serde::{Deserialize, Serialize};

mod catalogue;
pub use catalogue::DocsCatalogue;

mod error;
pub use error::DocsError;

/// Short documentation for one header name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderDoc {
    summary: String,
    url: String,
}

impl HeaderDoc {
    pub fn new(summary: impl Into<String>, url: impl Into<String>) -> Self {
        Self { summary: summary.into(), url: url.into() }
    }

    /// One or two sentences describing what the header does.
    #[inline]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Reference page for the header.
    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Source of header documentation, keyed by lower-cased header name.
#[cfg_attr(test, mockall::automock)]
pub trait HeaderDocs {
    /// Looks up the documentation for `name`.
    ///
    /// Callers pass the lower-cased name; returns `None` for unknown headers.
    fn lookup(&self, name: &str) -> Option<HeaderDoc>;
}

impl<T: HeaderDocs + ?Sized> HeaderDocs for &T {
    #[inline]
    fn lookup(&self, name: &str) -> Option<HeaderDoc> {
        (**self).lookup(name)
    }
}

impl<T: HeaderDocs + ?Sized> HeaderDocs for Box<T> {
    #[inline]
    fn lookup(&self, name: &str) -> Option<HeaderDoc> {
        (**self).lookup(name)
    }
}
