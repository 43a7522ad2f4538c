//! Raw header representation.
//!
//! Headers arrive exactly as they were captured: names keep their original case,
//! duplicates are allowed, and the capture order carries no meaning. Serialized
//! form is a two element array `["name", "value"]`, which is how captured
//! exchanges store them.

use serde::{Deserialize, Serialize};

/// A single captured header as a `(name, value)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct RawHeader {
    name: String,
    value: String,
}

/// An ordered list of captured headers, in capture order.
pub type RawHeaders = Vec<RawHeader>;

impl RawHeader {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }

    /// Returns the header name with its captured casing.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the lower-cased header name, the key used for ordering and docs lookup.
    pub fn lower_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Returns true if the name carries the `:` prefix reserved for HTTP/2 pseudo-headers.
    ///
    /// This only looks at the name; whether the header is treated as a pseudo-header
    /// also depends on the HTTP version, see [`crate::classify`].
    #[inline]
    pub fn has_pseudo_prefix(&self) -> bool {
        self.name.starts_with(':')
    }

    pub fn into_parts(self) -> (String, String) {
        (self.name, self.value)
    }
}

impl From<(String, String)> for RawHeader {
    #[inline]
    fn from((name, value): (String, String)) -> Self {
        Self { name, value }
    }
}

impl<'a> From<(&'a str, &'a str)> for RawHeader {
    #[inline]
    fn from((name, value): (&'a str, &'a str)) -> Self {
        Self::new(name, value)
    }
}

impl From<RawHeader> for (String, String) {
    #[inline]
    fn from(header: RawHeader) -> Self {
        header.into_parts()
    }
}
