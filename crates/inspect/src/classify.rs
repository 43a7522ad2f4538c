//! Header classification: ordering and pseudo-header partitioning.
//!
//! Captured headers carry no meaningful order, so the view sorts them by name,
//! ignoring case. On HTTP/2 and later the `:`-prefixed pseudo-headers are split
//! out into their own list, unless doing so would leave no normal headers at all,
//! in which case everything stays in the normal list.

use http::Version;
use tracing::debug;

use crate::protocol::{has_pseudo_headers, RawHeader};

/// Sorted and partitioned headers of a single message.
///
/// `normal_headers` is never empty unless the classified input was empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedHeaders {
    pseudo_headers: Vec<RawHeader>,
    normal_headers: Vec<RawHeader>,
}

impl ClassifiedHeaders {
    /// Pseudo-headers sorted by lower-cased name, possibly empty.
    #[inline]
    pub fn pseudo_headers(&self) -> &[RawHeader] {
        &self.pseudo_headers
    }

    /// Normal headers sorted by lower-cased name.
    #[inline]
    pub fn normal_headers(&self) -> &[RawHeader] {
        &self.normal_headers
    }

    /// Returns true if there were no headers at all, callers show a placeholder in that case.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.normal_headers.is_empty() && self.pseudo_headers.is_empty()
    }

    pub fn into_parts(self) -> (Vec<RawHeader>, Vec<RawHeader>) {
        (self.pseudo_headers, self.normal_headers)
    }
}

/// Sorts and partitions `headers` for display.
///
/// Sorting is stable and keyed by the lower-cased name, so duplicate names keep
/// their capture order. A header is a pseudo-header when `version` is HTTP/2 or
/// later and its name starts with `:`.
pub fn classify(headers: &[RawHeader], version: Version) -> ClassifiedHeaders {
    let mut sorted = headers.to_vec();
    // sort_by_cached_key is stable
    sorted.sort_by_cached_key(RawHeader::lower_name);

    let split_pseudo = has_pseudo_headers(version);
    let (pseudo_headers, normal_headers): (Vec<_>, Vec<_>) =
        sorted.into_iter().partition(|header| split_pseudo && header.has_pseudo_prefix());

    if normal_headers.is_empty() {
        debug!(count = pseudo_headers.len(), "no normal headers, promoting pseudo-headers");
        return ClassifiedHeaders { pseudo_headers: Vec::new(), normal_headers: pseudo_headers };
    }

    debug!(pseudo = pseudo_headers.len(), normal = normal_headers.len(), "classified headers");
    ClassifiedHeaders { pseudo_headers, normal_headers }
}
