//! Mapping between `http::Version` and the major version number shown to users.

use http::Version;

/// Returns the major protocol version: 1 for HTTP/0.9 to HTTP/1.1, 2 for HTTP/2 and 3 for HTTP/3.
pub fn major_version(version: Version) -> u8 {
    match version {
        Version::HTTP_2 => 2,
        Version::HTTP_3 => 3,
        _ => 1,
    }
}

/// Maps a captured major version number back to an `http::Version`.
///
/// Returns `None` for numbers that don't name an HTTP version.
pub fn version_from_major(major: u8) -> Option<Version> {
    match major {
        1 => Some(Version::HTTP_11),
        2 => Some(Version::HTTP_2),
        3 => Some(Version::HTTP_3),
        _ => None,
    }
}

/// Returns true if this version carries pseudo-headers (`:status`, `:path`, ...).
#[inline]
pub fn has_pseudo_headers(version: Version) -> bool {
    major_version(version) >= 2
}
