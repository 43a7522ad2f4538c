use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::debug;

use super::{DocsError, HeaderDoc, HeaderDocs};

const MDN_HEADERS_URL: &str = "https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/";

/// Canonical header name and summary for each built-in entry.
///
/// The reference URL is derived from the canonical name.
const BUILTIN_DOCS: &[(&str, &str)] = &[
    ("Accept", "Advertises which content types, expressed as MIME types, the client is able to understand."),
    ("Accept-Encoding", "Advertises which content encodings, usually compression algorithms, the client is able to understand."),
    ("Accept-Language", "Advertises which languages the client is able to understand, and which locale variant is preferred."),
    ("Access-Control-Allow-Credentials", "Tells browsers whether to expose the response to frontend JavaScript code when the request's credentials mode is 'include'."),
    ("Access-Control-Allow-Headers", "Used in response to a preflight request to indicate which HTTP headers can be used during the actual request."),
    ("Access-Control-Allow-Methods", "Specifies the methods allowed when accessing the resource in response to a preflight request."),
    ("Access-Control-Allow-Origin", "Indicates whether the response can be shared with requesting code from the given origin."),
    ("Age", "Contains the time in seconds the object has been in a proxy cache."),
    ("Authorization", "Contains the credentials to authenticate a user agent with a server."),
    ("Cache-Control", "Holds directives that control caching in browsers and shared caches, such as proxies and CDNs."),
    ("Connection", "Controls whether the network connection stays open after the current transaction finishes."),
    ("Content-Encoding", "Lists any encodings that have been applied to the representation, and in what order."),
    ("Content-Language", "Describes the language or languages intended for the audience."),
    ("Content-Length", "Indicates the size of the message body, in bytes, sent to the recipient."),
    ("Content-Security-Policy", "Allows web site administrators to control resources the user agent is allowed to load for a given page."),
    ("Content-Type", "Indicates the original media type of the resource, prior to any content encoding applied for sending."),
    ("Cookie", "Contains stored HTTP cookies previously sent by the server with the Set-Cookie header."),
    ("Date", "Contains the date and time at which the message originated."),
    ("ETag", "An identifier for a specific version of a resource, used to make caches more efficient and save bandwidth."),
    ("Expires", "Contains the date and time after which the response is considered expired."),
    ("Host", "Specifies the host and port number of the server to which the request is being sent."),
    ("If-Modified-Since", "Makes the request conditional: the server sends back the resource only if it has been modified after the given date."),
    ("If-None-Match", "Makes the request conditional: the server sends back the resource only if no stored ETag matches the given ones."),
    ("Last-Modified", "Contains a date and time when the origin server believes the resource was last modified."),
    ("Location", "Indicates the URL to redirect a page to."),
    ("Origin", "Indicates the origin (scheme, hostname, and port) that caused the request."),
    ("Pragma", "An implementation-specific header that may have various effects along the request-response chain, used for backwards compatibility with HTTP/1.0 caches."),
    ("Referer", "Contains the absolute or partial address from which a resource has been requested."),
    ("Server", "Describes the software used by the origin server that handled the request."),
    ("Set-Cookie", "Sends a cookie from the server to the user agent, so that the user agent can send it back to the server later."),
    ("Strict-Transport-Security", "Informs browsers that the site should only be accessed using HTTPS, and that any future attempts to access it using HTTP should automatically be upgraded."),
    ("Transfer-Encoding", "Specifies the form of encoding used to safely transfer the payload body to the user."),
    ("Upgrade", "Can be used to upgrade an already established client/server connection to a different protocol."),
    ("User-Agent", "A characteristic string that lets servers and network peers identify the application, operating system, vendor, and version of the requesting user agent."),
    ("Vary", "Describes the parts of the request message, aside from the method and URL, that influenced the content of the response."),
    ("Via", "Added by proxies, both forward and reverse, and can appear in the request or response headers."),
    ("WWW-Authenticate", "Defines the HTTP authentication methods that might be used to gain access to a specific resource."),
    ("X-Content-Type-Options", "A marker used by the server to indicate that the MIME types advertised in the Content-Type headers should be followed and not changed."),
    ("X-Frame-Options", "Indicates whether a browser should be allowed to render a page in a frame, iframe, embed or object."),
];

static BUILTIN: Lazy<DocsCatalogue> = Lazy::new(|| {
    BUILTIN_DOCS
        .iter()
        .map(|(name, summary)| (*name, HeaderDoc::new(*summary, format!("{MDN_HEADERS_URL}{name}"))))
        .collect()
});

/// A table of header documentation keyed by lower-cased header name.
#[derive(Debug, Clone, Default)]
pub struct DocsCatalogue {
    entries: HashMap<String, HeaderDoc>,
}

impl DocsCatalogue {
    /// Creates an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared catalogue of well-known headers.
    pub fn builtin() -> &'static DocsCatalogue {
        &BUILTIN
    }

    /// Parses a catalogue from a JSON object mapping header names to
    /// `{ "summary": ..., "url": ... }`. Names are lower-cased on load.
    ///
    /// Names that differ only in case collapse into one entry. The name that sorts
    /// last by byte order wins, so `"accept"` overrides `"Accept"`.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::Json`] if the input is not such an object.
    pub fn from_json_str(json: &str) -> Result<Self, DocsError> {
        let entries: BTreeMap<String, HeaderDoc> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    /// Same as [`DocsCatalogue::from_json_str`], reading from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError`] if reading fails or the input is malformed.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, DocsError> {
        let entries: BTreeMap<String, HeaderDoc> =
            serde_json::from_reader(reader).map_err(|e| if e.is_io() { DocsError::io(e) } else { DocsError::from(e) })?;
        Ok(Self::from_entries(entries))
    }

    /// Loads a catalogue from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError`] if the file can't be opened or is malformed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DocsError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(DocsError::io)?;
        let catalogue = Self::from_json_reader(BufReader::new(file))?;
        debug!(path = %path.display(), entries = catalogue.len(), "loaded header docs");
        Ok(catalogue)
    }

    fn from_entries(entries: BTreeMap<String, HeaderDoc>) -> Self {
        entries.into_iter().collect()
    }

    /// Adds or replaces the docs for `name`.
    pub fn insert(&mut self, name: &str, doc: HeaderDoc) -> Option<HeaderDoc> {
        self.entries.insert(name.to_lowercase(), doc)
    }

    /// Overlays `other` on top of this catalogue; entries of `other` win.
    #[must_use]
    pub fn merge(mut self, other: DocsCatalogue) -> Self {
        self.entries.extend(other.entries);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HeaderDocs for DocsCatalogue {
    fn lookup(&self, name: &str) -> Option<HeaderDoc> {
        self.entries.get(name).cloned()
    }
}

/// Names are lower-cased; on a collision the later entry wins.
impl<N: AsRef<str>> FromIterator<(N, HeaderDoc)> for DocsCatalogue {
    fn from_iter<I: IntoIterator<Item = (N, HeaderDoc)>>(iter: I) -> Self {
        let entries = iter.into_iter().map(|(name, doc)| (name.as_ref().to_lowercase(), doc)).collect();
        Self { entries }
    }
}
