//! Captured exchanges as stored on disk.
//!
//! An exchange file holds the headers of one message together with the HTTP
//! version it was captured on and the URL of the request:
//!
//! ```json
//! { "httpVersion": 2, "url": "https://example.com/", "headers": [[":status", "200"], ["content-type", "text/html"]] }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use http::{Uri, Version};
use micro_inspect::protocol::{version_from_major, RawHeader, RawHeaders};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ExchangeError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange {
    http_version: u8,
    url: String,
    #[serde(default)]
    headers: RawHeaders,
}

impl Exchange {
    pub fn new(http_version: u8, url: impl Into<String>, headers: RawHeaders) -> Self {
        Self { http_version, url: url.into(), headers }
    }

    /// # Errors
    ///
    /// Returns [`ExchangeError::Json`] if `json` is not a valid exchange.
    pub fn from_json_str(json: &str) -> Result<Self, ExchangeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Returns [`ExchangeError`] if reading fails or the input is not a valid exchange.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ExchangeError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// # Errors
    ///
    /// Returns [`ExchangeError`] if the file can't be opened or is not a valid exchange.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ExchangeError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(ExchangeError::io)?;
        let exchange = Self::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), headers = exchange.headers.len(), "loaded exchange");
        Ok(exchange)
    }

    pub fn headers(&self) -> &[RawHeader] {
        &self.headers
    }

    /// The captured major version, as stored.
    pub fn http_version(&self) -> u8 {
        self.http_version
    }

    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidVersion`] unless the stored version is 1, 2 or 3.
    pub fn version(&self) -> Result<Version, ExchangeError> {
        version_from_major(self.http_version).ok_or(ExchangeError::InvalidVersion(self.http_version))
    }

    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidUrl`] if the stored URL doesn't parse.
    pub fn request_url(&self) -> Result<Uri, ExchangeError> {
        self.url.parse::<Uri>().map_err(|source| ExchangeError::InvalidUrl { url: self.url.clone(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_from_json_str() {
        let json = indoc! {r#"
        {
            "httpVersion": 2,
            "url": "https://example.com/index.html",
            "headers": [
                [":status", "200"],
                ["Content-Type", "text/html"]
            ]
        }"#};

        let exchange = Exchange::from_json_str(json).unwrap();

        assert_eq!(exchange.http_version(), 2);
        assert_eq!(exchange.version().unwrap(), Version::HTTP_2);
        assert_eq!(exchange.request_url().unwrap().host(), Some("example.com"));
        assert_eq!(exchange.headers(), &[RawHeader::new(":status", "200"), RawHeader::new("Content-Type", "text/html")]);
    }

    #[test]
    fn test_missing_headers_default_to_empty() {
        let exchange = Exchange::from_json_str(r#"{ "httpVersion": 1, "url": "http://example.com/" }"#).unwrap();
        assert!(exchange.headers().is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let result = Exchange::from_json_str(r#"{ "httpVersion": "two" }"#);
        assert!(matches!(result, Err(ExchangeError::Json { .. })));
    }

    #[test]
    fn test_invalid_version() {
        let exchange = Exchange::new(7, "https://example.com/", Vec::new());
        assert!(matches!(exchange.version(), Err(ExchangeError::InvalidVersion(7))));
    }

    #[test]
    fn test_invalid_url() {
        let exchange = Exchange::new(1, "http://exa mple.com/", Vec::new());
        assert!(matches!(exchange.request_url(), Err(ExchangeError::InvalidUrl { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = Exchange::from_path("/definitely/not/here/exchange.json");
        assert!(matches!(result, Err(ExchangeError::Io { .. })));
    }

    #[test]
    fn test_serialize_json() {
        let exchange = Exchange::new(1, "http://example.com/", vec![RawHeader::new("Host", "example.com")]);
        let json = serde_json::to_string(&exchange).unwrap();

        assert_eq!(json, r#"{"httpVersion":1,"url":"http://example.com/","headers":[["Host","example.com"]]}"#);
    }
}
