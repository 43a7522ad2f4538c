use std::io;

use micro_inspect::docs::DocsError;
use micro_inspect::present::PresenterBuildError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("exchange error: {source}")]
    ExchangeError {
        #[from]
        source: ExchangeError,
    },

    #[error("docs error: {source}")]
    DocsError {
        #[from]
        source: DocsError,
    },

    #[error("presenter error: {source}")]
    PresenterError {
        #[from]
        source: PresenterBuildError,
    },
}

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("failed to read exchange: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    #[error("invalid exchange json: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("invalid http version: {0}")]
    InvalidVersion(u8),

    #[error("invalid request url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: http::uri::InvalidUri,
    },
}

impl ExchangeError {
    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}
