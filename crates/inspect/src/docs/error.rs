use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocsError {
    #[error("failed to read header docs: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    #[error("invalid header docs json: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl DocsError {
    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}
