use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresenterBuildError {
    #[error("truncated length {truncated_length} exceed the long value limit {long_value_limit}")]
    InvalidTruncation { long_value_limit: usize, truncated_length: usize },
}
