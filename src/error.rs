use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SourceError>;
