use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtlogError {
    /// The remote lookup did not know the identifier, or the export file
    /// was missing at share time.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The store file exists but is not a valid JSON array of records.
    #[error("Corrupt store: {0}")]
    CorruptStore(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Api error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ProtlogError>;
