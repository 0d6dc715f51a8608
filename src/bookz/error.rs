use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// Raw argument text failed a command's grammar, or a record field
    /// was out of domain.
    #[error("{0}")]
    Validation(String),

    /// The record source could not be read at all.
    #[error("Reading file content failed: {0}")]
    SourceRead(#[from] std::io::Error),

    /// A single source row did not decode into a record.
    #[error("Malformed book entry on line {line}: {reason}")]
    Decode { line: usize, reason: String },

    /// Decoding was requested before any source was loaded.
    #[error("No content loaded before parsing")]
    NoContentLoaded,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
