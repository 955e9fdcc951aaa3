// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TallyError {
    #[error("unsupported grouping field '{0}' (expected 'code' or 'operator_name')")]
    UnsupportedField(String),

    #[error("category '{0}' is not present")]
    MissingCategory(String),

    #[error("no record has {field} = {value}")]
    ValueNotFound { field: String, value: String },

    #[error("table '{0}' has no rows to render")]
    EmptyDataset(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, TallyError>;

// Allow `?` on std::io::Error by converting to TallyError::Io with unknown path.
impl From<std::io::Error> for TallyError {
    fn from(source: std::io::Error) -> Self {
        TallyError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<toml::de::Error> for TallyError {
    fn from(e: toml::de::Error) -> Self {
        TallyError::Config(e.to_string())
    }
}
