use thiserror::Error;

pub type Result<T> = std::result::Result<T, FixtureError>;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Record {record} has {found} fields but the header declares {expected} properties")]
    SchemaMismatch {
        expected: usize,
        found: usize,
        record: usize,
    },

    #[error("File IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to move finished file into place: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Failed to encode manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
