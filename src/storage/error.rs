use std::{io, path::PathBuf};

use thiserror::Error;

/// Returned when raw user input cannot become a [Student](super::Student)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name cannot be empty, please provide a valid name")]
    EmptyName,
    #[error("roll number must be greater than 0, got {0}")]
    NonPositiveRoll(i64),
    #[error("roll number must be a whole number, got `{0}`")]
    InvalidRoll(String),
}

/// Possible failures of [RecordStore](super::RecordStore) operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file (or its temporary rewrite target) could not be opened
    #[error("unable to open `{}`; {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("io error; {0}")]
    Io(#[from] io::Error),
}
