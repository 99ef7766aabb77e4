//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation failures live in [`crate::domain::ValidationError`] and are
//! wrapped here where an operation can fail for other reasons too.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when changing a record's phones or birthday.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The new value failed field validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No phone on the record equals the given value
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),
}

/// Errors that can occur when operating on the whole address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Pagination needs at least one record per batch
    #[error("Batch size must be at least 1, got {0}")]
    InvalidBatchSize(usize),
}

/// Errors that can occur when saving or loading the address book file.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Reading or writing the file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a valid address book document
    #[error("Corrupt address book file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file was written by an incompatible format version
    #[error("Unsupported address book format version {version} in {path}")]
    UnsupportedVersion { path: PathBuf, version: u32 },

    /// Serializing the in-memory book failed
    #[error("Failed to encode address book: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
