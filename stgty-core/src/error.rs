//! Error types for storage type lookups.

use thiserror::Error;

/// Result type alias using this crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when resolving a storage type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Raw value is not one of the documented `STGTY` constants.
    #[error("unknown storage type: {0}")]
    UnknownStorageType(u32),

    /// Name matches neither a short name nor a native constant name.
    #[error("unknown storage type name: {0}")]
    UnknownStorageName(String),
}
