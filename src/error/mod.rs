//! Unified error handling for formfold.
//!
//! Domain-level failures are `SchemaError`; this module provides the
//! crate-level error that also covers the storage and IO layers underneath
//! the editor.

use thiserror::Error;

use crate::schema::types::SchemaError;

/// Crate-level error aggregating the failure sources of editor operations.
#[derive(Error, Debug)]
pub enum FormFoldError {
    /// A schema-level operation failed
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Filesystem access failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The underlying sled database failed
    #[error("Database error: {0}")]
    Sled(#[from] sled::Error),
}

/// Convenience result type for crate-level operations.
pub type FormFoldResult<T> = Result<T, FormFoldError>;
