//! Error types for photolog.
//!
//! This module defines all error types used throughout the photolog crate.
//! The storage kinds mirror the lifecycle of a journal operation: the
//! database either cannot be opened, a write does not commit, or a read
//! fails; the repository passes these through to the caller unchanged.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for photolog operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// The journal database cannot be opened (missing permissions, an
    /// unwritable location, or a failed schema upgrade).
    #[error("journal storage unavailable at {path}: {message}")]
    StorageUnavailable {
        /// Path to the database file.
        path: PathBuf,
        /// Description of what went wrong.
        message: String,
    },

    /// A schema version upgrade did not complete.
    #[error("schema upgrade failed: {message}")]
    SchemaUpgrade {
        /// Description of what went wrong.
        message: String,
    },

    /// An entry write transaction aborted before committing.
    #[error("entry write failed: {source}")]
    WriteFailed {
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// An entry read transaction failed.
    #[error("entry read failed: {source}")]
    ReadFailed {
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Capture Errors ===
    /// A commit was requested while no captured frame was staged.
    #[error("no captured frame is staged")]
    NoPendingFrame,

    /// A frame source failed to start.
    #[error("failed to start frame source '{name}': {message}")]
    FrameSourceStart {
        /// Name of the frame source.
        name: &'static str,
        /// Description of what went wrong.
        message: String,
    },

    /// A frame source failed to stop.
    #[error("failed to stop frame source '{name}': {message}")]
    FrameSourceStop {
        /// Name of the frame source.
        name: &'static str,
        /// Description of what went wrong.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for photolog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a storage-unavailable error for the given database path.
    #[must_use]
    pub fn storage_unavailable(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a schema upgrade error.
    #[must_use]
    pub fn schema_upgrade(message: impl Into<String>) -> Self {
        Self::SchemaUpgrade {
            message: message.into(),
        }
    }

    /// Create a frame source start error.
    #[must_use]
    pub fn frame_source_start(name: &'static str, message: impl Into<String>) -> Self {
        Self::FrameSourceStart {
            name,
            message: message.into(),
        }
    }

    /// Create a frame source stop error.
    #[must_use]
    pub fn frame_source_stop(name: &'static str, message: impl Into<String>) -> Self {
        Self::FrameSourceStop {
            name,
            message: message.into(),
        }
    }

    /// Check if this error means the journal database could not be opened.
    #[must_use]
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable { .. })
    }

    /// Check if this error is a failed entry write.
    ///
    /// Callers holding a staged capture use this to decide whether a retry
    /// without recapturing makes sense.
    #[must_use]
    pub fn is_write_failed(&self) -> bool {
        matches!(self, Self::WriteFailed { .. })
    }
}
