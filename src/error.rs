//! Error types for keygraph operations.
//!
//! Graph mutation and lookup report failure through their return values
//! (`Option` for vertex operations, `bool` for edge insertion); only the
//! export layer produces typed errors, and those carry enough context to
//! diagnose the failure without a debugger.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for keygraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for the fallible (export and file I/O) operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Failed to read or write a file.
    #[error("I/O error for {}: {source}", path.display())]
    Io {
        /// Path of the file being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}
