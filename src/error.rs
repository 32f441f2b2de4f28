//! Error types for the Lumina filter engine.

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Result type for Lumina operations.
pub type Result<T> = std::result::Result<T, LuminaError>;

/// Errors that can occur in the filter engine and its collaborators.
///
/// Undo/redo past the history boundary is deliberately not represented
/// here; those calls are defined as no-ops.
#[derive(Error, Debug)]
pub enum LuminaError {
    // Parameter Errors
    #[error("Unknown filter parameter: {key}")]
    InvalidParameterKey { key: String },

    // File Errors
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read file: {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}: {source}")]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory creation failed: {path}: {source}")]
    DirectoryCreateError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Session Errors
    #[error("Session not found: {path}")]
    SessionNotFound { path: PathBuf },

    #[error("No image loaded in session")]
    NoImageLoaded,

    // Gallery Errors
    #[error("Gallery entry not found: {id}")]
    GalleryEntryNotFound { id: Uuid },

    // Serialization Errors
    #[error("JSON serialization error: {0}")]
    JsonSerializationError(#[from] serde_json::Error),
}

impl LuminaError {
    /// Returns a user-friendly recovery suggestion.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            LuminaError::InvalidParameterKey { .. } => {
                Some("Run 'lumina-cli set --help' for the list of valid parameter keys.")
            }
            LuminaError::FileNotFound { .. } => Some("Check the file path and try again."),
            LuminaError::SessionNotFound { .. } => {
                Some("Create a session first with 'lumina-cli init <session>'.")
            }
            LuminaError::NoImageLoaded => {
                Some("Load an original image with 'lumina-cli load-image' before saving.")
            }
            _ => None,
        }
    }
}
