use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during quickcopy operations
#[derive(Error, Debug)]
pub enum QuickCopyError {
    #[error("Failed to load reader script: {0}")]
    ReaderLoad(String),

    #[error("Content extraction failed: {0}")]
    Extraction(String),

    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    #[error("Host API error: {0}")]
    Host(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Cannot read binary file: {0}")]
    BinaryFile(PathBuf),

    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, QuickCopyError>;
