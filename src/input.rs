use crate::error::{QuickCopyError, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Maximum bytes to check for binary content detection
const BINARY_CHECK_SIZE: usize = 8192;

/// Reads an article body text file as a UTF-8 string.
///
/// # Errors
/// - `FileNotFound` if the file doesn't exist
/// - `PermissionDenied` if the file can't be accessed
/// - `BinaryFile` if the file contains null bytes (likely binary)
/// - `IoError` for other I/O failures
pub fn read_body_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    let mut file = fs::File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::PermissionDenied => QuickCopyError::PermissionDenied(path.to_path_buf()),
        io::ErrorKind::NotFound => QuickCopyError::FileNotFound(path.to_path_buf()),
        _ => QuickCopyError::IoError {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    // Check for binary content by reading the first chunk
    let mut buffer = vec![0u8; BINARY_CHECK_SIZE];
    let bytes_read = file
        .read(&mut buffer)
        .map_err(|e| QuickCopyError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;

    if buffer[..bytes_read].contains(&0) {
        return Err(QuickCopyError::BinaryFile(path.to_path_buf()));
    }

    fs::read_to_string(path).map_err(|e| QuickCopyError::IoError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Reads the article body from stdin
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| QuickCopyError::IoError {
            path: "-".into(),
            source: e,
        })?;
    Ok(buffer)
}
