//! Utility functions for error handling

use std::fs;
use std::io;
use std::path::Path;

use crate::error::Result;

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
///
/// # Returns
/// * `Result<fs::File>` - The opened file or a detailed error
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("File not found: {} (needed for {purpose})", path.display()),
        )
        .into());
    }

    if !path.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Path is not a file: {} (expected a file for {purpose})", path.display()),
        )
        .into());
    }

    fs::File::open(path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Failed to open {} for {purpose}: {e}", path.display()),
        )
        .into()
    })
}
