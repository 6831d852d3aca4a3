//! Error types for sitesplit operations.
//!
//! This module defines the main error type [`SitesplitError`] which represents
//! all possible errors that can occur while preparing the workspace, reading
//! source documents, writing shared files, and packaging the archive.
//!
//! # Example
//!
//! ```rust
//! use std::path::{Path, PathBuf};
//! use sitesplit_core::{SitesplitError, Result};
//!
//! fn load_page(path: &Path) -> Result<String> {
//!     if !path.exists() {
//!         return Err(SitesplitError::SourceNotFound(path.to_path_buf()));
//!     }
//!     // ... read and restructure
//!     # Ok(String::new())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for restructuring operations.
///
/// This enum represents all fatal errors: anything that prevents the output
/// tree from being produced in full. Per-reference conditions (a missing
/// image, an unreadable page in directory mode) are deliberately not errors;
/// those are skipped and surfaced through the build report instead.
///
/// # Example
///
/// ```rust
/// use std::path::PathBuf;
/// use sitesplit_core::{Source, SitesplitError};
///
/// match Source::File(PathBuf::from("no-such-page.html")).resolve() {
///     Ok(docs) => println!("{} page(s)", docs.len()),
///     Err(SitesplitError::SourceNotFound(path)) => {
///         println!("missing: {}", path.display());
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum SitesplitError {
    /// Mandatory source file is missing.
    ///
    /// Returned in single-file mode when the named document does not exist.
    /// Directory mode never produces this; unreadable entries are skipped.
    #[error("Source file not found: {0}")]
    SourceNotFound(PathBuf),

    /// Filesystem errors.
    ///
    /// Wraps standard I/O errors from workspace preparation, page writes,
    /// and aggregate-file writes. All of these abort the run.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive writing errors.
    ///
    /// Wraps errors from the zip writer while packaging the output tree.
    #[error("Failed to write archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Report encoding errors.
    #[error("Failed to encode report: {0}")]
    Report(#[from] serde_json::Error),
}

/// Result type alias for SitesplitError.
///
/// This is a convenience alias for `std::result::Result<T, SitesplitError>`.
pub type Result<T> = std::result::Result<T, SitesplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SitesplitError::SourceNotFound(PathBuf::from("home.html"));
        assert!(err.to_string().contains("home.html"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SitesplitError::from(io);
        assert!(err.to_string().contains("denied"));
    }
}
