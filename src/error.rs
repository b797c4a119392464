//! Library-wide error types.
//!
//! Library modules return [`Error`] via `thiserror`, while the CLI uses
//! `anyhow` for convenient error propagation.
//!
//! Filesystem errors are wrapped without modification, so callers can still
//! match on [`std::io::ErrorKind`]:
//!
//! ```ignore
//! match qmusic::cover::find_cover_art(dir) {
//!     Err(qmusic::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
//!     _ => {}
//! }
//! ```

use std::path::PathBuf;

/// Library-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tag reading error
    #[error("Metadata error for {path}: {message}")]
    Metadata { path: PathBuf, message: String },

    /// Embedded picture could not be decoded
    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    /// The user's home directory could not be determined
    #[error("Could not determine home directory")]
    NoHomeDir,
}

impl Error {
    /// Create a metadata error.
    pub fn metadata(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Metadata {
            path: path.into(),
            message: message.into(),
        }
    }

    /// The underlying I/O error, if this is one.
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}
