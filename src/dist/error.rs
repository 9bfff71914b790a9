//! Error types for distribution operations.
//!
//! Filesystem failures carry the path and a short description of what was
//! being attempted, so a failed copy reads like
//! `copying branding icon /repo/branding/icons/honeyos.ico: No such file or directory`.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Result type alias for distribution operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while preparing or assembling a distribution.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem operation failed on a known path
    #[error("{context} {}: {source}", .path.display())]
    Fs {
        /// What was being attempted
        context: String,
        /// Path the operation was applied to
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Error wrapped with additional context
    #[error("{context}: {source}")]
    Context {
        /// Additional context
        context: String,
        /// Wrapped error
        #[source]
        source: Box<Error>,
    },

    /// Free-form error message
    #[error("{0}")]
    GenericError(String),

    /// IO error without path information
    #[error(transparent)]
    IoError(#[from] io::Error),

    /// Directory traversal error
    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),

    /// Path prefix mismatch during a tree copy
    #[error(transparent)]
    StripPrefix(#[from] std::path::StripPrefixError),
}

/// Attach a human-readable context to a fallible value.
pub trait Context<T> {
    /// Wrap the error with `context`.
    fn context<C: Display>(self, context: C) -> Result<T>;
}

impl<T, E: Into<Error>> Context<T> for std::result::Result<T, E> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|e| Error::Context {
            context: context.to_string(),
            source: Box::new(e.into()),
        })
    }
}

/// Attach a filesystem path to an IO error.
pub trait ErrorExt<T> {
    /// Convert the IO error into [`Error::Fs`] with the given description and path.
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context: context.to_string(),
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Return early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::dist::Error::GenericError(format!($($arg)*)))
    };
}
