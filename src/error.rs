//! Error types for listing and directory sizing.
//!
//! Enumeration failures are fatal to a listing and surface as [`ListError`].
//! Failures while sizing a single subtree are reported as [`SizeError`] and the
//! [`Lister`](crate::lister::Lister) decides how to degrade.

use std::{io, path::PathBuf};

use thiserror::Error;

/// A fatal error that aborts the whole listing.
#[derive(Debug, Error)]
pub enum ListError {
    /// The root path does not exist.
    #[error("{}: no such file or directory", path.display())]
    NotFound { path: PathBuf },

    /// The root path exists but cannot be read.
    #[error("{}: permission denied", path.display())]
    PermissionDenied { path: PathBuf },

    /// Any other read failure while enumerating the root path.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory sizing was cancelled, typically because the deadline passed.
    #[error("sizing {} timed out", path.display())]
    TimedOut { path: PathBuf },
}

impl ListError {
    /// Classify an enumeration failure by its [`io::ErrorKind`].
    #[must_use]
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }
}

/// A failure while computing the size of one subtree.
#[derive(Debug, Error)]
pub enum SizeError {
    /// An entry became unreadable or vanished during the walk.
    #[error("failed to size {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The walk was stopped by a [`CancelToken`](crate::sizer::CancelToken).
    #[error("sizing of {} was cancelled", path.display())]
    Cancelled { path: PathBuf },
}
