//! Recursive directory sizing.
//!
//! A directory's size is the sum of the sizes of all non-directory entries
//! below it. Sibling directories can be sized in parallel on the rayon pool;
//! each unit walks its own subtree into its own accumulator and results are
//! only combined once every unit has finished.

use std::{
    ops::ControlFlow,
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{
    error::SizeError,
    fs::{FileSystem, WalkEntry},
};

/// Shared cancellation flag with an optional deadline.
///
/// Clones share the same flag, so cancelling one (or one of them noticing the
/// deadline has passed) stops every walk polling a clone.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancelToken {
    /// A token that only trips when [`cancel`](Self::cancel) is called.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that also trips once `timeout` has elapsed from now.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancelled: Arc::default(),
            deadline: Instant::now().checked_add(timeout),
        }
    }

    /// Build a token from an optional timeout.
    #[must_use]
    pub fn from_timeout(timeout: Option<Duration>) -> Self {
        timeout.map_or_else(Self::new, Self::with_timeout)
    }

    /// Trip the token for every clone.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether the token was cancelled or its deadline has passed.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        if self.cancelled.load(Ordering::Relaxed) {
            return true;
        }

        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            self.cancel();
            return true;
        }

        false
    }
}

/// Computes subtree sizes through a [`FileSystem`].
#[derive(Debug)]
pub struct DirectorySizer<'a, F: ?Sized> {
    fs: &'a F,
    cancel: CancelToken,
}

impl<'a, F: FileSystem + ?Sized> DirectorySizer<'a, F> {
    /// Create a sizer that reads through `fs` and stops when `cancel` trips.
    #[must_use]
    pub const fn new(fs: &'a F, cancel: CancelToken) -> Self {
        Self { fs, cancel }
    }

    /// Total size in bytes of every non-directory entry below `path`.
    ///
    /// The cancel token is polled once per visited entry, directories
    /// included, so `path` itself is the first check.
    ///
    /// # Errors
    ///
    /// - [`SizeError::Io`] if any entry cannot be read during the walk; the
    ///   partial sum is discarded
    /// - [`SizeError::Cancelled`] if the cancel token trips before the walk ends
    pub fn size(&self, path: &Path) -> Result<u64, SizeError> {
        let mut total = 0u64;
        let mut stopped = false;
        self.fs
            .walk_tree(path, &mut |entry| {
                if self.cancel.is_cancelled() {
                    stopped = true;
                    return ControlFlow::Break(());
                }
                if let WalkEntry::Leaf(len) = entry {
                    total = total.saturating_add(len);
                }
                ControlFlow::Continue(())
            })
            .map_err(|source| SizeError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        if stopped {
            return Err(SizeError::Cancelled {
                path: path.to_path_buf(),
            });
        }

        trace!(path = %path.display(), bytes = total, "sized directory");
        Ok(total)
    }

    /// Size several sibling directories, optionally in parallel.
    ///
    /// Results are returned in the same order as `paths`, whatever order the
    /// workers finished in.
    pub fn size_many(&self, paths: &[PathBuf], parallel: bool) -> Vec<Result<u64, SizeError>> {
        debug!(count = paths.len(), parallel, "sizing directories");

        if parallel {
            paths.par_iter().map(|path| self.size(path)).collect()
        } else {
            paths.iter().map(|path| self.size(path)).collect()
        }
    }
}
