//! Sizing configuration for directory traversal.
//!
//! This module defines the options that control how subdirectory sizes are
//! computed: in parallel or not, on how many threads, and for how long.

use std::time::Duration;

/// Configuration for directory sizing behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Size sibling subdirectories concurrently on the rayon pool
    pub parallel: bool,

    /// Number of threads to use for sizing (0 = rayon default)
    pub threads: usize,

    /// Abort sizing once this much time has elapsed (None = no limit)
    pub timeout: Option<Duration>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: 0,
            timeout: None,
        }
    }
}
