//! Core entry data structures.

use std::path::PathBuf;

/// A direct child of the listed directory as reported by the filesystem.
///
/// For a directory, `size` is the size of its own metadata block, not of its
/// contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawEntry {
    /// File name of the entry
    pub name: String,

    /// Size in bytes from metadata
    pub size: u64,

    /// Whether the entry is a directory (symlinks are not followed)
    pub is_directory: bool,

    /// Full path to the entry
    pub path: PathBuf,
}

/// A sized file or directory.
///
/// Built once by the [`Lister`](crate::lister::Lister) and never mutated
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// File name of the entry
    pub name: String,

    /// Size in bytes. For directories this is the subtree size when
    /// directory sizing is enabled, otherwise the metadata size.
    pub size: u64,

    /// Whether the entry is a directory
    pub is_directory: bool,

    /// Full path to the entry
    pub path: PathBuf,
}

impl Entry {
    /// Create an entry from a raw filesystem entry and its final size.
    #[must_use]
    pub fn sized(raw: RawEntry, size: u64) -> Self {
        Self {
            name: raw.name,
            size,
            is_directory: raw.is_directory,
            path: raw.path,
        }
    }
}

impl From<RawEntry> for Entry {
    /// Keep the metadata size reported by the filesystem.
    fn from(raw: RawEntry) -> Self {
        let size = raw.size;
        Self::sized(raw, size)
    }
}
