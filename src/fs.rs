//! Filesystem collaborator.
//!
//! The listing pipeline never touches the OS directly. It asks a
//! [`FileSystem`] for the children of a directory and for the sizes of every
//! non-directory entry below a path. [`OsFileSystem`] is the real
//! implementation; tests can substitute their own.

use std::{fs, io, ops::ControlFlow, path::Path};

use walkdir::WalkDir;

use crate::entry::RawEntry;

/// One entry reported by [`FileSystem::walk_tree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkEntry {
    /// A directory; it contributes no bytes of its own.
    Directory,
    /// Any other entry, with its size in bytes.
    Leaf(u64),
}

/// Read-only access to a directory tree.
///
/// Implementations must be [`Sync`] because subtrees may be walked from
/// several rayon workers at once.
pub trait FileSystem: Sync {
    /// List the direct children of `path`.
    ///
    /// Symlinks are reported as themselves, not as their targets.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not exist, is not a readable directory,
    /// or one of its children cannot be inspected.
    fn list_directory(&self, path: &Path) -> io::Result<Vec<RawEntry>>;

    /// Visit every entry below `path`, `path` itself included.
    ///
    /// Directories are reported as [`WalkEntry::Directory`] and everything
    /// else as [`WalkEntry::Leaf`] with its size in bytes. The walk stops
    /// early when `visit` returns [`ControlFlow::Break`].
    ///
    /// # Errors
    ///
    /// Returns the first error hit while walking (an entry became unreadable or
    /// was removed mid-walk). The walk is abandoned at that point.
    fn walk_tree(
        &self,
        path: &Path,
        visit: &mut dyn FnMut(WalkEntry) -> ControlFlow<()>,
    ) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs` and `walkdir`.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn list_directory(&self, path: &Path) -> io::Result<Vec<RawEntry>> {
        fs::read_dir(path)?
            .map(|entry| -> io::Result<RawEntry> {
                let entry = entry?;
                // `DirEntry::metadata` does not traverse symlinks
                let metadata = entry.metadata()?;
                Ok(RawEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    size: metadata.len(),
                    is_directory: metadata.is_dir(),
                    path: entry.path(),
                })
            })
            .collect()
    }

    fn walk_tree(
        &self,
        path: &Path,
        visit: &mut dyn FnMut(WalkEntry) -> ControlFlow<()>,
    ) -> io::Result<()> {
        for entry in WalkDir::new(path) {
            let entry = entry?;
            let visited = if entry.file_type().is_dir() {
                WalkEntry::Directory
            } else {
                WalkEntry::Leaf(entry.metadata()?.len())
            };

            if visit(visited).is_break() {
                break;
            }
        }

        Ok(())
    }
}
