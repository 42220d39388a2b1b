//! The listing pipeline.
//!
//! A [`Lister`] runs one pass of Enumerate → Size → Sort → Truncate → Render →
//! Emit over the direct children of a directory and returns a [`Listing`].
//! It never writes to the terminal itself; the caller decides how to emit the
//! result.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use crate::{
    bar::render_bar,
    config::{DisplayConfig, ScanOptions},
    entry::{Entry, Listing, RawEntry, RenderedLine},
    error::{ListError, SizeError},
    fs::FileSystem,
    sizer::{CancelToken, DirectorySizer},
    sorting::sort_entries,
    utils::{format_size, shorten_name},
};

/// Width of the left-justified name column.
pub const NAME_COLUMN_WIDTH: usize = 40;

/// Lists a directory through a [`FileSystem`].
#[derive(Debug)]
pub struct Lister<F> {
    /// Filesystem collaborator used for enumeration and walking
    fs: F,

    /// How directory sizes are computed
    scan_options: ScanOptions,

    /// When `true`, suppresses the sizing spinner (used by `--json` mode and tests).
    quiet: bool,
}

impl<F: FileSystem> Lister<F> {
    /// Create a lister reading through `fs`.
    #[must_use]
    pub const fn new(fs: F, scan_options: ScanOptions) -> Self {
        Self {
            fs,
            scan_options,
            quiet: false,
        }
    }

    /// Enable or disable quiet mode (suppresses the sizing spinner).
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// List the direct children of `config.root_path`.
    ///
    /// Directories that fail to size (permission denied, removed mid-walk) do
    /// not abort the listing: they are shown as 0 bytes, logged as a warning,
    /// and recorded in [`Listing::skipped`].
    ///
    /// # Errors
    ///
    /// - [`ListError::NotFound`], [`ListError::PermissionDenied`] or
    ///   [`ListError::Io`] if the root directory cannot be enumerated
    /// - [`ListError::TimedOut`] if the sizing deadline passed before every
    ///   directory was sized
    pub fn list(&self, config: &DisplayConfig) -> Result<Listing, ListError> {
        let root = &config.root_path;
        let raw_entries = self
            .fs
            .list_directory(root)
            .map_err(|source| ListError::from_io(root.clone(), source))?;
        debug!(root = %root.display(), entries = raw_entries.len(), "enumerated");

        let (mut entries, skipped) = if config.compute_directory_sizes {
            self.size_directories(raw_entries, root)?
        } else {
            (raw_entries.into_iter().map(Entry::from).collect(), vec![])
        };

        sort_entries(&mut entries, config.ascending);

        let total_entries = entries.len();
        let total_size = entries
            .iter()
            .fold(0u64, |sum, entry| sum.saturating_add(entry.size));

        entries.truncate(config.display_count);

        let lines = entries
            .iter()
            .map(|entry| render_line(entry, total_size, config))
            .collect();

        Ok(Listing {
            entries,
            lines,
            total_entries,
            total_size,
            summary: format!("Total Size: {}", format_size(total_size)),
            skipped,
        })
    }

    /// Replace every directory's metadata size with its subtree size.
    ///
    /// Returns the sized entries and the directories that could not be sized.
    fn size_directories(
        &self,
        raw_entries: Vec<RawEntry>,
        root: &Path,
    ) -> Result<(Vec<Entry>, Vec<PathBuf>), ListError> {
        let dir_paths: Vec<PathBuf> = raw_entries
            .iter()
            .filter(|raw| raw.is_directory)
            .map(|raw| raw.path.clone())
            .collect();

        let progress = self.spinner(dir_paths.len());
        let sizer = DirectorySizer::new(
            &self.fs,
            CancelToken::from_timeout(self.scan_options.timeout),
        );
        let results = sizer.size_many(&dir_paths, self.scan_options.parallel);
        progress.finish_and_clear();

        let mut results = results.into_iter();
        let mut entries = Vec::with_capacity(raw_entries.len());
        let mut skipped = Vec::new();

        for raw in raw_entries {
            if !raw.is_directory {
                entries.push(Entry::from(raw));
                continue;
            }

            match results.next() {
                Some(Ok(size)) => entries.push(Entry::sized(raw, size)),
                Some(Err(SizeError::Cancelled { .. })) => {
                    return Err(ListError::TimedOut { path: root.to_path_buf() });
                }
                Some(Err(err)) => {
                    warn!(error = %err, "counting unreadable directory as 0 bytes");
                    skipped.push(raw.path.clone());
                    entries.push(Entry::sized(raw, 0));
                }
                None => entries.push(Entry::from(raw)),
            }
        }

        Ok((entries, skipped))
    }

    /// Spinner shown on stderr while directories are sized.
    fn spinner(&self, directories: usize) -> ProgressBar {
        if self.quiet || directories == 0 {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Sizing {directories} directories..."));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

/// Render one entry as a plain line.
///
/// Layout: the shortened name left-justified in [`NAME_COLUMN_WIDTH`]
/// columns, a space, the formatted size, a `|` separator, then a bar filling
/// whatever terminal width remains.
#[must_use]
pub fn render_line(entry: &Entry, total_size: u64, config: &DisplayConfig) -> RenderedLine {
    let prefix = format!(
        "{:<NAME_COLUMN_WIDTH$} {}|",
        shorten_name(&entry.name),
        format_size(entry.size)
    );
    let available = config
        .terminal_width
        .saturating_sub(prefix.chars().count());
    let bar = render_bar(&config.bar_glyph, entry.size, total_size, available);

    RenderedLine {
        text: prefix + &bar,
        is_directory: entry.is_directory,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::WalkEntry;
    use std::{collections::HashMap, io, ops::ControlFlow};

    /// In-memory filesystem: one listable root plus per-directory walk results.
    #[derive(Default)]
    struct MemoryFileSystem {
        listings: HashMap<PathBuf, Vec<RawEntry>>,
        walks: HashMap<PathBuf, Result<Vec<u64>, io::ErrorKind>>,
    }

    impl MemoryFileSystem {
        fn root() -> PathBuf {
            PathBuf::from("/root/")
        }

        fn with_file(mut self, name: &str, size: u64) -> Self {
            self.push(name, size, false);
            self
        }

        fn with_dir(mut self, name: &str, files: &[u64]) -> Self {
            let path = self.push(name, 4096, true);
            self.walks.insert(path, Ok(files.to_vec()));
            self
        }

        fn with_broken_dir(mut self, name: &str, kind: io::ErrorKind) -> Self {
            let path = self.push(name, 4096, true);
            self.walks.insert(path, Err(kind));
            self
        }

        fn push(&mut self, name: &str, size: u64, is_directory: bool) -> PathBuf {
            let path = Self::root().join(name);
            self.listings.entry(Self::root()).or_default().push(RawEntry {
                name: name.to_string(),
                size,
                is_directory,
                path: path.clone(),
            });
            path
        }
    }

    impl FileSystem for MemoryFileSystem {
        fn list_directory(&self, path: &Path) -> io::Result<Vec<RawEntry>> {
            self.listings
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }

        fn walk_tree(
            &self,
            path: &Path,
            visit: &mut dyn FnMut(WalkEntry) -> ControlFlow<()>,
        ) -> io::Result<()> {
            match self.walks.get(path) {
                Some(Ok(files)) => {
                    for &len in files {
                        if visit(WalkEntry::Leaf(len)).is_break() {
                            break;
                        }
                    }
                    Ok(())
                }
                Some(Err(kind)) => Err(io::Error::from(*kind)),
                None => Err(io::Error::from(io::ErrorKind::NotFound)),
            }
        }
    }

    fn config(compute_directory_sizes: bool) -> DisplayConfig {
        DisplayConfig {
            root_path: MemoryFileSystem::root(),
            compute_directory_sizes,
            ..DisplayConfig::default()
        }
    }

    fn lister(fs: MemoryFileSystem) -> Lister<MemoryFileSystem> {
        Lister::new(fs, ScanOptions::default()).with_quiet(true)
    }

    fn names(listing: &Listing) -> Vec<&str> {
        listing.entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_sizes_directories_and_sorts_descending() {
        let fs = MemoryFileSystem::default()
            .with_file("a", 100)
            .with_file("b", 50)
            .with_dir("c", &[200]);

        let listing = lister(fs).list(&config(true)).unwrap();

        assert_eq!(names(&listing), vec!["c", "a", "b"]);
        assert_eq!(listing.entries[0].size, 200);
        assert_eq!(listing.total_size, 350);
        assert_eq!(listing.summary, "Total Size:  350.00 B");
        assert!(listing.skipped.is_empty());
    }

    #[test]
    fn test_directory_metadata_size_used_without_dirsize() {
        let fs = MemoryFileSystem::default()
            .with_file("a", 100)
            .with_dir("c", &[200, 300]);

        let listing = lister(fs).list(&config(false)).unwrap();

        assert_eq!(names(&listing), vec!["c", "a"]);
        assert_eq!(listing.entries[0].size, 4096);
        assert_eq!(listing.total_size, 4196);
    }

    #[test]
    fn test_truncation_keeps_total_over_all_entries() {
        let fs = MemoryFileSystem::default()
            .with_file("one", 1)
            .with_file("two", 2)
            .with_file("three", 3)
            .with_file("four", 4)
            .with_file("five", 5);

        let listing = lister(fs)
            .list(&DisplayConfig {
                display_count: 2,
                ..config(false)
            })
            .unwrap();

        assert_eq!(listing.lines.len(), 2);
        assert_eq!(names(&listing), vec!["five", "four"]);
        assert_eq!(listing.total_entries, 5);
        assert_eq!(listing.total_size, 15);
    }

    #[test]
    fn test_zero_display_count_renders_only_summary() {
        let fs = MemoryFileSystem::default().with_file("a", 10);

        let listing = lister(fs)
            .list(&DisplayConfig {
                display_count: 0,
                ..config(false)
            })
            .unwrap();

        assert!(listing.lines.is_empty());
        assert_eq!(listing.to_string(), "Total Size:   10.00 B");
    }

    #[test]
    fn test_ascending_order() {
        let fs = MemoryFileSystem::default()
            .with_file("a", 100)
            .with_file("b", 50)
            .with_dir("c", &[200]);

        let listing = lister(fs)
            .list(&DisplayConfig {
                ascending: true,
                ..config(true)
            })
            .unwrap();

        assert_eq!(names(&listing), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_unreadable_directory_counts_as_zero() {
        let fs = MemoryFileSystem::default()
            .with_file("a", 100)
            .with_broken_dir("locked", io::ErrorKind::PermissionDenied)
            .with_dir("ok", &[10, 20]);

        let listing = lister(fs).list(&config(true)).unwrap();

        assert_eq!(names(&listing), vec!["a", "ok", "locked"]);
        assert_eq!(listing.entries[2].size, 0);
        assert_eq!(listing.total_size, 130);
        assert_eq!(
            listing.skipped,
            vec![MemoryFileSystem::root().join("locked")]
        );
    }

    #[test]
    fn test_sequential_and_parallel_agree() {
        let build = || {
            MemoryFileSystem::default()
                .with_dir("d1", &[5, 5])
                .with_dir("d2", &[30])
                .with_dir("d3", &[10])
                .with_file("f", 10)
        };

        let parallel = lister(build()).list(&config(true)).unwrap();
        let sequential = Lister::new(
            build(),
            ScanOptions {
                parallel: false,
                ..ScanOptions::default()
            },
        )
        .with_quiet(true)
        .list(&config(true))
        .unwrap();

        assert_eq!(parallel, sequential);
        assert_eq!(names(&parallel), vec!["d2", "d1", "d3", "f"]);
    }

    #[test]
    fn test_expired_deadline_is_fatal() {
        let fs = MemoryFileSystem::default().with_dir("slow", &[1, 2, 3]);
        let lister = Lister::new(
            fs,
            ScanOptions {
                timeout: Some(Duration::ZERO),
                ..ScanOptions::default()
            },
        )
        .with_quiet(true);

        let err = lister.list(&config(true)).unwrap_err();
        assert!(matches!(err, ListError::TimedOut { .. }));
    }

    #[test]
    fn test_deadline_ignored_without_dirsize() {
        let fs = MemoryFileSystem::default().with_dir("slow", &[1, 2, 3]);
        let lister = Lister::new(
            fs,
            ScanOptions {
                timeout: Some(Duration::ZERO),
                ..ScanOptions::default()
            },
        )
        .with_quiet(true);

        assert!(lister.list(&config(false)).is_ok());
    }

    #[test]
    fn test_missing_root_is_not_found() {
        let err = lister(MemoryFileSystem::default())
            .list(&config(false))
            .unwrap_err();

        assert!(matches!(err, ListError::NotFound { .. }));
    }

    #[test]
    fn test_empty_directory() {
        let mut fs = MemoryFileSystem::default();
        fs.listings.insert(MemoryFileSystem::root(), vec![]);

        let listing = lister(fs).list(&config(true)).unwrap();

        assert!(listing.lines.is_empty());
        assert_eq!(listing.total_size, 0);
        assert_eq!(listing.summary, "Total Size:    0.00 B");
    }

    #[test]
    fn test_render_line_layout() {
        let entry = Entry {
            name: "a".to_string(),
            size: 100,
            is_directory: false,
            path: PathBuf::from("a"),
        };
        let config = DisplayConfig {
            bar_glyph: "#".to_string(),
            terminal_width: 61,
            ..DisplayConfig::default()
        };

        // 40 name columns + space + 9 size columns + '|' leaves 10 for the bar
        let line = render_line(&entry, 200, &config);

        assert_eq!(line.text, format!("{:<40}  100.00 B|{}", "a", "#".repeat(5)));
        assert!(!line.is_directory);
    }

    #[test]
    fn test_render_line_shortens_long_names() {
        let entry = Entry {
            name: format!("prefix-{}", "n".repeat(30)),
            size: 0,
            is_directory: true,
            path: PathBuf::from("long"),
        };

        let line = render_line(&entry, 10, &DisplayConfig::default());

        assert!(line.text.starts_with(&format!("...{}", "n".repeat(30))));
        assert!(line.is_directory);
    }

    #[test]
    fn test_render_line_narrow_terminal_has_no_bar() {
        let entry = Entry {
            name: "a".to_string(),
            size: 100,
            is_directory: false,
            path: PathBuf::from("a"),
        };
        let config = DisplayConfig {
            terminal_width: 20,
            ..DisplayConfig::default()
        };

        let line = render_line(&entry, 100, &config);

        assert!(line.text.ends_with('|'));
        assert_eq!(line.text.chars().count(), 51);
    }

    #[test]
    fn test_largest_entry_bar_fills_remaining_width() {
        let fs = MemoryFileSystem::default().with_file("only", 42);

        let listing = lister(fs).list(&config(false)).unwrap();
        let line = &listing.lines[0].text;

        assert_eq!(line.chars().count(), 80);
        assert!(line.ends_with(&"█".repeat(29)));
    }
}
