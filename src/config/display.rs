//! Display configuration: what to list and how to draw it.

use std::path::PathBuf;

use crate::terminal::DEFAULT_TERMINAL_WIDTH;

/// Default glyph repeated to draw size bars.
pub const DEFAULT_BAR_GLYPH: &str = "█";

/// Default number of entries shown.
pub const DEFAULT_DISPLAY_COUNT: usize = 10;

/// Default root path, relative to the working directory.
pub const DEFAULT_ROOT_PATH: &str = "./";

/// Options controlling one listing.
///
/// Constructed once from [`DisplayConfig::default`] with caller overrides, then
/// read-only for the rest of the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Glyph repeated to draw the proportional bar
    pub bar_glyph: String,

    /// Recursively size directories instead of using their metadata size
    pub compute_directory_sizes: bool,

    /// Directory whose direct children are listed
    pub root_path: PathBuf,

    /// Smallest entries first instead of largest first
    pub ascending: bool,

    /// Maximum number of entries rendered (the total still covers all entries)
    pub display_count: usize,

    /// Terminal width in columns used to scale bars
    pub terminal_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bar_glyph: DEFAULT_BAR_GLYPH.to_string(),
            compute_directory_sizes: false,
            root_path: PathBuf::from(DEFAULT_ROOT_PATH),
            ascending: false,
            display_count: DEFAULT_DISPLAY_COUNT,
            terminal_width: DEFAULT_TERMINAL_WIDTH,
        }
    }
}
