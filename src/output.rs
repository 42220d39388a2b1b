//! Output boundary: terminal styling and structured JSON output.
//!
//! The pipeline only produces plain text. Colors are applied here, line by
//! line, right before writing. When the `--json` flag is passed, the
//! structures in this module are serialized to stdout as a single JSON object,
//! replacing all human-readable output.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::entry::{Entry, Listing, RenderedLine};
use crate::utils::format_size;

/// Apply the entry-type color to a rendered line.
///
/// Directories are cyan and files are yellow. With `color` unset, or when
/// `colored` decides the environment should not be colorized (`NO_COLOR`),
/// the plain text is returned untouched.
#[must_use]
pub fn style_line(line: &RenderedLine, color: bool) -> String {
    if !color {
        return line.text.clone();
    }

    if line.is_directory {
        line.text.cyan().to_string()
    } else {
        line.text.yellow().to_string()
    }
}

/// Top-level JSON output emitted when `--json` is active.
#[derive(Serialize)]
pub struct JsonOutput {
    /// The directory that was listed.
    pub root: String,

    /// Rendered entries, in display order.
    pub entries: Vec<JsonEntry>,

    /// Aggregated summary statistics.
    pub summary: JsonSummary,

    /// Directories whose sizing failed and were counted as 0 bytes.
    pub skipped: Vec<String>,
}

/// A single entry in the JSON output.
#[derive(Serialize)]
pub struct JsonEntry {
    /// File name of the entry.
    pub name: String,

    /// Full path to the entry.
    pub path: String,

    /// Size in bytes.
    pub size: u64,

    /// Human-readable size (e.g. `"1.50 K"`).
    pub size_formatted: String,

    /// Whether the entry is a directory.
    pub is_directory: bool,
}

/// Totals across every entry, including those cut by the display count.
#[derive(Serialize)]
pub struct JsonSummary {
    /// Number of entries found.
    pub total_entries: usize,

    /// Number of entries included in `entries`.
    pub displayed_entries: usize,

    /// Total size in bytes.
    pub total_size: u64,

    /// Human-readable total size.
    pub total_size_formatted: String,
}

impl JsonOutput {
    /// Build a `JsonOutput` from a finished listing.
    #[must_use]
    pub fn from_listing(root: &Path, listing: &Listing) -> Self {
        Self {
            root: root.display().to_string(),
            entries: listing.entries.iter().map(JsonEntry::from_entry).collect(),
            summary: JsonSummary {
                total_entries: listing.total_entries,
                displayed_entries: listing.entries.len(),
                total_size: listing.total_size,
                total_size_formatted: format_size(listing.total_size).trim().to_string(),
            },
            skipped: listing
                .skipped
                .iter()
                .map(|path| path.display().to_string())
                .collect(),
        }
    }
}

impl JsonEntry {
    /// Convert an `Entry` into a `JsonEntry`.
    #[must_use]
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            name: entry.name.clone(),
            path: entry.path.display().to_string(),
            size: entry.size,
            size_formatted: format_size(entry.size).trim().to_string(),
            is_directory: entry.is_directory,
        }
    }
}
