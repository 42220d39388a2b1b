//! Terminal-info collaborator.

use terminal_size::{Width, terminal_size};

/// Width used when the terminal size cannot be determined.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Current terminal width in columns.
///
/// Falls back to [`DEFAULT_TERMINAL_WIDTH`] when stdout is not a terminal or
/// the query fails.
#[must_use]
pub fn terminal_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| usize::from(w))
        .filter(|&w| w > 0)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}
