//! The result of one listing run and its plain-text form.

use std::{
    fmt::{self, Display, Formatter},
    io::{self, Write},
    path::PathBuf,
};

use crate::output::style_line;

use super::Entry;

/// One rendered output line.
///
/// The text is always plain; `is_directory` is a style tag that the output
/// boundary turns into color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedLine {
    /// Plain line text, without a trailing newline
    pub text: String,

    /// Whether the line describes a directory
    pub is_directory: bool,
}

/// The complete, sorted, rendered result of listing a directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    /// Entries that were rendered, in display order
    pub entries: Vec<Entry>,

    /// One line per rendered entry, in display order
    pub lines: Vec<RenderedLine>,

    /// Number of entries found before truncation
    pub total_entries: usize,

    /// Sum of all entry sizes, including entries cut by the display count
    pub total_size: u64,

    /// The final `Total Size:` line
    pub summary: String,

    /// Directories whose sizing failed and were counted as 0 bytes
    pub skipped: Vec<PathBuf>,
}

impl Listing {
    /// Write the whole listing to `writer` in a single write.
    ///
    /// When `color` is set, each entry line is styled according to its type.
    /// The summary line is never styled.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying writer.
    pub fn write_to<W: Write>(&self, writer: &mut W, color: bool) -> io::Result<()> {
        let mut buffer = String::new();
        for line in &self.lines {
            buffer.push_str(&style_line(line, color));
            buffer.push('\n');
        }
        buffer.push_str(&self.summary);
        buffer.push('\n');

        writer.write_all(buffer.as_bytes())?;
        writer.flush()
    }
}

impl Display for Listing {
    /// Plain, uncolored form of the listing.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line.text)?;
        }
        write!(f, "{}", self.summary)
    }
}
