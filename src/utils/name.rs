//! Entry-name shortening for the fixed-width name column.

/// Names longer than this many characters are shortened.
pub const MAX_NAME_CHARS: usize = 30;

/// Marker prefixed to a shortened name.
pub const ELLIPSIS: &str = "...";

/// Shorten a name to its trailing [`MAX_NAME_CHARS`] characters.
///
/// Names of at most [`MAX_NAME_CHARS`] characters are returned unchanged.
/// Longer names keep their last [`MAX_NAME_CHARS`] characters prefixed with
/// [`ELLIPSIS`], since the end of a file name (its extension, version suffix)
/// usually tells entries apart best. Lengths are counted in `char`s, so
/// multibyte names are never split inside a code point.
#[must_use]
pub fn shorten_name(name: &str) -> String {
    let char_count = name.chars().count();
    if char_count <= MAX_NAME_CHARS {
        return name.to_string();
    }

    let tail: String = name.chars().skip(char_count - MAX_NAME_CHARS).collect();
    format!("{ELLIPSIS}{tail}")
}
