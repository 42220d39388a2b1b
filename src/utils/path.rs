//! Root-path normalization for the positional path argument.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Expand a leading `~` to the current user's home directory.
///
/// Paths without a leading `~`, or on platforms where the home directory
/// cannot be determined, are returned unchanged.
///
/// # Examples
///
/// ```
/// # use std::path::PathBuf;
/// # use psize::utils::path::expand_tilde;
/// let absolute = PathBuf::from("/absolute/path");
/// assert_eq!(expand_tilde(&absolute), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

/// Turn the user-supplied root argument into the path to list.
///
/// A trailing separator is appended when missing and a leading `~` is
/// expanded.
#[must_use]
pub fn normalize_root(arg: &str) -> PathBuf {
    let mut root = arg.to_string();
    if !root.ends_with('/') && !root.ends_with(MAIN_SEPARATOR) {
        root.push(MAIN_SEPARATOR);
    }

    expand_tilde(Path::new(&root))
}
