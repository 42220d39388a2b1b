//! Entry ordering.
//!
//! Entries are ordered by size, largest first unless ascending order is
//! requested. Entries of equal size are always ordered by ascending name, in
//! both directions, so the output only depends on the filesystem state and
//! never on enumeration or scheduling order.

use std::cmp::Ordering;

use crate::entry::Entry;

/// Compare two entries by size in the requested direction, then by name.
///
/// This is a total order: two entries compare equal only when both their sizes
/// and names are equal.
#[must_use]
pub fn compare_entries(a: &Entry, b: &Entry, ascending: bool) -> Ordering {
    let by_size = if ascending {
        a.size.cmp(&b.size)
    } else {
        b.size.cmp(&a.size)
    };

    by_size.then_with(|| a.name.cmp(&b.name))
}

/// Sort entries in place with [`compare_entries`].
///
/// # Examples
///
/// ```no_run
/// # use psize::{entry::Entry, sorting::sort_entries};
/// # fn example(mut entries: Vec<Entry>) {
/// sort_entries(&mut entries, false);
/// # }
/// ```
pub fn sort_entries(entries: &mut [Entry], ascending: bool) {
    entries.sort_by(|a, b| compare_entries(a, b, ascending));
}
