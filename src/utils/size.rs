//! Human-readable byte formatting.
//!
//! Sizes are scaled by powers of 1024 and printed with two decimals in a fixed
//! layout so that the size column lines up:
//!
//! ```text
//!  100.00 B
//!    1.50 K
//!   12.34 M
//! ```

/// One byte.
pub const BYTES: u64 = 1;

/// 1024 bytes.
pub const KILOBYTE: u64 = 1 << 10;

/// 1024² bytes.
pub const MEGABYTE: u64 = 1 << 20;

/// 1024³ bytes.
pub const GIGABYTE: u64 = 1 << 30;

/// Width of the right-aligned numeric field.
const NUMBER_WIDTH: usize = 7;

/// Width of the right-aligned unit suffix field.
const SUFFIX_WIDTH: usize = 2;

/// Pick the largest unit not exceeding `size`.
const fn scale_for(size: u64) -> (u64, &'static str) {
    if size >= GIGABYTE {
        (GIGABYTE, "G")
    } else if size >= MEGABYTE {
        (MEGABYTE, "M")
    } else if size >= KILOBYTE {
        (KILOBYTE, "K")
    } else {
        (BYTES, "B")
    }
}

/// Format a byte count as a fixed-width human-readable string.
///
/// The quotient is truncated (never rounded up) to two decimals, so a value
/// always stays inside its unit: a `K` result is in `[1.00, 1023.99]`.
///
/// # Examples
///
/// ```
/// # use psize::utils::format_size;
/// assert_eq!(format_size(100), " 100.00 B");
/// assert_eq!(format_size(1536), "   1.50 K");
/// ```
#[must_use]
pub fn format_size(size: u64) -> String {
    let (unit, suffix) = scale_for(size);
    let hundredths = u128::from(size) * 100 / u128::from(unit);
    let number = format!("{}.{:02}", hundredths / 100, hundredths % 100);

    format!("{number:>NUMBER_WIDTH$}{suffix:>SUFFIX_WIDTH$}")
}
