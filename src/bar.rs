//! Proportional bar rendering.

/// Render a bar whose length is proportional to `current / total`.
///
/// The bar is `floor(current / total * width)` repetitions of `glyph`, so it
/// never exceeds `width` glyphs. `current` is clamped to `total`. An empty
/// string is returned when `total` or `width` is zero.
///
/// # Examples
///
/// ```
/// # use psize::bar::render_bar;
/// assert_eq!(render_bar("#", 50, 100, 10), "#####");
/// assert_eq!(render_bar("#", 1, 0, 10), "");
/// ```
#[must_use]
pub fn render_bar(glyph: &str, current: u64, total: u64, width: usize) -> String {
    if total == 0 || width == 0 {
        return String::new();
    }

    let current = current.min(total);
    let scaled = u128::from(current) * width as u128 / u128::from(total);
    // `scaled <= width` because `current <= total`
    let length = usize::try_from(scaled).unwrap_or(width);

    glyph.repeat(length)
}
