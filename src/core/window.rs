//! # List Windowing
//!
//! Picks the slice of a list that fits on screen. The window is centred on
//! the cursor and slides to stay full near either end of the list instead of
//! shrinking.
//!
//! Nothing here is stored. Renderers call [`window`] on every frame with the
//! current cursor and list length, so the viewport can never drift out of
//! sync with the cursor.

/// Returns the half-open range `(start, end)` of items to display.
///
/// - `total < size`: the whole list, `(0, total)`.
/// - otherwise exactly `size` items with `start <= cursor < end`.
///
/// A cursor past the end is treated as pointing at the last item.
pub fn window(cursor: usize, total: usize, size: usize) -> (usize, usize) {
    if size == 0 || total == 0 {
        return (0, 0);
    }
    if total < size {
        return (0, total);
    }
    let cursor = cursor.min(total - 1);
    let start = cursor.saturating_sub(size / 2).min(total - size);
    (start, start + size)
}
