//! Selection index arithmetic with wraparound
//!
//! All functions take the current index and the length of the filtered
//! sequence, and always return an index that is valid for that length (or 0
//! when the sequence is empty).

/// Clamp `index` into `0..len`, yielding 0 for an empty sequence
pub fn clamp(index: usize, len: usize) -> usize {
    if index >= len { 0 } else { index }
}

/// Move the highlight up one row, wrapping from the first row to the last
pub fn move_up(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    match clamp(index, len) {
        0 => len - 1,
        i => i - 1,
    }
}

/// Move the highlight down one row, wrapping from the last row to the first
pub fn move_down(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let i = clamp(index, len);
    if i >= len - 1 { 0 } else { i + 1 }
}

/// Absolute selection from a pointer hover; out-of-range rows leave `index` as is
pub fn hover(index: usize, row: usize, len: usize) -> usize {
    if row < len { row } else { index }
}
