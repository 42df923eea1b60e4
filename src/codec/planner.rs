//! Dimension planner — fit a grid into a character budget
//!
//! Advisory only: callers decide whether to apply the result.

use crate::render::DisplayMode;

/// Largest (rows, cols) not exceeding the request that fits `max_length`
///
/// Half mode packs two grid rows into each output row, so it budgets
/// against `max_length * 2` and keeps the column count where it can.
pub fn calculate_safe_dimensions(
    rows: usize,
    cols: usize,
    max_length: usize,
    mode: DisplayMode,
) -> (usize, usize) {
    if rows.checked_mul(cols).map_or(false, |n| n <= max_length) {
        return (rows, cols);
    }

    match mode {
        DisplayMode::Half => {
            let effective_max = max_length.saturating_mul(2);
            if cols <= effective_max {
                (rows.min(effective_max / cols), cols)
            } else {
                (1, effective_max)
            }
        }
        DisplayMode::Full => {
            if rows <= 1 {
                (1, cols.min(max_length))
            } else {
                let safe_rows = rows.min((max_length / cols).max(1));
                (safe_rows, cols.min(max_length / safe_rows))
            }
        }
    }
}

/// Characters the flat bio needs for a `rows` x `cols` board in `mode`
///
/// Half mode emits one output row per pair of grid rows. Saturates
/// instead of overflowing.
pub fn encoded_length(rows: usize, cols: usize, mode: DisplayMode) -> usize {
    match mode {
        DisplayMode::Full => rows.saturating_mul(cols),
        DisplayMode::Half => rows.div_ceil(2).saturating_mul(cols),
    }
}
