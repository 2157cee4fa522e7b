//! Progress → item index mapping.
//!
//! Each item owns an equal-width band of the 0–100 progress range. The
//! divisor is slightly above 100 so that a saturated progress lands on the
//! last item instead of one past it.

const BAND_DIVISOR: f64 = 100.0001;

/// Returns the index highlighted at `progress` over `item_count` items, or
/// `None` for an empty list.
pub fn select_index(progress: f64, item_count: usize) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    let raw = ((progress / BAND_DIVISOR) * item_count as f64).floor();
    // Negative and NaN floats saturate to 0 in the cast.
    let index = raw as usize;
    Some(index.min(item_count - 1))
}
