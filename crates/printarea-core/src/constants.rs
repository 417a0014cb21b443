//! Tuning constants shared across crates.

/// Smallest scale factor a Scale gesture may apply along either axis.
pub const MIN_SCALE_RATIO: f64 = 0.01;

/// Screen-space distance (pixels) between the top edge and the rotate handle.
pub const ROTATE_HANDLE_OFFSET_PX: f64 = 25.0;

/// Pixel radius within which a pointer hits a handle.
pub const HIT_TOLERANCE_PX: f64 = 8.0;

/// Relative tolerance (fraction of the reference diagonal) used when matching
/// corner distances during canonicalization.
pub const CORNER_MATCH_TOLERANCE: f64 = 1e-7;
