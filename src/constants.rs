//! Engine-wide constants for the scan and filter pipeline.
//!
//! Every scan shares the same result cap and minimum-result floor; the
//! diversity selection ratios below control how aggressively a scan prefers
//! symbols that earlier scans in the session have not already surfaced.

/// Maximum number of records any scan returns
pub const RESULT_CAP: usize = 50;

/// Minimum number of records a scan page should show when the universe allows it
pub const MIN_RESULTS: usize = 4;

/// Diverse-pool size at which diversity selection skips the fill logic entirely
///
/// If at least `min(DIVERSITY_POOL_MIN, max_results)` unused symbols matched,
/// the selection is taken from unused symbols alone.
pub const DIVERSITY_POOL_MIN: usize = 20;

/// Share of the result budget reserved for unused symbols in the mixed fill path
pub const DIVERSE_SHARE: f64 = 0.7;

/// `close >= NEAR_EXTREME_RATIO * 52w_high` counts as "near the 52-week high"
pub const NEAR_EXTREME_RATIO: f64 = 0.95;

/// Tighter ratio used by the all-time-high scan
pub const ALL_TIME_HIGH_RATIO: f64 = 0.98;

/// Market-cap bucket boundaries, in crores (same unit as `market_cap`)
pub const LARGE_CAP_FLOOR: f64 = 20_000.0;
pub const MID_CAP_FLOOR: f64 = 5_000.0;
