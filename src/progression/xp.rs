//! Experience and leveling
//!
//! Quadratic level curve and the progress metrics shown by the XP bar.
//! Level `L` starts at `(L - 1)^2 * 100` total XP and ends where `L + 1`
//! starts, at `L^2 * 100`.

use serde::{Deserialize, Serialize};

/// XP multiplier of the level curve
pub const XP_CURVE_BASE: f64 = 100.0;

/// Total XP needed to reach a level from zero
pub fn xp_for_level(level: i32) -> f64 {
    let steps = level as f64 - 1.0;
    steps * steps * XP_CURVE_BASE
}

/// Total XP needed to reach the level after `level`
pub fn xp_for_next_level(level: i32) -> f64 {
    let steps = level as f64;
    steps * steps * XP_CURVE_BASE
}

/// XP span of a single level, `(2L - 1) * 100`
pub fn xp_needed_for_level(level: i32) -> f64 {
    xp_for_next_level(level) - xp_for_level(level)
}

/// Highest level whose floor is at or below `total_xp`
///
/// Anything below the level 2 floor (negative and NaN included) is level 1.
pub fn level_for_xp(total_xp: f64) -> i32 {
    if total_xp.is_nan() || total_xp < xp_for_level(2) {
        return 1;
    }

    // The cast saturates for huge totals
    let mut level = ((total_xp / XP_CURVE_BASE).sqrt().floor() as i32).saturating_add(1);
    // sqrt can land one off near exact thresholds
    while level < i32::MAX && xp_for_level(level + 1) <= total_xp {
        level += 1;
    }
    while level > 1 && xp_for_level(level) > total_xp {
        level -= 1;
    }
    level
}

/// Display-ready progress metrics for one `(xp, level)` pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressResult {
    pub xp_for_current_level: f64,
    pub xp_for_next_level: f64,
    pub xp_in_current_level: f64,
    pub xp_needed_for_next_level: f64,
    /// Upper-clamped to 100, negative when XP sits below the level floor
    pub progress_percentage: f64,
    pub xp_remaining: f64,
}

impl ProgressResult {
    /// Bar fill in `[0, 1]`
    pub fn fill_ratio(&self) -> f64 {
        if self.progress_percentage.is_nan() {
            return 0.0;
        }
        (self.progress_percentage / 100.0).clamp(0.0, 1.0)
    }

    /// True once the level's XP span is fully earned
    pub fn is_level_complete(&self) -> bool {
        self.xp_remaining <= 0.0
    }
}

/// Compute progress toward the next level.
///
/// Never fails. Level and XP consistency is the caller's job: XP below the
/// level floor gives a negative percentage and more remaining XP than the
/// level spans. Only the upper bound is clamped.
pub fn compute_progress(current_xp: f64, current_level: i32) -> ProgressResult {
    let xp_for_current_level = xp_for_level(current_level);
    let xp_for_next_level = xp_for_next_level(current_level);
    let xp_in_current_level = current_xp - xp_for_current_level;
    let xp_needed_for_next_level = xp_for_next_level - xp_for_current_level;
    let progress_percentage = (xp_in_current_level / xp_needed_for_next_level * 100.0).min(100.0);

    ProgressResult {
        xp_for_current_level,
        xp_for_next_level,
        xp_in_current_level,
        xp_needed_for_next_level,
        progress_percentage,
        xp_remaining: xp_needed_for_next_level - xp_in_current_level,
    }
}
