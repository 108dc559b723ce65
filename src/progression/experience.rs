//! Cumulative experience tracker

use serde::{Deserialize, Serialize};

use super::xp::{compute_progress, level_for_xp, ProgressResult};

/// Experience and level
///
/// `total_xp` only grows; `level` is always the one the curve assigns to it.
/// Deserializing re-derives the level from the stored total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredExperience")]
pub struct Experience {
    total_xp: f64,
    level: i32,
}

/// Serialized form; a stored `level` is ignored
#[derive(Deserialize)]
struct StoredExperience {
    total_xp: f64,
}

impl From<StoredExperience> for Experience {
    fn from(stored: StoredExperience) -> Self {
        Experience::from_total(stored.total_xp)
    }
}

impl Default for Experience {
    fn default() -> Self {
        Self::new()
    }
}

impl Experience {
    pub fn new() -> Self {
        Self {
            total_xp: 0.0,
            level: 1,
        }
    }

    /// Build from a stored XP total, deriving the level
    pub fn from_total(total_xp: f64) -> Self {
        let total_xp = if total_xp.is_finite() { total_xp.max(0.0) } else { 0.0 };
        Self {
            total_xp,
            level: level_for_xp(total_xp),
        }
    }

    pub fn total_xp(&self) -> f64 {
        self.total_xp
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    /// Add XP and return how many levels were gained
    pub fn add_xp(&mut self, amount: f64) -> u32 {
        if !amount.is_finite() || amount <= 0.0 {
            return 0;
        }

        self.total_xp += amount;
        let new_level = level_for_xp(self.total_xp);
        let gained = (new_level - self.level).max(0) as u32;
        if gained > 0 {
            log::debug!("Level up: {} -> {} ({} XP)", self.level, new_level, self.total_xp);
            self.level = new_level;
        }
        gained
    }

    /// Current progress metrics for the XP bar
    pub fn progress(&self) -> ProgressResult {
        compute_progress(self.total_xp, self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_experience() {
        let xp = Experience::new();
        assert_eq!(xp.level(), 1);
        assert_eq!(xp.total_xp(), 0.0);
        assert_eq!(xp.progress().progress_percentage, 0.0);
    }

    #[test]
    fn test_add_xp_levels_up() {
        let mut xp = Experience::new();
        assert_eq!(xp.add_xp(60.0), 0);
        assert_eq!(xp.add_xp(40.0), 1);
        assert_eq!(xp.level(), 2);
        assert_eq!(xp.progress().progress_percentage, 0.0);
    }

    #[test]
    fn test_multiple_levels_at_once() {
        let mut xp = Experience::new();
        assert_eq!(xp.add_xp(950.0), 3);
        assert_eq!(xp.level(), 4);
        // 50 of the 700 XP span of level 4
        let p = xp.progress();
        assert_eq!(p.xp_in_current_level, 50.0);
        assert_eq!(p.xp_needed_for_next_level, 700.0);
    }

    #[test]
    fn test_negative_and_invalid_amounts_ignored() {
        let mut xp = Experience::from_total(150.0);
        assert_eq!(xp.add_xp(-100.0), 0);
        assert_eq!(xp.add_xp(f64::NAN), 0);
        assert_eq!(xp.add_xp(f64::INFINITY), 0);
        assert_eq!(xp.total_xp(), 150.0);
        assert_eq!(xp.level(), 2);
    }

    #[test]
    fn test_from_total() {
        assert_eq!(Experience::from_total(400.0).level(), 3);
        assert_eq!(Experience::from_total(-5.0), Experience::new());
    }

    #[test]
    fn test_progress_stays_in_range() {
        let mut xp = Experience::new();
        for _ in 0..200 {
            xp.add_xp(37.0);
            let pct = xp.progress().progress_percentage;
            assert!((0.0..100.0).contains(&pct), "out of range: {}", pct);
        }
    }

    #[test]
    fn test_huge_xp_saturates_level() {
        let mut xp = Experience::new();
        assert_eq!(xp.add_xp(1e21), (i32::MAX - 1) as u32);
        assert_eq!(xp.level(), i32::MAX);
        assert_eq!(Experience::from_total(1e21).level(), i32::MAX);
    }

    #[test]
    fn test_deserialize_rederives_level() {
        let xp: Experience = serde_json::from_str(r#"{"total_xp": 400.0, "level": 1}"#).unwrap();
        assert_eq!(xp.level(), 3);

        let xp: Experience = serde_json::from_str(r#"{"total_xp": -5.0, "level": 0}"#).unwrap();
        assert_eq!(xp, Experience::new());
    }

    #[test]
    fn test_serde_round_trip() {
        let xp = Experience::from_total(1234.0);
        let json = serde_json::to_string(&xp).unwrap();
        let back: Experience = serde_json::from_str(&json).unwrap();
        assert_eq!(back, xp);
    }
}
