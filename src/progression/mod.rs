//! Progression systems

pub mod xp;
pub mod experience;

pub use xp::{
    ProgressResult, XP_CURVE_BASE,
    compute_progress, level_for_xp, xp_for_level, xp_for_next_level, xp_needed_for_level,
};
pub use experience::Experience;
