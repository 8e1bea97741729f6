//! Score-driven difficulty curve.
//!
//! Everything here is a pure function of the current score; the session
//! stores only `last_applied_level` so the escalation side effects fire
//! once per threshold crossing, not every tick the condition holds.

use crate::config::GameConfig;

/// Discrete difficulty tier: floor(score / threshold).
pub fn level(score: f64, threshold: f64) -> u32 {
    (score / threshold).floor() as u32
}

/// Scroll speed at a tier. Monotonically non-decreasing in level.
pub fn speed_for_level(config: &GameConfig, level: u32) -> f64 {
    config.base_speed + f64::from(level) * config.speed_increment
}

/// Pipe gap at a tier. Non-increasing in level, bounded below by min_gap.
pub fn gap_for_level(config: &GameConfig, level: u32) -> i32 {
    let gap = i64::from(config.initial_gap) - i64::from(level) * i64::from(config.gap_decrement);
    gap.max(i64::from(config.min_gap)) as i32
}

/// True exactly when the score has crossed into a tier the session has not
/// applied yet.
pub fn should_escalate(score: f64, threshold: f64, last_applied_level: u32) -> bool {
    level(score, threshold) > last_applied_level
}
