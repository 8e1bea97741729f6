//! Obstacle generation and off-screen recycling.
//!
//! A pipe pair is two halves sharing an x, with the facing edges exactly
//! `gap` pixels apart. Recycling keeps the live counts fixed: two ground
//! segments and two pipe pairs at all times.

use crate::config::GameConfig;
use crate::game::entity::{Ground, Pipe};
use rand::Rng;

/// Generate a pipe pair at `xpos`. The lower pipe's visible size is drawn
/// uniformly, clamped so the upper pipe's height `screen_height - size -
/// gap` can never go negative; config validation guarantees the clamped
/// range is non-empty for every reachable gap.
pub fn pipe_pair<R: Rng>(
    config: &GameConfig,
    rng: &mut R,
    xpos: f64,
    gap: i32,
) -> (Pipe, Pipe) {
    let max_size = config
        .max_pipe_size
        .min(config.screen_height - gap - config.min_pipe_size)
        .max(config.min_pipe_size);
    let size = rng.gen_range(config.min_pipe_size..=max_size);
    let lower = Pipe::lower(config, xpos, size);
    let upper = Pipe::upper(config, xpos, config.screen_height - size - gap);
    (lower, upper)
}

/// Recycle the older ground segment once it has fully scrolled off: the
/// replacement is appended flush against the survivor's right edge so the
/// strip stays seamless. Returns whether a segment was recycled.
pub fn recycle_ground(grounds: &mut [Ground; 2], config: &GameConfig) -> bool {
    if !grounds[0].is_off_screen() {
        return false;
    }
    let new_x = grounds[1].x + f64::from(grounds[1].width);
    grounds.swap(0, 1);
    grounds[1] = Ground::new(config, new_x);
    true
}

/// Recycle the older pipe pair once both halves are fully off screen. The
/// replacement spawns one spacing beyond the surviving (rightmost) pair
/// using `gap` — the gap of the *current* difficulty level, not the level
/// at original spawn time. Returns whether a pair was recycled.
pub fn recycle_pipes<R: Rng>(
    pipes: &mut [Pipe; 4],
    config: &GameConfig,
    rng: &mut R,
    gap: i32,
) -> bool {
    if !pipes[0].is_off_screen() {
        return false;
    }
    let rightmost_x = pipes[2].x;
    let (lower, upper) = pipe_pair(config, rng, rightmost_x + config.pipe_spacing, gap);
    pipes.rotate_left(2);
    pipes[2] = lower;
    pipes[3] = upper;
    true
}
