//! Pixel-mask collision.
//!
//! Each entity kind has a precomputed opacity bitmap; the detector is a
//! pure query that intersects bitmaps at the entities' current offsets.
//! Masks are built once per session (the source silhouettes never change)
//! and never touched during a tick.

use crate::config::GameConfig;
use crate::game::entity::{Bird, Ground, Pipe};

/// Bird silhouette, 17x12 at base resolution, scaled 2x to the 34x24
/// world-pixel sprite. Non-space = opaque. The rounded outline is what
/// makes mask collision differ from the bounding box: corner grazes miss.
const BIRD_PATTERN: [&str; 12] = [
    "      #######    ",
    "    ###########  ",
    "   ############# ",
    "  ############## ",
    " ################",
    "#################",
    "#################",
    " ################",
    " ############### ",
    "  #############  ",
    "   ###########   ",
    "     #######     ",
];

const BIRD_SCALE: i32 = 2;
pub const BIRD_WIDTH: i32 = 17 * BIRD_SCALE;
pub const BIRD_HEIGHT: i32 = 12 * BIRD_SCALE;

/// Row-major opacity bitmap.
#[derive(Debug, Clone)]
pub struct Mask {
    width: i32,
    height: i32,
    bits: Vec<bool>,
}

impl Mask {
    /// Fully opaque rectangle (pipes and ground have square silhouettes).
    pub fn solid(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            bits: vec![true; (width * height) as usize],
        }
    }

    /// Build from an ASCII pattern, magnified `scale`x in both axes.
    pub fn from_pattern(rows: &[&str], scale: i32) -> Self {
        let base_height = rows.len() as i32;
        let base_width = rows
            .iter()
            .map(|r| r.chars().count() as i32)
            .max()
            .unwrap_or(0);
        let width = base_width * scale;
        let height = base_height * scale;
        let mut bits = vec![false; (width * height) as usize];
        for (row_index, row) in rows.iter().enumerate() {
            for (col_index, ch) in row.chars().enumerate() {
                if ch == ' ' {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        let x = col_index as i32 * scale + dx;
                        let y = row_index as i32 * scale + dy;
                        bits[(y * width + x) as usize] = true;
                    }
                }
            }
        }
        Self {
            width,
            height,
            bits,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return false;
        }
        self.bits[(y * self.width + x) as usize]
    }

    /// True if any opaque pixel of `self` coincides with an opaque pixel of
    /// `other` placed at `(offset_x, offset_y)` relative to `self`'s origin.
    pub fn overlaps(&self, other: &Mask, offset_x: i32, offset_y: i32) -> bool {
        let x_start = offset_x.max(0);
        let x_end = (offset_x + other.width).min(self.width);
        let y_start = offset_y.max(0);
        let y_end = (offset_y + other.height).min(self.height);
        for y in y_start..y_end {
            for x in x_start..x_end {
                if self.get(x, y) && other.get(x - offset_x, y - offset_y) {
                    return true;
                }
            }
        }
        false
    }
}

/// The per-kind masks a session collides with. Built once at session
/// construction from the config geometry.
#[derive(Debug, Clone)]
pub struct MaskSet {
    pub bird: Mask,
    pub pipe: Mask,
    pub ground: Mask,
}

impl MaskSet {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            bird: Mask::from_pattern(&BIRD_PATTERN, BIRD_SCALE),
            pipe: Mask::solid(config.pipe_width, config.pipe_height),
            ground: Mask::solid(2 * config.screen_width, config.ground_height),
        }
    }
}

/// Pure query: does the bird's silhouette overlap any live obstacle?
/// Side effects (hit cue, deactivating the session) are the caller's.
pub fn bird_hits(bird: &Bird, pipes: &[Pipe], grounds: &[Ground], masks: &MaskSet) -> bool {
    let bx = bird.left();
    let by = bird.top();
    for pipe in pipes {
        if masks
            .bird
            .overlaps(&masks.pipe, pipe.left() - bx, pipe.top() - by)
        {
            return true;
        }
    }
    for ground in grounds {
        if masks
            .bird
            .overlaps(&masks.ground, ground.left() - bx, ground.y - by)
        {
            return true;
        }
    }
    false
}
