//! The three moving entities: bird, pipe half, ground segment.
//!
//! `tick()` is pure state advance; sounds and side effects belong to the
//! session. Positions are world pixels, y grows downward.

use crate::config::GameConfig;
use crate::game::collision::{BIRD_HEIGHT, BIRD_WIDTH};

/// The player. X never changes; vertical motion is `speed += gravity;
/// y += speed` each tick, with `bump()` as the instantaneous upward impulse.
#[derive(Debug, Clone)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    /// Vertical speed, positive = downward.
    pub speed: f64,
    /// Flap animation index, cycles 0..3. Cosmetic only.
    pub frame: usize,
    gravity: f64,
    impulse: f64,
}

impl Bird {
    /// `slow_gravity` selects the gentler constant used on the replay path.
    pub fn new(config: &GameConfig, slow_gravity: bool) -> Self {
        Self {
            x: config.screen_width as f64 / 6.0,
            y: config.screen_height as f64 / 2.0,
            speed: config.flap_impulse,
            frame: 0,
            gravity: if slow_gravity {
                config.slow_gravity
            } else {
                config.gravity
            },
            impulse: config.flap_impulse,
        }
    }

    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % 3;
        self.speed += self.gravity;
        self.y += self.speed;
    }

    pub fn bump(&mut self) {
        self.speed = -self.impulse;
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Leading edge (the bird moves right relative to the world).
    pub fn left(&self) -> i32 {
        self.x.round() as i32
    }

    pub fn top(&self) -> i32 {
        self.y.round() as i32
    }

    pub fn width(&self) -> i32 {
        BIRD_WIDTH
    }

    pub fn height(&self) -> i32 {
        BIRD_HEIGHT
    }
}

/// One half of a pipe pair. The sprite is always `pipe_height` tall and
/// positioned so that exactly `size` pixels poke into the screen; the
/// inverted (upper) half hangs down from negative y.
#[derive(Debug, Clone)]
pub struct Pipe {
    pub x: f64,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub inverted: bool,
    /// Set once, when the bird's leading edge first clears this half.
    pub passed: bool,
}

impl Pipe {
    /// Upright lower pipe with `size` visible pixels above the screen bottom.
    pub fn lower(config: &GameConfig, xpos: f64, size: i32) -> Self {
        Self {
            x: xpos,
            y: config.screen_height - size,
            width: config.pipe_width,
            height: config.pipe_height,
            inverted: false,
            passed: false,
        }
    }

    /// Inverted upper pipe with `size` visible pixels below the screen top.
    pub fn upper(config: &GameConfig, xpos: f64, size: i32) -> Self {
        Self {
            x: xpos,
            y: size - config.pipe_height,
            width: config.pipe_width,
            height: config.pipe_height,
            inverted: true,
            passed: false,
        }
    }

    pub fn tick(&mut self, speed: f64) {
        self.x -= speed;
    }

    pub fn left(&self) -> i32 {
        self.x.round() as i32
    }

    /// Trailing edge (the screen-right side of the sprite).
    pub fn right(&self) -> i32 {
        self.left() + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_off_screen(&self) -> bool {
        self.x < -(self.width as f64)
    }
}

/// One tile of the scrolling ground strip. Two are live at all times.
#[derive(Debug, Clone)]
pub struct Ground {
    pub x: f64,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Ground {
    pub fn new(config: &GameConfig, xpos: f64) -> Self {
        Self {
            x: xpos,
            y: config.screen_height - config.ground_height,
            width: 2 * config.screen_width,
            height: config.ground_height,
        }
    }

    pub fn tick(&mut self, speed: f64) {
        self.x -= speed;
    }

    pub fn left(&self) -> i32 {
        self.x.round() as i32
    }

    pub fn right(&self) -> i32 {
        self.left() + self.width
    }

    pub fn is_off_screen(&self) -> bool {
        self.x < -(self.width as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bird_gravity_integration() {
        let config = GameConfig::default();
        let mut bird = Bird::new(&config, false);
        bird.speed = 0.0;
        let y0 = bird.y;
        bird.tick();
        assert!((bird.speed - config.gravity).abs() < f64::EPSILON);
        assert!((bird.y - (y0 + config.gravity)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bird_x_never_changes() {
        let config = GameConfig::default();
        let mut bird = Bird::new(&config, false);
        let x0 = bird.x;
        for _ in 0..100 {
            bird.tick();
            bird.bump();
        }
        assert!((bird.x - x0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bump_is_upward_impulse() {
        let config = GameConfig::default();
        let mut bird = Bird::new(&config, false);
        bird.bump();
        assert!((bird.speed - (-config.flap_impulse)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_replay_bird_uses_slow_gravity() {
        let config = GameConfig::default();
        assert!((Bird::new(&config, true).gravity() - config.slow_gravity).abs() < f64::EPSILON);
        assert!((Bird::new(&config, false).gravity() - config.gravity).abs() < f64::EPSILON);
    }

    #[test]
    fn test_animation_frame_cycles() {
        let config = GameConfig::default();
        let mut bird = Bird::new(&config, false);
        let frames: Vec<usize> = (0..6)
            .map(|_| {
                bird.tick();
                bird.frame
            })
            .collect();
        assert_eq!(frames, vec![1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_pipe_pair_geometry() {
        let config = GameConfig::default();
        let lower = Pipe::lower(&config, 800.0, 200);
        let upper = Pipe::upper(&config, 800.0, 250);
        // Lower pipe pokes 200px up from the bottom.
        assert_eq!(lower.top(), config.screen_height - 200);
        assert_eq!(lower.bottom(), config.screen_height - 200 + config.pipe_height);
        // Upper pipe pokes 250px down from the top.
        assert_eq!(upper.bottom(), 250);
        assert!(upper.top() < 0);
    }

    #[test]
    fn test_scrolling_entities_move_left() {
        let config = GameConfig::default();
        let mut pipe = Pipe::lower(&config, 800.0, 200);
        let mut ground = Ground::new(&config, 0.0);
        pipe.tick(15.0);
        ground.tick(15.0);
        assert!((pipe.x - 785.0).abs() < f64::EPSILON);
        assert!((ground.x - (-15.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_off_screen_threshold() {
        let config = GameConfig::default();
        let mut pipe = Pipe::lower(&config, 0.0, 200);
        pipe.x = -(config.pipe_width as f64);
        assert!(!pipe.is_off_screen());
        pipe.x -= 1.0;
        assert!(pipe.is_off_screen());
    }
}
