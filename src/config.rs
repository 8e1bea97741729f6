//! Game configuration: tuning values loaded from `~/.flap/config.json`.
//!
//! A missing file means defaults; a file that fails to parse or validate is
//! fatal at startup, before the terminal enters raw mode. None of these
//! values change the algorithms, only the difficulty curve and feel.

use crate::constants::*;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    // World geometry (pixels)
    pub screen_width: i32,
    pub screen_height: i32,
    pub ground_height: i32,
    pub pipe_width: i32,
    pub pipe_height: i32,

    // Bird kinematics (pixels per tick)
    pub gravity: f64,
    pub slow_gravity: f64,
    pub flap_impulse: f64,

    // Scrolling and obstacle layout
    pub base_speed: f64,
    pub first_pipe_x: f64,
    pub pipe_spacing: f64,
    pub min_pipe_size: i32,
    pub max_pipe_size: i32,

    // Difficulty curve
    pub initial_gap: i32,
    pub min_gap: i32,
    pub gap_decrement: i32,
    pub score_threshold: f64,
    pub speed_increment: f64,

    // Terminal bell on flap/hit
    pub sound: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_height: GROUND_HEIGHT,
            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            gravity: GRAVITY,
            slow_gravity: SLOW_GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            base_speed: BASE_SPEED,
            first_pipe_x: FIRST_PIPE_X,
            pipe_spacing: PIPE_SPACING,
            min_pipe_size: MIN_PIPE_SIZE,
            max_pipe_size: MAX_PIPE_SIZE,
            initial_gap: INITIAL_GAP,
            min_gap: MIN_GAP,
            gap_decrement: GAP_DECREMENT,
            score_threshold: SCORE_THRESHOLD,
            speed_increment: SPEED_INCREMENT,
            sound: true,
        }
    }
}

impl GameConfig {
    /// Load from an explicit path, or from `~/.flap/config.json` when none
    /// is given. A missing default-path file falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match default_config_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            if required {
                return Err(ConfigError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("{} not found", path.display()),
                )));
            }
            return Ok(Self::default());
        }

        let json = fs::read_to_string(&path)?;
        let config: GameConfig = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the generator and collision masks cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |msg: String| Err(ConfigError::Invalid(msg));

        if self.screen_width <= 0 || self.screen_height <= 0 {
            return fail("screen dimensions must be positive".into());
        }
        if self.ground_height <= 0 || self.ground_height >= self.screen_height {
            return fail("ground_height must be between 0 and screen_height".into());
        }
        if self.pipe_width <= 0 || self.pipe_height <= 0 {
            return fail("pipe dimensions must be positive".into());
        }
        if self.min_pipe_size <= 0 || self.max_pipe_size < self.min_pipe_size {
            return fail("pipe size range must be positive and ordered".into());
        }
        if self.gravity <= 0.0 || self.slow_gravity <= 0.0 {
            return fail("gravity must be positive".into());
        }
        if self.flap_impulse <= 0.0 {
            return fail("flap_impulse must be positive".into());
        }
        if self.base_speed <= 0.0 || self.speed_increment < 0.0 {
            return fail("base_speed must be positive and speed_increment non-negative".into());
        }
        if self.pipe_spacing <= self.pipe_width as f64 {
            return fail("pipe_spacing must exceed pipe_width".into());
        }
        if self.score_threshold <= 0.0 {
            return fail("score_threshold must be positive".into());
        }
        if self.min_gap <= 0 || self.gap_decrement < 0 || self.initial_gap < self.min_gap {
            return fail("gap bounds must satisfy 0 < min_gap <= initial_gap".into());
        }
        // The generator clamps the lower pipe into
        // [min_pipe_size, screen_height - gap - min_pipe_size]; that interval
        // must be non-empty for every reachable gap, the largest being
        // initial_gap.
        if self.initial_gap > self.screen_height - 2 * self.min_pipe_size {
            return fail(format!(
                "initial_gap {} too large for screen_height {} (max {})",
                self.initial_gap,
                self.screen_height,
                self.screen_height - 2 * self.min_pipe_size
            ));
        }
        // The pipe sprite must be tall enough to cover the largest visible size.
        if self.pipe_height < self.screen_height - self.min_gap - self.min_pipe_size {
            return fail("pipe_height too small for the gap bounds".into());
        }
        Ok(())
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".flap").join("config.json"))
}
