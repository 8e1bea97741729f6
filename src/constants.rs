//! World tuning constants.
//!
//! These are the defaults behind `GameConfig`; positions and sizes are in
//! world pixels (the UI rescales to terminal cells at draw time).

// Timing. Physics run at a fixed 15 Hz; the start and game-over screens
// poll input on their own faster cadence while the world is frozen.
pub const PLAY_TICK_MS: u64 = 66;
pub const MENU_POLL_MS: u64 = 50;

// World geometry
pub const SCREEN_WIDTH: i32 = 400;
pub const SCREEN_HEIGHT: i32 = 600;
pub const GROUND_HEIGHT: i32 = 100;
pub const PIPE_WIDTH: i32 = 80;
pub const PIPE_HEIGHT: i32 = 500;

// Bird kinematics (world pixels per tick). A fresh run uses GRAVITY;
// every replayed run uses SLOW_GRAVITY.
pub const GRAVITY: f64 = 2.5;
pub const SLOW_GRAVITY: f64 = 1.5;
pub const FLAP_IMPULSE: f64 = 20.0;

// Scrolling and obstacle layout
pub const BASE_SPEED: f64 = 15.0;
pub const FIRST_PIPE_X: f64 = 800.0;
pub const PIPE_SPACING: f64 = SCREEN_WIDTH as f64;
pub const MIN_PIPE_SIZE: i32 = 100;
pub const MAX_PIPE_SIZE: i32 = 300;

// Difficulty curve: level = floor(score / SCORE_THRESHOLD), then
// speed = BASE_SPEED + level * SPEED_INCREMENT and
// gap = max(MIN_GAP, INITIAL_GAP - level * GAP_DECREMENT).
pub const INITIAL_GAP: i32 = 150;
pub const MIN_GAP: i32 = 90;
pub const GAP_DECREMENT: i32 = 10;
pub const SCORE_THRESHOLD: f64 = 5.0;
pub const SPEED_INCREMENT: f64 = 3.0;

// How many physics ticks the level-up notice freezes the world for.
pub const LEVEL_NOTICE_TICKS: u32 = 12;
