//! flap - Terminal Flappy Bird
//!
//! Exposes the game core and its collaborators for integration tests.
//! The ui scenes stay private to the binary; they are tightly coupled to
//! the terminal.

pub mod audio;
pub mod build_info;
pub mod config;
pub mod constants;
pub mod game;
pub mod input;

pub use config::GameConfig;
pub use game::{GameSession, TickEvent};
