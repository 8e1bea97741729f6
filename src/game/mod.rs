//! Game core: entities, obstacle generation, difficulty, collision, and
//! the per-tick session state machine. Pure simulation — no terminal I/O.

pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod session;
pub mod spawn;

pub use session::{GameSession, LevelNotice, TickEvent};
