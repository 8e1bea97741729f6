//! Fire-and-forget sound cues.
//!
//! The terminal bell stands in for wing and hit samples. Cues are
//! emitted as events by the game core and played here by the main loop; the
//! core never touches I/O itself.

use std::io::{self, Write};

/// The two audio cues the game produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Flap,
    Hit,
}

/// Plays cues through the terminal bell. Disabled speakers swallow cues.
pub struct Speaker {
    enabled: bool,
}

impl Speaker {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Best-effort: a failed write is ignored, audio is never fatal.
    pub fn play(&mut self, _cue: SoundCue) {
        if !self.enabled {
            return;
        }
        let mut stdout = io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }
}
