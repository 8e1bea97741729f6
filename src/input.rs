//! Keyboard mapping for each screen.
//!
//! Every screen gets its own small input enum so the main loop stays a
//! plain match. Anything unrecognized maps to `Ignored` and is dropped,
//! never treated as an error.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input on the start screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartInput {
    Launch,
    Quit,
    Ignored,
}

/// Input during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayInput {
    Flap,
    Quit,
    Ignored,
}

/// Input on the game-over screen. Replay is also reachable by clicking
/// the button, which the main loop resolves against the button rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverInput {
    Replay,
    Quit,
    Ignored,
}

fn is_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

pub fn map_start_input(key: KeyEvent) -> StartInput {
    if is_quit(key) {
        return StartInput::Quit;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => StartInput::Launch,
        _ => StartInput::Ignored,
    }
}

pub fn map_play_input(key: KeyEvent) -> PlayInput {
    if is_quit(key) {
        return PlayInput::Quit;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => PlayInput::Flap,
        _ => PlayInput::Ignored,
    }
}

pub fn map_game_over_input(key: KeyEvent) -> GameOverInput {
    if is_quit(key) {
        return GameOverInput::Quit;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => GameOverInput::Replay,
        _ => GameOverInput::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_space_flaps_during_play() {
        assert_eq!(map_play_input(key(KeyCode::Char(' '))), PlayInput::Flap);
        assert_eq!(map_play_input(key(KeyCode::Up)), PlayInput::Flap);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        assert_eq!(map_play_input(key(KeyCode::Char('x'))), PlayInput::Ignored);
        assert_eq!(map_start_input(key(KeyCode::Down)), StartInput::Ignored);
        assert_eq!(
            map_game_over_input(key(KeyCode::Backspace)),
            GameOverInput::Ignored
        );
    }

    #[test]
    fn test_quit_works_on_every_screen() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            assert_eq!(map_start_input(key(code)), StartInput::Quit);
            assert_eq!(map_play_input(key(code)), PlayInput::Quit);
            assert_eq!(map_game_over_input(key(code)), GameOverInput::Quit);
        }
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_play_input(event), PlayInput::Quit);
    }

    #[test]
    fn test_plain_c_does_not_quit() {
        assert_eq!(map_play_input(key(KeyCode::Char('c'))), PlayInput::Ignored);
    }

    #[test]
    fn test_space_and_enter_replay() {
        assert_eq!(
            map_game_over_input(key(KeyCode::Char(' '))),
            GameOverInput::Replay
        );
        assert_eq!(
            map_game_over_input(key(KeyCode::Enter)),
            GameOverInput::Replay
        );
    }
}
