//! Raw key events to semantic commands
//!
//! The simulation never sees key codes, only the four commands below. The
//! caller feeds in key *press* events exclusively, which makes every command
//! edge-triggered: holding space does not queue repeated jumps.

use crossterm::event::KeyCode;

use crate::sim::GamePhase;

/// Semantic player commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Jump,
    Restart,
    Quit,
}

/// Map a pressed key to a command, given the current phase
///
/// The primary action key means Start on the title screen and Jump in play.
/// Keys with no meaning in the current phase map to nothing.
pub fn map_key(code: KeyCode, phase: GamePhase) -> Option<Command> {
    match code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => match phase {
            GamePhase::Title => Some(Command::Start),
            GamePhase::Running => Some(Command::Jump),
            GamePhase::GameOver => None,
        },
        KeyCode::Char('r') | KeyCode::Char('R') => {
            (phase == GamePhase::GameOver).then_some(Command::Restart)
        }
        _ => None,
    }
}
