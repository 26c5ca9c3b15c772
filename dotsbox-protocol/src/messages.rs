//! Outgoing terminal text
//!
//! Every message renders itself through `core::fmt::Display`, so it can be
//! written straight to any `fmt::Write` sink without a buffer.

use core::fmt;

/// Line terminator sent to the terminal
pub const NEWLINE: &str = "\r\n";

/// Messages sent from the game to the terminal
///
/// Players are numbered from 1 here, matching what is shown to humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TerminalMessage {
    /// New game announcement
    Banner { width: u8, height: u8 },
    /// Ask a player for a move
    Prompt { player: u8 },
    /// Rejected move (malformed, off the board, or already drawn)
    InvalidMove,
    /// A move closed one or two boxes
    BoxesCompleted { player: u8, count: u8 },
    /// Board is full
    GameOver,
    /// Final box counts
    FinalScore { first: u8, second: u8 },
    /// One player has more boxes
    Winner { player: u8 },
    /// Both players have the same number of boxes
    Tie,
    /// Game left before it finished
    Abandoned,
    /// Terminal speed changed
    BaudChanged { bps: u32 },
    /// Rub out the last echoed character
    Erase,
}

impl fmt::Display for TerminalMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TerminalMessage::Banner { width, height } => write!(
                f,
                "{NEWLINE}=== Dots and Boxes ({width}x{height}) ==={NEWLINE}\
                 Moves are row, column, direction (U/D/L/R), e.g. 00R{NEWLINE}"
            ),
            TerminalMessage::Prompt { player } => {
                write!(f, "Player {player}, enter move: ")
            }
            TerminalMessage::InvalidMove => write!(f, "Invalid move, try again.{NEWLINE}"),
            TerminalMessage::BoxesCompleted { player, count } => {
                let plural = if count == 1 { "" } else { "es" };
                write!(
                    f,
                    "Player {player} completed {count} box{plural} and moves again.{NEWLINE}"
                )
            }
            TerminalMessage::GameOver => write!(f, "Game Over!{NEWLINE}"),
            TerminalMessage::FinalScore { first, second } => {
                write!(f, "Player 1: {first}  Player 2: {second}{NEWLINE}")
            }
            TerminalMessage::Winner { player } => write!(f, "Player {player} wins!{NEWLINE}"),
            TerminalMessage::Tie => write!(f, "It's a tie!{NEWLINE}"),
            TerminalMessage::Abandoned => write!(f, "{NEWLINE}Game abandoned.{NEWLINE}"),
            TerminalMessage::BaudChanged { bps } => {
                write!(f, "{NEWLINE}Terminal now at {bps} baud.{NEWLINE}")
            }
            TerminalMessage::Erase => f.write_str("\x08 \x08"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn test_prompt() {
        let text = TerminalMessage::Prompt { player: 2 }.to_string();
        assert_eq!(text, "Player 2, enter move: ");
    }

    #[test]
    fn test_boxes_completed_plural() {
        let one = TerminalMessage::BoxesCompleted { player: 1, count: 1 }.to_string();
        let two = TerminalMessage::BoxesCompleted { player: 1, count: 2 }.to_string();
        assert!(one.contains("1 box and"));
        assert!(two.contains("2 boxes and"));
    }

    #[test]
    fn test_lines_end_with_crlf() {
        for msg in [
            TerminalMessage::InvalidMove,
            TerminalMessage::GameOver,
            TerminalMessage::Tie,
            TerminalMessage::FinalScore { first: 3, second: 1 },
        ] {
            assert!(msg.to_string().ends_with(NEWLINE));
        }
    }
}
