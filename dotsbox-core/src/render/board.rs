//! Board as terminal text
//!
//! ```text
//!    0    1    2
//! 0  +----+    +
//!    | P1 |
//! 1  +----+    +
//!
//! 2  +    +    +
//! ```

use core::fmt::{self, Write};

use dotsbox_protocol::NEWLINE;
use heapless::String;

use crate::game::{BoxId, Grid, Segment};

/// Widest rendered line: margin plus five dots and four gaps
const LINE_CAP: usize = 32;

/// Displays a grid as text
pub struct BoardText<'a>(pub &'a Grid);

impl BoardText<'_> {
    fn emit(f: &mut fmt::Formatter<'_>, line: &str) -> fmt::Result {
        f.write_str(line.trim_end())?;
        f.write_str(NEWLINE)
    }
}

impl fmt::Display for BoardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.0;
        let rows = grid.size().rows() as u8;
        let cols = grid.size().cols() as u8;
        let mut line: String<LINE_CAP> = String::new();

        // Column indices line up with the dots
        line.push_str("   ").map_err(|_| fmt::Error)?;
        for c in 0..cols {
            if c > 0 {
                line.push_str("    ").map_err(|_| fmt::Error)?;
            }
            write!(line, "{c}")?;
        }
        Self::emit(f, &line)?;

        for r in 0..rows {
            line.clear();
            write!(line, "{r}  +")?;
            for c in 0..cols - 1 {
                let edge = if grid.is_drawn(Segment::horizontal(r, c)) {
                    "----"
                } else {
                    "    "
                };
                line.push_str(edge).map_err(|_| fmt::Error)?;
                line.push('+').map_err(|_| fmt::Error)?;
            }
            Self::emit(f, &line)?;

            if r + 1 == rows {
                break;
            }

            line.clear();
            line.push_str("   ").map_err(|_| fmt::Error)?;
            for c in 0..cols {
                let side = if grid.is_drawn(Segment::vertical(r, c)) {
                    '|'
                } else {
                    ' '
                };
                line.push(side).map_err(|_| fmt::Error)?;
                if c + 1 < cols {
                    match grid.owner(BoxId::new(r, c)) {
                        Some(player) => write!(line, " {player} ")?,
                        None => line.push_str("    ").map_err(|_| fmt::Error)?,
                    }
                }
            }
            Self::emit(f, &line)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardSize;
    use crate::game::{parse_move, Game};
    use std::string::ToString;

    #[test]
    fn test_empty_board() {
        let game = Game::new(BoardSize::square(2).unwrap());
        let text = BoardText(game.grid()).to_string();
        assert_eq!(text, "   0    1\r\n0  +    +\r\n\r\n1  +    +\r\n");
    }

    #[test]
    fn test_owned_box() {
        let mut game = Game::new(BoardSize::default());
        for mv in ["00R", "10R", "00D", "01D"] {
            game.apply_move(parse_move(mv).unwrap());
        }
        let text = BoardText(game.grid()).to_string();
        let expected = "   0    1    2\r\n\
                        0  +----+    +\r\n\
                        \x20  | P2 |\r\n\
                        1  +----+    +\r\n\
                        \r\n\
                        2  +    +    +\r\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_largest_board_line_width() {
        let game = Game::new(BoardSize::square(5).unwrap());
        let text = BoardText(game.grid()).to_string();
        let header = text.lines().next().unwrap();
        assert_eq!(header, "   0    1    2    3    4");
        assert_eq!(text.lines().count(), 1 + 5 + 4);
    }
}
