//! Move interpreter
//!
//! A move is three characters typed at the terminal: row digit, column
//! digit and direction, e.g. `00R` draws the line to the right of the
//! top-left dot. Parsing never looks at the grid; bounds are checked when
//! the move is applied.

use core::fmt;

/// Direction of the line leaving a dot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parse a direction letter (uppercase only)
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'U' => Some(Direction::Up),
            b'D' => Some(Direction::Down),
            b'L' => Some(Direction::Left),
            b'R' => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

/// A parsed move: the dot it starts from and the direction of the line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Move {
    pub row: u8,
    pub col: u8,
    pub direction: Direction,
}

impl Move {
    pub const fn new(row: u8, col: u8, direction: Direction) -> Self {
        Self { row, col, direction }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.row, self.col, self.direction.as_char())
    }
}

/// Malformed move text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Not exactly three characters
    WrongLength,
    /// Row or column is not a decimal digit
    NonDigitCoordinate,
    /// Direction is not one of U, D, L, R
    InvalidDirection,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::WrongLength => write!(f, "move must be 3 characters"),
            ParseError::NonDigitCoordinate => write!(f, "row and column must be digits"),
            ParseError::InvalidDirection => write!(f, "direction must be U, D, L or R"),
        }
    }
}

/// Parse move text such as `"12D"`
pub fn parse_move(text: &str) -> Result<Move, ParseError> {
    let &[row, col, dir] = text.as_bytes() else {
        return Err(ParseError::WrongLength);
    };

    if !row.is_ascii_digit() || !col.is_ascii_digit() {
        return Err(ParseError::NonDigitCoordinate);
    }

    let direction = Direction::from_byte(dir).ok_or(ParseError::InvalidDirection)?;

    Ok(Move::new(row - b'0', col - b'0', direction))
}
