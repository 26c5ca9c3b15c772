//! Board size settings
//!
//! Sizes count dots, not boxes. A 3x3 board has four boxes.

use core::fmt;

/// Largest supported number of dots per side
pub const MAX_DOTS: usize = 5;

/// Smallest supported number of dots per side
pub const MIN_DOTS: usize = 2;

/// Largest number of boxes on any supported board
pub const MAX_BOXES: usize = (MAX_DOTS - 1) * (MAX_DOTS - 1);

/// Settings errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Dimension outside `MIN_DOTS..=MAX_DOTS`
    OutOfRange,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::OutOfRange => {
                write!(f, "dimension must be {MIN_DOTS}..={MAX_DOTS}")
            }
        }
    }
}

/// Dots along one side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dimension(u8);

impl Dimension {
    pub const MIN: Dimension = Dimension(MIN_DOTS as u8);

    pub fn new(dots: u8) -> Result<Self, SettingsError> {
        if (MIN_DOTS..=MAX_DOTS).contains(&(dots as usize)) {
            Ok(Self(dots))
        } else {
            Err(SettingsError::OutOfRange)
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Next size up, wrapping from the largest back to the smallest
    pub const fn wrapping_next(self) -> Self {
        if self.0 >= MAX_DOTS as u8 {
            Self::MIN
        } else {
            Self(self.0 + 1)
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension(3)
    }
}

/// Board dimensions in dots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardSize {
    /// Dots per row
    pub width: Dimension,
    /// Dots per column
    pub height: Dimension,
}

impl BoardSize {
    pub fn new(width: u8, height: u8) -> Result<Self, SettingsError> {
        Ok(Self {
            width: Dimension::new(width)?,
            height: Dimension::new(height)?,
        })
    }

    /// An `n` by `n` board
    pub fn square(n: u8) -> Result<Self, SettingsError> {
        Self::new(n, n)
    }

    /// Dots per row
    pub fn cols(&self) -> usize {
        self.width.get() as usize
    }

    /// Dots per column
    pub fn rows(&self) -> usize {
        self.height.get() as usize
    }

    /// Number of boxes on the board
    pub fn boxes(&self) -> usize {
        (self.cols() - 1) * (self.rows() - 1)
    }

    /// Number of drawable lines on the board
    pub fn lines(&self) -> usize {
        self.rows() * (self.cols() - 1) + (self.rows() - 1) * self.cols()
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width.get(), self.height.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_bounds() {
        assert_eq!(Dimension::new(1), Err(SettingsError::OutOfRange));
        assert_eq!(Dimension::new(6), Err(SettingsError::OutOfRange));
        assert_eq!(Dimension::new(2).map(Dimension::get), Ok(2));
        assert_eq!(Dimension::new(5).map(Dimension::get), Ok(5));
    }

    #[test]
    fn test_dimension_wraps() {
        let mut dim = Dimension::MIN;
        let mut seen = [0u8; 4];
        for slot in &mut seen {
            *slot = dim.get();
            dim = dim.wrapping_next();
        }
        assert_eq!(seen, [2, 3, 4, 5]);
        assert_eq!(dim, Dimension::MIN);
    }

    #[test]
    fn test_board_counts() {
        let size = BoardSize::default();
        assert_eq!(size.boxes(), 4);
        assert_eq!(size.lines(), 12);

        let wide = BoardSize::new(5, 2).unwrap();
        assert_eq!(wide.boxes(), 4);
        assert_eq!(wide.lines(), 2 * 4 + 5);
    }
}
