//! Display backend trait
//!
//! Defines the interface a text-capable panel must offer.

use crate::screen::{Screen, SCREEN_COLS};

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer to the panel failed
    Communication,
    /// Display not initialized
    NotInitialized,
}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DisplayError::Communication => f.write_str("display communication failed"),
            DisplayError::NotInitialized => f.write_str("display not initialized"),
        }
    }
}

/// Display backend trait
///
/// Implementations may buffer drawing calls; nothing needs to reach the
/// panel before [`DisplayBackend::flush`].
pub trait DisplayBackend {
    /// Clear the entire display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text starting at a character cell
    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Invert `start_col..end_col` on a row
    fn invert_region(&mut self, row: u8, start_col: u8, end_col: u8) -> Result<(), DisplayError>;

    /// Send buffered content to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;
}

/// Draw a whole screen on a backend and flush it
pub fn present<D: DisplayBackend>(screen: &Screen, display: &mut D) -> Result<(), DisplayError> {
    display.clear()?;
    for (row, line) in screen.lines().enumerate() {
        if !line.is_empty() {
            display.draw_text(row as u8, 0, line)?;
        }
    }
    if let Some(row) = screen.highlight() {
        display.invert_region(row, 0, SCREEN_COLS as u8)?;
    }
    display.flush()
}
