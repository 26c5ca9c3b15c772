//! Input events from the board's buttons

/// Navigation input, already debounced and mapped from physical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Move the menu cursor up
    Up,
    /// Move the menu cursor down
    Down,
    /// Confirm / change the selected item
    Select,
    /// Leave the current screen
    Back,
    /// Step the terminal to the next baud rate
    CycleBaud,
}
