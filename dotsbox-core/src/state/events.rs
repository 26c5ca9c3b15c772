//! Events that trigger screen transitions

use dotsbox_hal::BaudRate;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // UI navigation events
    /// User moved on from the current page
    Proceed,
    /// User wants to go back
    Back,
    /// User started a game from the settings page
    StartGame,
    /// User left a game in progress (long press)
    Abort,

    // Game events
    /// Last box was completed
    GameOver,

    // Terminal events
    /// Terminal switched to a new baud rate
    BaudChanged(BaudRate),
}
