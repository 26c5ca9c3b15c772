//! Configuration type definitions
//!
//! These mirror the sections of `game.toml`.

use dotsbox_hal::{BaudRate, ButtonTiming};

use super::settings::BoardSize;

/// Serial terminal settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TerminalConfig {
    /// Baud rate applied at boot
    pub baud: BaudRate,
    /// Echo typed characters back to the terminal
    pub echo: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            baud: BaudRate::Baud9600,
            echo: true,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameConfig {
    /// Board size selected when the settings screen first opens
    pub board: BoardSize,
    pub terminal: TerminalConfig,
    pub buttons: ButtonTiming,
}
