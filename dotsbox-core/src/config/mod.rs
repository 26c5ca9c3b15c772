//! Configuration
//!
//! Board size settings and the `game.toml` defaults embedded in firmware.

pub mod settings;
pub mod toml;
pub mod types;

pub use settings::{BoardSize, Dimension, SettingsError, MAX_BOXES, MAX_DOTS, MIN_DOTS};
pub use toml::{parse_config, ConfigError};
pub use types::{GameConfig, TerminalConfig};
