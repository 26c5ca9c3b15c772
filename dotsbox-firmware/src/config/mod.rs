//! Configuration loading
//!
//! Settings come from the `game.toml` compiled into the binary and
//! validated by the build script. If the runtime parser still rejects it,
//! the defaults are used.

use defmt::*;
use dotsbox_core::config::{parse_config, GameConfig};

/// Embedded default configuration (compiled into firmware)
/// Edit game.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../game.toml");

/// Parse the embedded configuration
pub fn load() -> GameConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Config: board {}x{}, {} baud, echo={}",
                config.board.width.get(),
                config.board.height.get(),
                config.terminal.baud.bps(),
                config.terminal.echo
            );
            config
        }
        Err(e) => {
            error!("game.toml rejected: {}, using defaults", e);
            GameConfig::default()
        }
    }
}
