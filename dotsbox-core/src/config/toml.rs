//! Minimal TOML parser for `game.toml`
//!
//! Handles only the subset the game configuration uses. It does NOT
//! support the full TOML spec.
//!
//! Supported:
//! - `[section]` headers
//! - `key = value` pairs with integer or boolean values
//! - Comments (`# ...`), including trailing comments
//!
//! Unknown sections and keys are rejected so typos do not silently fall
//! back to defaults. Keys that are absent keep their default values.

use core::fmt;

use dotsbox_hal::BaudRate;

use super::settings::Dimension;
use super::types::GameConfig;

/// Config parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Malformed or unknown `[section]` header
    InvalidSection { line: u16 },
    /// Key not valid in its section
    UnknownKey { line: u16 },
    /// Line is not `key = value`, or value has the wrong type
    InvalidValue { line: u16 },
    /// Value parsed but is not allowed
    OutOfRange { line: u16 },
}

impl ConfigError {
    /// One-based line number of the offending input
    pub fn line(&self) -> u16 {
        match *self {
            ConfigError::InvalidSection { line }
            | ConfigError::UnknownKey { line }
            | ConfigError::InvalidValue { line }
            | ConfigError::OutOfRange { line } => line,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            ConfigError::InvalidSection { .. } => "invalid section",
            ConfigError::UnknownKey { .. } => "unknown key",
            ConfigError::InvalidValue { .. } => "invalid value",
            ConfigError::OutOfRange { .. } => "value out of range",
        };
        write!(f, "{} on line {}", what, self.line())
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Board,
    Terminal,
    Buttons,
}

/// Parse TOML configuration into a [`GameConfig`]
pub fn parse_config(input: &str) -> Result<GameConfig, ConfigError> {
    let mut config = GameConfig::default();
    let mut section = Section::Root;
    let mut buttons_line = 0;

    for (index, raw) in input.lines().enumerate() {
        let line = (index + 1) as u16;
        let text = strip_comment(raw).trim();

        if text.is_empty() {
            continue;
        }

        if let Some(header) = text.strip_prefix('[') {
            let name = header
                .strip_suffix(']')
                .ok_or(ConfigError::InvalidSection { line })?;
            section = parse_section_header(name.trim()).ok_or(ConfigError::InvalidSection { line })?;
            continue;
        }

        let (key, value) = text
            .split_once('=')
            .ok_or(ConfigError::InvalidValue { line })?;
        apply_key(&mut config, section, key.trim(), value.trim(), line)?;
        if section == Section::Buttons {
            buttons_line = line;
        }
    }

    // A long press must outlast the debounce window
    if config.buttons.long_press_ms <= config.buttons.debounce_ms {
        return Err(ConfigError::OutOfRange { line: buttons_line });
    }

    Ok(config)
}

fn parse_section_header(name: &str) -> Option<Section> {
    match name {
        "board" => Some(Section::Board),
        "terminal" => Some(Section::Terminal),
        "buttons" => Some(Section::Buttons),
        _ => None,
    }
}

fn apply_key(
    config: &mut GameConfig,
    section: Section,
    key: &str,
    value: &str,
    line: u16,
) -> Result<(), ConfigError> {
    match (section, key) {
        (Section::Board, "width") => config.board.width = parse_dimension(value, line)?,
        (Section::Board, "height") => config.board.height = parse_dimension(value, line)?,
        (Section::Terminal, "baud") => {
            let bps: u32 = parse_int(value, line)?;
            config.terminal.baud = BaudRate::from_bps(bps).ok_or(ConfigError::OutOfRange { line })?;
        }
        (Section::Terminal, "echo") => config.terminal.echo = parse_bool(value, line)?,
        (Section::Buttons, "debounce_ms") => config.buttons.debounce_ms = parse_int(value, line)?,
        (Section::Buttons, "long_press_ms") => {
            config.buttons.long_press_ms = parse_int(value, line)?
        }
        _ => return Err(ConfigError::UnknownKey { line }),
    }
    Ok(())
}

/// Drop a trailing `# comment`
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str, line: u16) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue { line })
}

/// Parse a boolean value
fn parse_bool(value: &str, line: u16) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue { line }),
    }
}

fn parse_dimension(value: &str, line: u16) -> Result<Dimension, ConfigError> {
    let dots: u8 = parse_int(value, line)?;
    Dimension::new(dots).map_err(|_| ConfigError::OutOfRange { line })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardSize;

    const SAMPLE: &str = r#"
# Dots and Boxes defaults
[board]
width = 4
height = 3   # rows of dots

[terminal]
baud = 38400
echo = false

[buttons]
debounce_ms = 15
long_press_ms = 800
"#;

    #[test]
    fn test_parse_sample() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config.board, BoardSize::new(4, 3).unwrap());
        assert_eq!(config.terminal.baud, BaudRate::Baud38400);
        assert!(!config.terminal.echo);
        assert_eq!(config.buttons.debounce_ms, 15);
        assert_eq!(config.buttons.long_press_ms, 800);
    }

    #[test]
    fn test_empty_is_default() {
        assert_eq!(parse_config(""), Ok(GameConfig::default()));
        assert_eq!(parse_config("[board]\n"), Ok(GameConfig::default()));
    }

    #[test]
    fn test_out_of_range_width() {
        let err = parse_config("[board]\nwidth = 6\n").unwrap_err();
        assert_eq!(err, ConfigError::OutOfRange { line: 2 });
    }

    #[test]
    fn test_unsupported_baud() {
        let err = parse_config("[terminal]\nbaud = 115200\n").unwrap_err();
        assert_eq!(err, ConfigError::OutOfRange { line: 2 });
    }

    #[test]
    fn test_unknown_key() {
        let err = parse_config("[board]\ndepth = 3\n").unwrap_err();
        assert_eq!(err, ConfigError::UnknownKey { line: 2 });
    }

    #[test]
    fn test_key_outside_section() {
        assert_eq!(
            parse_config("width = 3\n"),
            Err(ConfigError::UnknownKey { line: 1 })
        );
    }

    #[test]
    fn test_unknown_section() {
        assert_eq!(
            parse_config("[players]\n"),
            Err(ConfigError::InvalidSection { line: 1 })
        );
        assert_eq!(
            parse_config("[board\n"),
            Err(ConfigError::InvalidSection { line: 1 })
        );
    }

    #[test]
    fn test_bad_values() {
        assert_eq!(
            parse_config("[terminal]\necho = yes\n"),
            Err(ConfigError::InvalidValue { line: 2 })
        );
        assert_eq!(
            parse_config("[board]\nwidth\n"),
            Err(ConfigError::InvalidValue { line: 2 })
        );
    }

    #[test]
    fn test_long_press_must_exceed_debounce() {
        let err = parse_config("[buttons]\nlong_press_ms = 10\n").unwrap_err();
        assert_eq!(err, ConfigError::OutOfRange { line: 2 });

        // Checked after the whole section, so key order does not matter
        let config = parse_config("[buttons]\ndebounce_ms = 600\nlong_press_ms = 900\n").unwrap();
        assert_eq!(config.buttons.long_press_ms, 900);
    }
}
