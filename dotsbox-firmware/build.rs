//! Build script for dotsbox-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates game.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys allowed in each section, with their inclusive integer range
/// (`None` for booleans)
const SCHEMA: &[(&str, &[(&str, Option<(i64, i64)>)])] = &[
    ("board", &[("width", Some((2, 5))), ("height", Some((2, 5)))]),
    ("terminal", &[("baud", Some((9600, 57600))), ("echo", None)]),
    (
        "buttons",
        &[
            ("debounce_ms", Some((1, 1000))),
            ("long_press_ms", Some((1, 10_000))),
        ],
    ),
];

const BAUD_RATES: [i64; 4] = [9600, 19200, 38400, 57600];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate game.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=game.toml");

    let config_path = Path::new("game.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: game.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds its power-on settings from game.toml.       ║\n\
            ║  Please create one in the dotsbox-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read game.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in game.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let errors = check_config(&config);
    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid settings in game.toml                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=game.toml validated successfully");
}

/// Check sections, keys, types and ranges against the schema
fn check_config(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let root = match config.as_table() {
        Some(t) => t,
        None => return vec!["top level must be a table".to_string()],
    };

    for (section, value) in root {
        let Some((_, keys)) = SCHEMA.iter().find(|(name, _)| name == section) else {
            errors.push(format!("unknown section [{}]", section));
            continue;
        };

        let table = match value {
            toml::Value::Table(t) => t,
            _ => {
                errors.push(format!("[{}] must be a table", section));
                continue;
            }
        };

        for (key, value) in table {
            let Some((_, range)) = keys.iter().find(|(name, _)| name == key) else {
                errors.push(format!("[{}] unknown key '{}'", section, key));
                continue;
            };

            match (range, value) {
                (None, toml::Value::Boolean(_)) => {}
                (None, _) => errors.push(format!("[{}] {} must be true or false", section, key)),
                (Some((min, max)), toml::Value::Integer(n)) => {
                    if n < min || n > max {
                        errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
                    }
                }
                (Some(_), _) => errors.push(format!("[{}] {} must be an integer", section, key)),
            }
        }
    }

    if let Some(toml::Value::Integer(baud)) = config.get("terminal").and_then(|t| t.get("baud")) {
        if !BAUD_RATES.contains(baud) {
            errors.push("[terminal] baud must be 9600, 19200, 38400 or 57600".to_string());
        }
    }

    let buttons = config.get("buttons");
    let debounce = buttons
        .and_then(|b| b.get("debounce_ms"))
        .and_then(|v| v.as_integer())
        .unwrap_or(20);
    let long_press = buttons
        .and_then(|b| b.get("long_press_ms"))
        .and_then(|v| v.as_integer())
        .unwrap_or(500);
    if long_press <= debounce {
        errors.push("[buttons] long_press_ms must exceed debounce_ms".to_string());
    }

    errors
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
