//! Board-agnostic core logic for the Dots and Boxes firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Grid model, move interpreter and turn engine
//! - UI state machine and settings cursor
//! - Board size settings and `game.toml` parsing
//! - Terminal board rendering and display pages
//! - Serial terminal adapter over the HAL UART traits
//! - Application controller tying it all together

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod game;
pub mod render;
pub mod state;
pub mod terminal;

pub use controller::{AppError, Controller, PollError};
