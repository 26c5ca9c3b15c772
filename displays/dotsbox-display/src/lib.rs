//! Display abstraction and screen buffer for the Dots and Boxes firmware
//!
//! This crate provides:
//! - [`Screen`], a fixed-size character buffer the UI renders pages into
//! - [`DisplayBackend`], implemented by whatever panel the board carries
//! - [`present`], which pushes a screen to a backend
//!
//! The game UI never talks to the panel directly. Pages are composed into
//! a `Screen`, and the firmware presents it only when it is dirty.

#![no_std]

pub mod backend;
pub mod screen;

// Re-export key types
pub use backend::{present, DisplayBackend, DisplayError};
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
