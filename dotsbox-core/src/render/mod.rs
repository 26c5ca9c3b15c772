//! Rendering
//!
//! The board is drawn as text for the serial terminal; everything else
//! goes to the character display as pages.

pub mod board;
pub mod pages;

pub use board::BoardText;
