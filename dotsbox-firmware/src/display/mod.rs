//! Display backend for the on-board OLED

pub mod sh1106;

pub use sh1106::Sh1106;
