//! UI state machine
//!
//! One state per screen. Transitions are a pure function of the current
//! state and an event; unknown pairs leave the state unchanged.

pub mod cursor;
pub mod events;
pub mod machine;

pub use cursor::{SettingsCursor, SettingsItem};
pub use events::Event;
pub use machine::State;
