//! Serial Terminal Protocol
//!
//! Players type moves on an ordinary serial terminal (PuTTY, minicom,
//! `screen`). This crate covers both directions of that conversation:
//!
//! ```text
//! terminal ──bytes──▶ LineParser ──Line──▶ game
//! terminal ◀──text─── TerminalMessage ◀── game
//! ```
//!
//! Incoming bytes are assembled into lines with local echo and backspace
//! handling, since most terminals send raw keystrokes. Outgoing text is
//! plain ASCII terminated with CRLF.
//!
//! Button input from the board itself is described by [`InputEvent`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod events;
pub mod line;
pub mod messages;

pub use events::InputEvent;
pub use line::{Feed, Line, LineError, LineParser, MAX_LINE_LEN};
pub use messages::{TerminalMessage, NEWLINE};
