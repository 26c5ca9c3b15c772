//! Dots and Boxes Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the game needs from
//! a development board. Board support code (the firmware crate) implements
//! them on top of the chip HAL; host tests implement them with in-memory
//! mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  dotsbox-core (controller, terminal)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dotsbox-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │   firmware    │       │  host mocks   │
//! │  (embassy-rp) │       │   (tests)     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits and helpers
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`uart::UartTx`], [`uart::UartRx`], [`uart::BaudControl`] - Serial terminal
//! - [`button::ButtonTracker`] - Debounced tap / long-press detection
//! - [`led::RgbLed`] - Tri-colour status LED

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod gpio;
pub mod led;
pub mod uart;

pub use button::{ButtonTiming, ButtonTracker, Press};
pub use gpio::{ActiveLow, InputPin, OutputPin};
pub use led::{Color, RgbLed};
pub use uart::{BaudControl, BaudRate, ErrorType, Uart, UartRx, UartTx};
