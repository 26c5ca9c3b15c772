//! Tri-colour status LED
//!
//! The board's RGB LED shows which baud rate the terminal is using, so a
//! player can match their terminal settings without reading the screen.

use crate::gpio::OutputPin;
use crate::uart::BaudRate;

/// LED colours reachable by switching channels fully on or off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Off,
    Red,
    Green,
    Blue,
    White,
}

impl Color {
    /// Channel levels as (red, green, blue)
    pub const fn channels(self) -> (bool, bool, bool) {
        match self {
            Color::Off => (false, false, false),
            Color::Red => (true, false, false),
            Color::Green => (false, true, false),
            Color::Blue => (false, false, true),
            Color::White => (true, true, true),
        }
    }
}

impl From<BaudRate> for Color {
    fn from(baud: BaudRate) -> Self {
        match baud {
            BaudRate::Baud9600 => Color::Red,
            BaudRate::Baud19200 => Color::Green,
            BaudRate::Baud38400 => Color::Blue,
            BaudRate::Baud57600 => Color::White,
        }
    }
}

/// RGB LED built from three output pins
pub struct RgbLed<R, G, B> {
    red: R,
    green: G,
    blue: B,
    color: Color,
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> RgbLed<R, G, B> {
    /// Take ownership of the three channels and switch them off
    pub fn new(red: R, green: G, blue: B) -> Self {
        let mut led = Self {
            red,
            green,
            blue,
            color: Color::Off,
        };
        led.show(Color::Off);
        led
    }

    /// Display a colour
    pub fn show(&mut self, color: Color) {
        let (r, g, b) = color.channels();
        self.red.set_state(r);
        self.green.set_state(g);
        self.blue.set_state(b);
        self.color = color;
    }

    /// Currently displayed colour
    pub fn color(&self) -> Color {
        self.color
    }
}
