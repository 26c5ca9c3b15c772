//! Button panel
//!
//! Samples the four buttons once per loop iteration and turns presses
//! into input events. A long press of Select means Back; long presses on
//! the other buttons are ignored.

use defmt::*;
use dotsbox_hal::{ActiveLow, ButtonTiming, ButtonTracker, InputPin, Press};
use dotsbox_protocol::InputEvent;

use crate::board::ButtonPin;

struct Button {
    pin: ActiveLow<ButtonPin>,
    tracker: ButtonTracker,
    tap: InputEvent,
    long_press: Option<InputEvent>,
}

impl Button {
    fn new(pin: ButtonPin, timing: ButtonTiming, tap: InputEvent, long_press: Option<InputEvent>) -> Self {
        Self {
            pin: ActiveLow(pin),
            tracker: ButtonTracker::new(timing),
            tap,
            long_press,
        }
    }

    fn sample(&mut self, now_ms: u32) -> Option<InputEvent> {
        match self.tracker.update(self.pin.is_high(), now_ms)? {
            Press::Tap => Some(self.tap),
            Press::LongPress => self.long_press,
        }
    }
}

/// The board's buttons, all wired active-low with pull-ups
pub struct ButtonPanel {
    buttons: [Button; 4],
}

impl ButtonPanel {
    pub fn new(up: ButtonPin, down: ButtonPin, select: ButtonPin, baud: ButtonPin, timing: ButtonTiming) -> Self {
        Self {
            buttons: [
                Button::new(up, timing, InputEvent::Up, None),
                Button::new(down, timing, InputEvent::Down, None),
                Button::new(select, timing, InputEvent::Select, Some(InputEvent::Back)),
                Button::new(baud, timing, InputEvent::CycleBaud, None),
            ],
        }
    }

    /// Sample every button and return the first event
    ///
    /// Every tracker is updated on each call. Only the first event of a
    /// sample is returned.
    pub fn poll(&mut self, now_ms: u32) -> Option<InputEvent> {
        let mut first = None;
        for button in &mut self.buttons {
            if let Some(event) = button.sample(now_ms) {
                trace!("Button event: {}", event);
                first = first.or(Some(event));
            }
        }
        first
    }
}
