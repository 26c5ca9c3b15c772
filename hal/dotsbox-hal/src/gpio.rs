//! GPIO pin abstractions
//!
//! Buttons are read through [`InputPin`], LEDs are driven through
//! [`OutputPin`]. Most development-board buttons pull the line low when
//! pressed, so [`ActiveLow`] flips the sense of an input.

/// Digital output pin
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Inverts an input so that "high" means "asserted"
///
/// Wrap a pulled-up button input with this to read a press as `true`.
#[derive(Debug, Clone, Copy)]
pub struct ActiveLow<P>(pub P);

impl<P: InputPin> InputPin for ActiveLow<P> {
    fn is_high(&self) -> bool {
        self.0.is_low()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPin(bool);

    impl InputPin for FixedPin {
        fn is_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_active_low_inverts() {
        assert!(ActiveLow(FixedPin(false)).is_high());
        assert!(ActiveLow(FixedPin(true)).is_low());
    }
}
