//! Push-button press detection
//!
//! Turns a sampled button level into discrete presses. A press must stay
//! down for the debounce window to count at all; releasing before the
//! long-press threshold reports a [`Press::Tap`], holding past it reports
//! a single [`Press::LongPress`] without waiting for release.
//!
//! The tracker is sampled from the polling loop with a millisecond
//! timestamp, so it needs no timer or interrupt of its own.

/// A completed button gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Press {
    /// Short press and release
    Tap,
    /// Held past the long-press threshold
    LongPress,
}

/// Debounce and long-press thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonTiming {
    /// Minimum time a press must be held to register (ms)
    pub debounce_ms: u32,
    /// Hold time that turns a press into a long press (ms)
    pub long_press_ms: u32,
}

impl Default for ButtonTiming {
    fn default() -> Self {
        Self {
            debounce_ms: 20,
            long_press_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Button up
    Released,
    /// Went down, waiting out the debounce window
    Settling { since_ms: u32 },
    /// Confirmed down
    Held { since_ms: u32 },
    /// Long press already reported, waiting for release
    LongHeld,
}

/// Per-button press tracker
#[derive(Debug, Clone)]
pub struct ButtonTracker {
    timing: ButtonTiming,
    phase: Phase,
}

impl ButtonTracker {
    /// Create a tracker with the given thresholds
    pub fn new(timing: ButtonTiming) -> Self {
        Self {
            timing,
            phase: Phase::Released,
        }
    }

    /// Feed one sample
    ///
    /// - `pressed`: whether the button is currently down
    /// - `now_ms`: monotonic timestamp (wrapping is tolerated)
    pub fn update(&mut self, pressed: bool, now_ms: u32) -> Option<Press> {
        match (self.phase, pressed) {
            (Phase::Released, true) => {
                self.phase = Phase::Settling { since_ms: now_ms };
                None
            }
            (Phase::Released, false) => None,

            (Phase::Settling { .. }, false) => {
                // Bounce
                self.phase = Phase::Released;
                None
            }
            (Phase::Settling { since_ms }, true) => {
                if now_ms.wrapping_sub(since_ms) >= self.timing.debounce_ms {
                    self.phase = Phase::Held { since_ms };
                }
                None
            }

            (Phase::Held { .. }, false) => {
                self.phase = Phase::Released;
                Some(Press::Tap)
            }
            (Phase::Held { since_ms }, true) => {
                if now_ms.wrapping_sub(since_ms) >= self.timing.long_press_ms {
                    self.phase = Phase::LongHeld;
                    Some(Press::LongPress)
                } else {
                    None
                }
            }

            (Phase::LongHeld, false) => {
                self.phase = Phase::Released;
                None
            }
            (Phase::LongHeld, true) => None,
        }
    }

    /// Check if the button is currently considered down
    pub fn is_down(&self) -> bool {
        matches!(self.phase, Phase::Held { .. } | Phase::LongHeld)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> ButtonTracker {
        ButtonTracker::new(ButtonTiming::default())
    }

    #[test]
    fn test_tap() {
        let mut button = tracker();
        assert_eq!(button.update(true, 0), None);
        assert_eq!(button.update(true, 25), None);
        assert!(button.is_down());
        assert_eq!(button.update(false, 100), Some(Press::Tap));
        assert!(!button.is_down());
    }

    #[test]
    fn test_bounce_is_ignored() {
        let mut button = tracker();
        assert_eq!(button.update(true, 0), None);
        assert_eq!(button.update(false, 5), None);
        assert_eq!(button.update(false, 50), None);
        assert!(!button.is_down());
    }

    #[test]
    fn test_long_press_fires_once() {
        let mut button = tracker();
        button.update(true, 0);
        button.update(true, 30);
        assert_eq!(button.update(true, 499), None);
        assert_eq!(button.update(true, 500), Some(Press::LongPress));
        assert_eq!(button.update(true, 900), None);
        // Release after a long press is not a tap
        assert_eq!(button.update(false, 950), None);
    }

    #[test]
    fn test_timestamp_wraparound() {
        let mut button = tracker();
        let start = u32::MAX - 10;
        button.update(true, start);
        button.update(true, start.wrapping_add(25));
        assert_eq!(button.update(false, start.wrapping_add(60)), Some(Press::Tap));
    }
}
