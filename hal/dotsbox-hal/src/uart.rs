//! UART serial terminal abstractions
//!
//! The game talks to a human at a serial terminal. Output is written in
//! blocking chunks; input is polled one byte at a time so the main loop
//! never stalls waiting for a keypress.

/// Error type shared by both directions of a port
pub trait ErrorType {
    /// Error type for transmit and receive operations
    type Error;
}

/// UART transmitter
pub trait UartTx: ErrorType {
    /// Write data to the UART
    ///
    /// Blocks until all data has been queued or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// UART receiver
pub trait UartRx: ErrorType {
    /// Read one byte if one is waiting
    ///
    /// Returns `Ok(None)` immediately when the receive buffer is empty.
    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}

/// Runtime baud-rate control
pub trait BaudControl {
    /// Reconfigure the line speed
    fn set_baud_rate(&mut self, baud: BaudRate);
}

/// Full serial terminal port
pub trait Uart: UartTx + UartRx + BaudControl {}

// Blanket implementation
impl<T: UartTx + UartRx + BaudControl> Uart for T {}

/// Supported terminal line speeds
///
/// The baud button steps through these in order and wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BaudRate {
    #[default]
    Baud9600,
    Baud19200,
    Baud38400,
    Baud57600,
}

impl BaudRate {
    /// All rates in cycling order
    pub const ALL: [BaudRate; 4] = [
        BaudRate::Baud9600,
        BaudRate::Baud19200,
        BaudRate::Baud38400,
        BaudRate::Baud57600,
    ];

    /// Line speed in bits per second
    pub const fn bps(self) -> u32 {
        match self {
            BaudRate::Baud9600 => 9_600,
            BaudRate::Baud19200 => 19_200,
            BaudRate::Baud38400 => 38_400,
            BaudRate::Baud57600 => 57_600,
        }
    }

    /// Look up a rate from bits per second
    pub fn from_bps(bps: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|rate| rate.bps() == bps)
    }

    /// The next rate in the cycle
    pub const fn next(self) -> Self {
        match self {
            BaudRate::Baud9600 => BaudRate::Baud19200,
            BaudRate::Baud19200 => BaudRate::Baud38400,
            BaudRate::Baud38400 => BaudRate::Baud57600,
            BaudRate::Baud57600 => BaudRate::Baud9600,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        let mut rate = BaudRate::Baud9600;
        for expected in [
            BaudRate::Baud19200,
            BaudRate::Baud38400,
            BaudRate::Baud57600,
            BaudRate::Baud9600,
        ] {
            rate = rate.next();
            assert_eq!(rate, expected);
        }
    }

    #[test]
    fn test_from_bps() {
        assert_eq!(BaudRate::from_bps(38_400), Some(BaudRate::Baud38400));
        assert_eq!(BaudRate::from_bps(115_200), None);
    }

    #[test]
    fn test_default_is_slowest() {
        assert_eq!(BaudRate::default().bps(), 9_600);
    }
}
