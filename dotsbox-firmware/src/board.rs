//! Board glue
//!
//! Adapts embassy-rp peripherals to the `dotsbox-hal` traits. Pin
//! assignments for a Raspberry Pi Pico:
//!
//! | Function        | GPIO |
//! |-----------------|------|
//! | UART0 TX / RX   | 0 / 1 |
//! | I2C1 SDA / SCL  | 2 / 3 |
//! | Up button       | 10 |
//! | Down button     | 11 |
//! | Select button   | 12 |
//! | Baud button     | 13 |
//! | LED R / G / B   | 16 / 17 / 18 |

use defmt::*;
use dotsbox_hal::{BaudControl, BaudRate, ErrorType, InputPin, OutputPin, UartRx, UartTx};
use embassy_rp::gpio::{Input, Output};
use embassy_rp::uart::{BufferedUart, Error as UartError};
use embedded_io::{Read, ReadReady, Write};

/// Terminal UART on top of the interrupt-driven buffered driver
pub struct TerminalUart {
    uart: BufferedUart,
}

impl TerminalUart {
    pub fn new(uart: BufferedUart) -> Self {
        Self { uart }
    }
}

impl ErrorType for TerminalUart {
    type Error = UartError;
}

impl UartTx for TerminalUart {
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), UartError> {
        trace!("UART TX: {} bytes", data.len());
        self.uart.write_all(data)
    }

    fn flush(&mut self) -> Result<(), UartError> {
        Write::flush(&mut self.uart)
    }
}

impl UartRx for TerminalUart {
    fn try_read_byte(&mut self) -> Result<Option<u8>, UartError> {
        if !self.uart.read_ready()? {
            return Ok(None);
        }
        let mut byte = [0u8; 1];
        match self.uart.read(&mut byte)? {
            0 => Ok(None),
            _ => {
                trace!("UART RX: {=u8:#04x}", byte[0]);
                Ok(Some(byte[0]))
            }
        }
    }
}

impl BaudControl for TerminalUart {
    fn set_baud_rate(&mut self, baud: BaudRate) {
        // Let the last bytes at the old rate drain first
        let _ = Write::flush(&mut self.uart);
        self.uart.set_baudrate(baud.bps());
    }
}

/// Push-button input
pub struct ButtonPin(pub Input<'static>);

impl InputPin for ButtonPin {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// LED channel output
pub struct LedPin(pub Output<'static>);

impl OutputPin for LedPin {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }
}
