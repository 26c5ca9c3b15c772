//! Serial terminal adapter
//!
//! Wraps a HAL UART with the line assembler: incoming bytes are echoed
//! and collected into lines, outgoing text is written as it is formatted.

use core::fmt;

use dotsbox_hal::{BaudRate, Uart};
use dotsbox_protocol::{Feed, Line, LineError, LineParser, TerminalMessage, NEWLINE};

use crate::config::TerminalConfig;

/// Something the player typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalInput {
    /// A complete, trimmed line
    Line(Line),
    /// Line was too long and was thrown away
    Overflow,
}

/// Line-oriented terminal over a UART
pub struct SerialTerminal<U> {
    uart: U,
    parser: LineParser,
    echo: bool,
    baud: BaudRate,
}

impl<U: Uart> SerialTerminal<U> {
    /// Wrap a UART and apply the configured baud rate
    pub fn new(mut uart: U, config: &TerminalConfig) -> Self {
        uart.set_baud_rate(config.baud);
        Self {
            uart,
            parser: LineParser::new(),
            echo: config.echo,
            baud: config.baud,
        }
    }

    /// Current line speed
    pub fn baud(&self) -> BaudRate {
        self.baud
    }

    /// Switch line speed, dropping any half-typed line
    pub fn set_baud(&mut self, baud: BaudRate) {
        self.uart.set_baud_rate(baud);
        self.baud = baud;
        self.parser.reset();
    }

    /// Drop any half-typed line
    pub fn discard_input(&mut self) {
        self.parser.reset();
    }

    pub fn uart(&self) -> &U {
        &self.uart
    }

    pub fn uart_mut(&mut self) -> &mut U {
        &mut self.uart
    }

    /// Write raw text
    pub fn send(&mut self, text: &str) -> Result<(), U::Error> {
        self.uart.write_blocking(text.as_bytes())
    }

    /// Write a protocol message
    pub fn send_message(&mut self, message: TerminalMessage) -> Result<(), U::Error> {
        self.send_fmt(format_args!("{message}"))
    }

    /// Write formatted text without buffering it first
    pub fn send_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), U::Error> {
        let mut adapter = Adapter {
            uart: &mut self.uart,
            error: None,
        };
        let _ = fmt::Write::write_fmt(&mut adapter, args);
        match adapter.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Read waiting bytes until a line completes or the UART runs dry
    pub fn poll(&mut self) -> Result<Option<TerminalInput>, U::Error> {
        while let Some(byte) = self.uart.try_read_byte()? {
            match self.parser.feed(byte) {
                Ok(Feed::Pending) => {}
                Ok(Feed::Echo(b)) => {
                    if self.echo {
                        self.uart.write_blocking(&[b])?;
                    }
                }
                Ok(Feed::Erase) => {
                    if self.echo {
                        self.send_message(TerminalMessage::Erase)?;
                    }
                }
                Ok(Feed::Line(line)) => {
                    if self.echo {
                        self.send(NEWLINE)?;
                    }
                    return Ok(Some(TerminalInput::Line(line)));
                }
                Err(LineError::Overflow) => {
                    if self.echo {
                        self.send(NEWLINE)?;
                    }
                    return Ok(Some(TerminalInput::Overflow));
                }
            }
        }
        Ok(None)
    }
}

/// Bridges `fmt::Write` to the UART, keeping the first UART error
struct Adapter<'a, U: Uart> {
    uart: &'a mut U,
    error: Option<U::Error>,
}

impl<U: Uart> fmt::Write for Adapter<'_, U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.uart.write_blocking(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}
