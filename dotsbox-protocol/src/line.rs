//! Line assembly for terminal input.
//!
//! Bytes are fed one at a time:
//! - `\r` or `\n` completes a line; `\n` right after `\r` is swallowed
//! - backspace (0x08) and DEL (0x7F) erase the last character
//! - printable ASCII is buffered and echoed
//! - other control bytes are ignored
//!
//! A line longer than [`MAX_LINE_LEN`] is discarded. The error is held
//! back until the terminator arrives so the rest of the oversized input
//! is not mistaken for a new line.

use heapless::String;

/// Maximum buffered line length in bytes
pub const MAX_LINE_LEN: usize = 16;

const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7F;

/// A complete, trimmed line of input
pub type Line = String<MAX_LINE_LEN>;

/// Errors that can occur while assembling a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Input exceeded [`MAX_LINE_LEN`] before the terminator
    Overflow,
}

/// Result of feeding one byte
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feed {
    /// Byte consumed, nothing to report
    Pending,
    /// Printable byte buffered; echo it back
    Echo(u8),
    /// Last character erased; erase it on the terminal too
    Erase,
    /// Terminator received
    Line(Line),
}

/// Byte-at-a-time line assembler
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    buffer: String<MAX_LINE_LEN>,
    overflowed: bool,
    last_was_cr: bool,
}

impl LineParser {
    /// Create a new line parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop any partial input
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.overflowed = false;
    }

    /// Bytes buffered so far
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    /// Feed a single byte
    pub fn feed(&mut self, byte: u8) -> Result<Feed, LineError> {
        let after_cr = self.last_was_cr;
        self.last_was_cr = byte == b'\r';

        match byte {
            b'\n' if after_cr => Ok(Feed::Pending),
            b'\r' | b'\n' => self.finish(),
            BACKSPACE | DELETE => {
                if self.overflowed {
                    return Ok(Feed::Pending);
                }
                Ok(match self.buffer.pop() {
                    Some(_) => Feed::Erase,
                    None => Feed::Pending,
                })
            }
            0x20..=0x7E => {
                if self.overflowed {
                    return Ok(Feed::Pending);
                }
                if self.buffer.push(byte as char).is_err() {
                    self.overflowed = true;
                    return Ok(Feed::Pending);
                }
                Ok(Feed::Echo(byte))
            }
            _ => Ok(Feed::Pending),
        }
    }

    fn finish(&mut self) -> Result<Feed, LineError> {
        if self.overflowed {
            self.reset();
            return Err(LineError::Overflow);
        }

        let mut line = Line::new();
        // Trimmed text is never longer than the buffer it came from
        let _ = line.push_str(self.buffer.trim());
        self.reset();
        Ok(Feed::Line(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn feed_all(parser: &mut LineParser, bytes: &[u8]) -> Option<Result<Line, LineError>> {
        for &byte in bytes {
            match parser.feed(byte) {
                Ok(Feed::Line(line)) => return Some(Ok(line)),
                Err(e) => return Some(Err(e)),
                Ok(_) => {}
            }
        }
        None
    }

    #[test]
    fn test_simple_line() {
        let mut parser = LineParser::new();
        let line = feed_all(&mut parser, b"00R\r").unwrap().unwrap();
        assert_eq!(line.as_str(), "00R");
    }

    #[test]
    fn test_echo_and_erase() {
        let mut parser = LineParser::new();
        assert_eq!(parser.feed(b'1'), Ok(Feed::Echo(b'1')));
        assert_eq!(parser.feed(BACKSPACE), Ok(Feed::Erase));
        assert_eq!(parser.feed(BACKSPACE), Ok(Feed::Pending));
        assert_eq!(parser.pending(), "");
    }

    #[test]
    fn test_crlf_yields_one_line() {
        let mut parser = LineParser::new();
        let first = feed_all(&mut parser, b"12D\r").unwrap().unwrap();
        assert_eq!(first.as_str(), "12D");

        // The LF that follows is swallowed, not an empty line
        assert_eq!(parser.feed(b'\n'), Ok(Feed::Pending));

        // A lone LF still terminates
        let second = feed_all(&mut parser, b"21U\n").unwrap().unwrap();
        assert_eq!(second.as_str(), "21U");
    }

    #[test]
    fn test_delete_edits_line() {
        let mut parser = LineParser::new();
        let line = feed_all(&mut parser, b"00X\x7fL\r").unwrap().unwrap();
        assert_eq!(line.as_str(), "00L");
    }

    #[test]
    fn test_surrounding_spaces_trimmed() {
        let mut parser = LineParser::new();
        let line = feed_all(&mut parser, b"  01U \r").unwrap().unwrap();
        assert_eq!(line.as_str(), "01U");
    }

    #[test]
    fn test_control_bytes_ignored() {
        let mut parser = LineParser::new();
        assert_eq!(parser.feed(0x1B), Ok(Feed::Pending));
        assert_eq!(parser.feed(0x00), Ok(Feed::Pending));
        assert_eq!(parser.pending(), "");
    }

    #[test]
    fn test_overflow_reported_at_terminator() {
        let mut parser = LineParser::new();
        for _ in 0..MAX_LINE_LEN {
            assert!(matches!(parser.feed(b'9'), Ok(Feed::Echo(_))));
        }
        // Bytes past capacity are swallowed silently
        assert_eq!(parser.feed(b'9'), Ok(Feed::Pending));
        assert_eq!(parser.feed(b'\r'), Err(LineError::Overflow));

        // Parser is usable again afterwards
        let line = feed_all(&mut parser, b"\n10R\r").unwrap().unwrap();
        assert_eq!(line.as_str(), "10R");
    }

    proptest! {
        #[test]
        fn prop_never_exceeds_capacity(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            let mut parser = LineParser::new();
            for byte in bytes {
                if let Ok(Feed::Line(line)) = parser.feed(byte) {
                    prop_assert!(line.len() <= MAX_LINE_LEN);
                    prop_assert!(line.bytes().all(|b| (0x20..=0x7E).contains(&b)));
                }
                prop_assert!(parser.pending().len() <= MAX_LINE_LEN);
            }
        }
    }
}
