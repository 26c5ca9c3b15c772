//! Screen buffer types
//!
//! Character-based buffer sized for a 128x64 panel with a 6x8 font.

use core::fmt::{self, Write};

use heapless::String;

/// Number of character rows
pub const SCREEN_ROWS: usize = 8;

/// Number of character columns
pub const SCREEN_COLS: usize = 21;

/// One screen row
pub type Line = String<SCREEN_COLS>;

/// Text-mode screen buffer
///
/// At most one row is highlighted (inverted) at a time, which is all the
/// menus need for a cursor.
#[derive(Debug, Clone)]
pub struct Screen {
    lines: [Line; SCREEN_ROWS],
    highlight: Option<u8>,
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            highlight: None,
            dirty: true,
        }
    }

    /// Clear text and highlight
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.highlight = None;
        self.dirty = true;
    }

    /// Set the content of a row, truncating at the screen width
    pub fn set_line(&mut self, row: usize, text: &str) {
        if let Some(line) = self.lines.get_mut(row) {
            line.clear();
            for ch in text.chars() {
                if line.push(ch).is_err() {
                    break;
                }
            }
            self.dirty = true;
        }
    }

    /// Format into a row, truncating at the screen width
    pub fn set_line_fmt(&mut self, row: usize, args: fmt::Arguments<'_>) {
        if let Some(line) = self.lines.get_mut(row) {
            line.clear();
            let mut sink = Truncating(line);
            let _ = sink.write_fmt(args);
            self.dirty = true;
        }
    }

    /// Set a row with the text centred
    pub fn set_centered(&mut self, row: usize, text: &str) {
        let len = text.chars().count().min(SCREEN_COLS);
        let pad = (SCREEN_COLS - len) / 2;
        self.set_line_fmt(row, format_args!("{:pad$}{}", "", text, pad = pad));
    }

    /// Get the content of a row
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Highlight a full row
    pub fn set_highlight(&mut self, row: usize) {
        if row < SCREEN_ROWS {
            self.highlight = Some(row as u8);
            self.dirty = true;
        }
    }

    /// Currently highlighted row
    pub fn highlight(&self) -> Option<u8> {
        self.highlight
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after presenting)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// All rows, top to bottom
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }
}

/// Writer that drops whatever does not fit instead of failing
struct Truncating<'a>(&'a mut Line);

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.0.push(ch).is_err() {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}
