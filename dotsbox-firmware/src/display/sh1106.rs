//! SH1106 OLED Display Driver
//!
//! Driver for 128x64 SH1106-based OLED displays via blocking I2C.
//! Text is laid out on a 6x8 pixel cell grid (21 chars x 8 rows) and
//! rasterised with an embedded-graphics mono font.

use dotsbox_display::{DisplayBackend, DisplayError};
use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::i2c::I2c;

/// SH1106 I2C address (typically 0x3C or 0x3D)
const SH1106_ADDR: u8 = 0x3C;

/// Display dimensions
const WIDTH: usize = 128;
const HEIGHT: usize = 64;
const PAGES: usize = HEIGHT / 8;

/// Character cell width in pixels
const CELL_WIDTH: usize = 6;

/// The 128 visible columns start at RAM column 2 of the 132-column SH1106
const COLUMN_OFFSET: u8 = 2;

/// SH1106 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Page-organised frame buffer, one bit per pixel
struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
                continue;
            };
            if x >= WIDTH || y >= HEIGHT {
                continue;
            }
            let bit = 1u8 << (y % 8);
            let byte = &mut self.pages[y / 8][x];
            match color {
                BinaryColor::On => *byte |= bit,
                BinaryColor::Off => *byte &= !bit,
            }
        }
        Ok(())
    }
}

/// SH1106 OLED driver
pub struct Sh1106<I2C> {
    i2c: I2C,
    frame: FrameBuffer,
    style: MonoTextStyle<'static, BinaryColor>,
    initialized: bool,
}

impl<I2C: I2c> Sh1106<I2C> {
    /// Create a new SH1106 driver
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            frame: FrameBuffer {
                pages: [[0; WIDTH]; PAGES],
            },
            style: MonoTextStyleBuilder::new()
                .font(&FONT_5X8)
                .text_color(BinaryColor::On)
                .build(),
            initialized: false,
        }
    }

    /// Initialize the display
    pub fn init(&mut self) -> Result<(), DisplayError> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80,
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            cmd::SET_CHARGE_PUMP,
            0x14,
            cmd::SET_SEG_REMAP,
            cmd::SET_COM_SCAN_DEC,
            cmd::SET_COM_PINS,
            0x12,
            cmd::SET_CONTRAST,
            0xCF,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c)?;
        }

        self.initialized = true;
        Ok(())
    }

    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(SH1106_ADDR, &[0x00, cmd])
            .map_err(|_| DisplayError::Communication)
    }
}

impl<I2C: I2c> DisplayBackend for Sh1106<I2C> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        for page in self.frame.pages.iter_mut() {
            page.fill(0);
        }
        Ok(())
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if row as usize >= PAGES {
            return Ok(());
        }

        let y = row as i32 * 8;
        let mut x = col as usize * CELL_WIDTH;
        let mut glyph = [0u8; 4];

        for ch in text.chars() {
            if x + CELL_WIDTH > WIDTH {
                break;
            }
            let s = ch.encode_utf8(&mut glyph);
            let _ = Text::with_baseline(s, Point::new(x as i32, y), self.style, Baseline::Top)
                .draw(&mut self.frame);
            x += CELL_WIDTH;
        }

        Ok(())
    }

    fn invert_region(&mut self, row: u8, start_col: u8, end_col: u8) -> Result<(), DisplayError> {
        if row as usize >= PAGES {
            return Ok(());
        }

        let page = &mut self.frame.pages[row as usize];
        let start_x = (start_col as usize * CELL_WIDTH).min(WIDTH);
        let end_x = (end_col as usize * CELL_WIDTH).min(WIDTH);

        for byte in &mut page[start_x..end_x] {
            *byte ^= 0xFF;
        }

        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        for page in 0..PAGES {
            self.command(cmd::SET_PAGE_ADDR | page as u8)?;
            self.command(cmd::SET_LOW_COLUMN | COLUMN_OFFSET)?;
            self.command(cmd::SET_HIGH_COLUMN)?;

            let mut data = [0u8; WIDTH + 1];
            data[0] = 0x40; // Data mode
            data[1..].copy_from_slice(&self.frame.pages[page]);
            self.i2c
                .write(SH1106_ADDR, &data)
                .map_err(|_| DisplayError::Communication)?;
        }

        Ok(())
    }
}
