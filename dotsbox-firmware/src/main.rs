//! Dots and Boxes Firmware
//!
//! Main firmware binary for RP2040-based boards (Raspberry Pi Pico).
//! Screens are shown on an SH1106 OLED and navigated with four buttons;
//! moves are typed on a serial terminal attached to UART0.
//!
//! Everything runs in one polling loop: sample the buttons, hand the
//! result to the controller (which also drains the terminal), and
//! refresh the display and status LED.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::{Duration, Instant, Ticker};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use dotsbox_core::state::Event;
use dotsbox_core::terminal::SerialTerminal;
use dotsbox_core::Controller;
use dotsbox_hal::{Color, RgbLed};

use crate::board::{ButtonPin, LedPin, TerminalUart};
use crate::display::Sh1106;
use crate::input::ButtonPanel;

mod board;
mod config;
mod display;
mod input;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// Main loop period
const POLL_INTERVAL_MS: u64 = 5;

/// I2C clock for the OLED
const I2C_FREQUENCY_HZ: u32 = 400_000;

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 512]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Dots and Boxes firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    // Setup UART for the player terminal
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = config.terminal.baud.bps();

    let tx_buf = TX_BUF.init([0u8; 512]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let mut terminal = SerialTerminal::new(TerminalUart::new(uart), &config.terminal);

    info!("UART initialized at {} baud", config.terminal.baud.bps());

    // Setup I2C OLED
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_3, p.PIN_2, i2c_config);

    let mut display = Sh1106::new(i2c);
    match display.init() {
        Ok(()) => info!("Display initialized"),
        Err(e) => warn!("Display init failed: {}", e),
    }

    // Buttons pull their line low when pressed
    let mut buttons = ButtonPanel::new(
        ButtonPin(Input::new(p.PIN_10, Pull::Up)),
        ButtonPin(Input::new(p.PIN_11, Pull::Up)),
        ButtonPin(Input::new(p.PIN_12, Pull::Up)),
        ButtonPin(Input::new(p.PIN_13, Pull::Up)),
        config.buttons,
    );

    // Status LED shows the terminal baud rate
    let mut led = RgbLed::new(
        LedPin(Output::new(p.PIN_16, Level::Low)),
        LedPin(Output::new(p.PIN_17, Level::Low)),
        LedPin(Output::new(p.PIN_18, Level::Low)),
    );
    led.show(Color::from(config.terminal.baud));

    let mut controller = Controller::new(&config);

    info!("Entering main loop");

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    let start = Instant::now();

    loop {
        ticker.next().await;

        let now_ms = start.elapsed().as_millis() as u32;
        let input = buttons.poll(now_ms);
        if let Some(input) = input {
            debug!("Input: {} in {}", input, controller.state());
        }

        // The event has taken effect even when a write failed
        let event = match controller.poll(input, &mut terminal, &mut display) {
            Ok(event) => event,
            Err(e) => {
                warn!("I/O error: {}", e.error);
                e.event
            }
        };

        let Some(event) = event else {
            continue;
        };
        debug!("Event: {} -> {}", event, controller.state());

        match event {
            Event::BaudChanged(baud) => {
                led.show(Color::from(baud));
                info!("Terminal baud now {}", baud.bps());
            }
            Event::StartGame => {
                let size = controller.game().size();
                info!("Game started on {}x{} board", size.width.get(), size.height.get());
            }
            Event::GameOver => {
                let score = controller.game().scores().finish();
                info!("Game over: P1 {} - P2 {}", score.first, score.second);
            }
            Event::Abort => info!("Game abandoned"),
            Event::Proceed | Event::Back => {}
        }
    }
}
