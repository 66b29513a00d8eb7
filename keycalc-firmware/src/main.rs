//! Keycalc - Four-Function Keypad Calculator Firmware
//!
//! Main firmware binary for RP2040-based boards. Reads a 4x4 matrix keypad,
//! runs a two-operand calculator and shows the expression and result on an
//! HD44780 character LCD.
//!
//! There is one loop and nothing else: no tasks, no interrupts. The only
//! waits are the fixed busy-waits the hardware needs.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use keycalc_core::calc::Action;
use keycalc_core::Controller;
use keycalc_drivers::{Hd44780, MatrixKeypad};
use keycalc_hal_rp2040::Board;

mod config;

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Keycalc firmware starting...");

    // Initialize RP2040 peripherals (clocks, time driver)
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let timing = config::timing();

    // Claim keypad and LCD lines once; the drivers own them from here on
    let board = Board::new(p);

    let keypad = MatrixKeypad::new(board.keypad, Delay);
    let lcd = Hd44780::new(board.lcd, Delay, &timing);

    let mut controller = Controller::new(keypad, lcd, Delay, timing);
    controller.start();
    info!("LCD initialized, ready for input");

    loop {
        match controller.step() {
            Some(Action::Result(value)) => info!("= {}", value),
            Some(action) => debug!("{}", action),
            None => {}
        }
    }
}
