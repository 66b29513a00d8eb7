//! Board wiring
//!
//! Pin assignment is board-specific. On the reference build (Raspberry Pi
//! Pico on a breadboard):
//!
//! | Function        | GPIO       |
//! |-----------------|------------|
//! | Keypad col 0-3  | 2, 3, 4, 5 |
//! | Keypad row 0-3  | 6, 7, 8, 9 |
//! | LCD RS          | 10         |
//! | LCD R/W         | 11         |
//! | LCD E           | 12         |
//! | LCD D0-D7       | 13 - 20    |

use embassy_rp::gpio::{AnyPin, Level};
use embassy_rp::{Peri, Peripherals};
use keycalc_hal::{KeypadLines, LcdLines};

use crate::gpio::{RpInput, RpOutput};

/// Keypad lines as wired on this board
pub type BoardKeypadLines = KeypadLines<RpOutput<'static>, RpInput<'static>>;

/// LCD lines as wired on this board
pub type BoardLcdLines = LcdLines<RpOutput<'static>, [RpOutput<'static>; 8]>;

/// All hardware the calculator uses
pub struct Board {
    pub keypad: BoardKeypadLines,
    pub lcd: BoardLcdLines,
}

impl Board {
    /// Claim and configure the calculator's pins
    ///
    /// Columns start high (deselected), rows are pulled up, the LCD strobe
    /// starts low.
    pub fn new(p: Peripherals) -> Self {
        let column = |pin: Peri<'static, AnyPin>| RpOutput::new(pin, Level::High);
        let low = |pin: Peri<'static, AnyPin>| RpOutput::new(pin, Level::Low);

        let keypad = KeypadLines::new(
            [
                column(p.PIN_2.into()),
                column(p.PIN_3.into()),
                column(p.PIN_4.into()),
                column(p.PIN_5.into()),
            ],
            [
                RpInput::pull_up(p.PIN_6.into()),
                RpInput::pull_up(p.PIN_7.into()),
                RpInput::pull_up(p.PIN_8.into()),
                RpInput::pull_up(p.PIN_9.into()),
            ],
        );

        let lcd = LcdLines::new(
            low(p.PIN_10.into()),
            low(p.PIN_11.into()),
            low(p.PIN_12.into()),
            [
                low(p.PIN_13.into()),
                low(p.PIN_14.into()),
                low(p.PIN_15.into()),
                low(p.PIN_16.into()),
                low(p.PIN_17.into()),
                low(p.PIN_18.into()),
                low(p.PIN_19.into()),
                low(p.PIN_20.into()),
            ],
        );

        Self { keypad, lcd }
    }
}
