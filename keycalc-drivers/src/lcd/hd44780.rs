//! HD44780 character LCD driver
//!
//! Driver for HD44780-compatible 16x2 character displays on an 8-bit parallel
//! bus. Write-only: the busy flag is never read, fixed waits cover the
//! controller's execution times instead.
//!
//! Every transfer puts RS and the byte on the lines, then pulses enable high
//! for the strobe width and holds it low for the same time. The controller
//! latches the bus on the falling edge.

use embedded_hal::delay::DelayNs;
use keycalc_core::config::Timing;
use keycalc_core::traits::CharDisplay;
use keycalc_hal::{DataBus, LcdLines, OutputPin, RegisterSelect};

/// HD44780 instruction codes
pub mod cmd {
    /// Clear display, cursor home
    pub const CLEAR: u8 = 0x01;
    /// Entry mode: increment cursor, no display shift
    pub const ENTRY_MODE_INCREMENT: u8 = 0x06;
    /// Display on, cursor off, blink off
    pub const DISPLAY_ON_CURSOR_OFF: u8 = 0x0C;
    /// Function set: 8-bit bus, two lines, 5x7 font
    pub const FUNCTION_SET_8BIT_2LINE: u8 = 0x38;
}

/// Power-up configuration, sent in order with a settle wait after each
pub const INIT_SEQUENCE: [u8; 4] = [
    cmd::FUNCTION_SET_8BIT_2LINE,
    cmd::DISPLAY_ON_CURSOR_OFF,
    cmd::CLEAR,
    cmd::ENTRY_MODE_INCREMENT,
];

/// HD44780 driver over named display lines
pub struct Hd44780<O, B, D> {
    lines: LcdLines<O, B>,
    delay: D,
    settle_ms: u32,
    strobe_ms: u32,
}

impl<O, B, D> Hd44780<O, B, D>
where
    O: OutputPin,
    B: DataBus,
    D: DelayNs,
{
    /// Create a driver; call [`CharDisplay::init`] before writing
    pub fn new(lines: LcdLines<O, B>, delay: D, timing: &Timing) -> Self {
        Self {
            lines,
            delay,
            settle_ms: timing.settle_ms,
            strobe_ms: timing.strobe_ms,
        }
    }

    /// Put one byte on the bus and latch it
    fn transfer(&mut self, select: RegisterSelect, byte: u8) {
        self.lines.present(select, byte);
        self.strobe();
    }

    /// Enable high, hold, enable low, hold
    fn strobe(&mut self) {
        self.lines.enable.set_high();
        self.delay.delay_ms(self.strobe_ms);
        self.lines.enable.set_low();
        self.delay.delay_ms(self.strobe_ms);
    }

    /// Send a command and wait for it to complete
    fn command_settled(&mut self, code: u8) {
        self.command(code);
        self.delay.delay_ms(self.settle_ms);
    }

    /// Give the lines back
    pub fn release(self) -> (LcdLines<O, B>, D) {
        (self.lines, self.delay)
    }
}

impl<O, B, D> CharDisplay for Hd44780<O, B, D>
where
    O: OutputPin,
    B: DataBus,
    D: DelayNs,
{
    fn init(&mut self) {
        for code in INIT_SEQUENCE {
            self.command_settled(code);
        }
    }

    fn command(&mut self, code: u8) {
        self.transfer(RegisterSelect::Command, code);
    }

    fn write(&mut self, byte: u8) {
        self.transfer(RegisterSelect::Data, byte);
    }

    fn clear(&mut self) {
        self.command_settled(cmd::CLEAR);
    }
}
