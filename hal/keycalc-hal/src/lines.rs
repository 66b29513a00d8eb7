//! Named hardware lines
//!
//! The calculator owns exactly two pieces of hardware. Each is handed over as
//! one bundle of named lines, constructed once at start-up by the board code
//! and then owned by its driver.

use crate::bus::DataBus;
use crate::gpio::{InputPin, OutputPin};

/// Rows and columns of the key matrix
pub const KEYPAD_SIZE: usize = 4;

/// Key matrix lines
///
/// Columns are driven outputs (active low, idle high). Rows are inputs with
/// pull-ups that read low when a key connects them to the driven column.
pub struct KeypadLines<C, R> {
    /// Column drive lines, column 0 first
    pub columns: [C; KEYPAD_SIZE],
    /// Row sense lines, row 0 first
    pub rows: [R; KEYPAD_SIZE],
}

impl<C: OutputPin, R: InputPin> KeypadLines<C, R> {
    /// Bundle the lines and park every column high (not selected)
    pub fn new(columns: [C; KEYPAD_SIZE], rows: [R; KEYPAD_SIZE]) -> Self {
        let mut lines = Self { columns, rows };
        lines.release_all();
        lines
    }

    /// Deselect every column
    pub fn release_all(&mut self) {
        for column in self.columns.iter_mut() {
            column.set_high();
        }
    }
}

/// Register select for a display transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterSelect {
    /// Instruction register (RS low)
    Command,
    /// Data register (RS high)
    Data,
}

/// Character display lines for an 8-bit HD44780-style controller
pub struct LcdLines<O, B> {
    /// Register select
    pub rs: O,
    /// Read/write mode; this design only ever writes
    pub rw: O,
    /// Enable strobe
    pub enable: O,
    /// Data bus D0-D7
    pub data: B,
}

impl<O: OutputPin, B: DataBus> LcdLines<O, B> {
    /// Bundle the lines with the strobe idle low and the bus in write mode
    pub fn new(rs: O, rw: O, enable: O, data: B) -> Self {
        let mut lines = Self {
            rs,
            rw,
            enable,
            data,
        };
        lines.enable.set_low();
        lines.rw.set_low();
        lines
    }

    /// Prepare a write transaction: select the register, force write mode
    /// and present the byte. The caller strobes enable afterwards.
    pub fn present(&mut self, select: RegisterSelect, byte: u8) {
        match select {
            RegisterSelect::Command => self.rs.set_low(),
            RegisterSelect::Data => self.rs.set_high(),
        }
        self.rw.set_low();
        self.data.put(byte);
    }
}
