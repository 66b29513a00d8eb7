//! Parallel data bus
//!
//! The character display samples eight data lines on the falling edge of its
//! enable strobe. Anything that can present a byte on eight lines is a bus.

use crate::gpio::OutputPin;

/// 8-bit parallel output bus
pub trait DataBus {
    /// Drive `byte` onto the bus, bit 0 on line D0
    fn put(&mut self, byte: u8);
}

/// Eight individual output lines, D0 first
impl<P: OutputPin> DataBus for [P; 8] {
    fn put(&mut self, byte: u8) {
        for (bit, line) in self.iter_mut().enumerate() {
            line.set_state(byte & (1 << bit) != 0);
        }
    }
}
