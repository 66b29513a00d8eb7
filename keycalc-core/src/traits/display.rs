//! Character display trait

/// A character display driven by command and data writes
///
/// Text streams from the current cursor position and the controller's own
/// auto-increment moves the cursor; nothing here addresses positions.
pub trait CharDisplay {
    /// Run the power-up configuration sequence
    fn init(&mut self);

    /// Send a command byte
    fn command(&mut self, code: u8);

    /// Write one character at the cursor
    fn write(&mut self, byte: u8);

    /// Clear the display and home the cursor, waiting for it to settle
    fn clear(&mut self);

    /// Write `text`, optionally clearing first
    fn display(&mut self, text: &str, clear_first: bool) {
        if clear_first {
            self.clear();
        }
        for byte in text.bytes() {
            self.write(byte);
        }
    }
}
