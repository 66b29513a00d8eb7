//! Key edge filter
//!
//! Turns raw scans into logical keypresses. A key produces one event when it
//! first appears; holding it produces nothing more. Releasing (a scan with no
//! key) re-arms the filter, so the same key can be pressed again.
//!
//! This is an edge detector, not a sampling debouncer. Contact bounce is
//! suppressed by the fixed delay the controller inserts after each event.

use crate::key::Key;

/// Edge detector over raw keypad scans
#[derive(Debug, Clone, Default)]
pub struct EdgeFilter {
    /// Raw symbol behind the last reported event, cleared on release
    last: Option<Key>,
}

impl EdgeFilter {
    /// Create a filter with nothing held
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Feed one raw scan, returning the key if it is a new press
    pub fn feed(&mut self, raw: Option<Key>) -> Option<Key> {
        match raw {
            None => {
                self.last = None;
                None
            }
            Some(key) if self.last == Some(key) => None,
            Some(key) => {
                self.last = Some(key);
                Some(key)
            }
        }
    }

    /// Key currently considered held
    pub fn last_key(&self) -> Option<Key> {
        self.last
    }
}
