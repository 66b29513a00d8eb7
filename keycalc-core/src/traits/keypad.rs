//! Keypad trait

use crate::key::Key;

/// A source of raw key scans
pub trait Keypad {
    /// Scan the matrix once and return the key currently down, if any
    ///
    /// A held key is returned on every scan; turning that into one press is
    /// the job of [`crate::edge::EdgeFilter`].
    fn scan(&mut self) -> Option<Key>;
}
