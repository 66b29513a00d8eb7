//! Keypad drivers

pub mod matrix;

pub use matrix::{MatrixKeypad, COLUMN_SETTLE_US};
