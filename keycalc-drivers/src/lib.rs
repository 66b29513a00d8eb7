//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in keycalc-core, written against the line traits of keycalc-hal:
//!
//! - Keypad: 4x4 matrix scanner
//! - Display: HD44780-compatible character LCD on an 8-bit bus

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod keypad;
pub mod lcd;

pub use keypad::MatrixKeypad;
pub use lcd::Hd44780;
