//! RP2040-specific HAL for the keypad calculator firmware
//!
//! This crate provides RP2040-specific implementations:
//! - `keycalc-hal` line traits over embassy-rp GPIO
//! - Board wiring for the keypad matrix and the character LCD

#![no_std]

pub mod board;
pub mod gpio;

pub use board::{Board, BoardKeypadLines, BoardLcdLines};
pub use gpio::{RpInput, RpOutput};
