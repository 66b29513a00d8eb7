//! Board-agnostic core logic for the keypad calculator
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Key symbols and the fixed 4x4 keypad layout
//! - Arithmetic engine
//! - Key edge filter
//! - Calculator state machine
//! - Hardware abstraction traits (keypad, character display)
//! - Timing configuration
//! - The scan/filter/calculate/display controller loop

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod arith;
pub mod calc;
pub mod config;
pub mod controller;
pub mod edge;
pub mod key;
pub mod traits;

pub use controller::Controller;
pub use key::{Key, Operator, LAYOUT};
