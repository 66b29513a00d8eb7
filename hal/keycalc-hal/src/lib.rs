//! Keycalc Hardware Abstraction Layer
//!
//! This crate defines the line-level traits the calculator logic is written
//! against. Chip-specific HALs (RP2040 today) implement them, and host tests
//! implement them with simulated lines.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  keycalc-core / keycalc-drivers         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  keycalc-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ keycalc-hal-  │       │  simulated    │
//! │    rp2040     │       │  test lines   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`bus::DataBus`] - 8-bit parallel data bus
//!
//! # Hardware context
//!
//! - [`lines::KeypadLines`] - 4 column drives + 4 row senses
//! - [`lines::LcdLines`] - RS, R/W, E and the data bus

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bus;
pub mod gpio;
pub mod lines;

// Re-export key traits at crate root for convenience
pub use bus::DataBus;
pub use gpio::{InputPin, OutputPin};
pub use lines::{KeypadLines, LcdLines, RegisterSelect, KEYPAD_SIZE};
