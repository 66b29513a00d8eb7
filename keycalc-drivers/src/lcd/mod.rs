//! Character display drivers

pub mod hd44780;

pub use hd44780::{cmd, Hd44780, INIT_SEQUENCE};
