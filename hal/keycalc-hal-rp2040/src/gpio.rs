//! GPIO line implementations
//!
//! Thin wrappers that give embassy-rp pins the `keycalc-hal` line traits.
//! RP2040 GPIO cannot fail, so nothing is lost by the infallible traits.

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;
use keycalc_hal::{InputPin, OutputPin};

/// Push-pull output line
pub struct RpOutput<'d>(Output<'d>);

impl<'d> RpOutput<'d> {
    /// Configure `pin` as an output at `initial` level
    pub fn new(pin: Peri<'d, AnyPin>, initial: Level) -> Self {
        Self(Output::new(pin, initial))
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }
}

/// Input line
pub struct RpInput<'d>(Input<'d>);

impl<'d> RpInput<'d> {
    /// Configure `pin` as an input with the internal pull-up enabled
    pub fn pull_up(pin: Peri<'d, AnyPin>) -> Self {
        Self(Input::new(pin, Pull::Up))
    }
}

impl InputPin for RpInput<'_> {
    fn is_high(&mut self) -> bool {
        self.0.is_high()
    }
}
