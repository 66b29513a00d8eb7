//! Calculator controller
//!
//! One pass of the main loop: scan the keypad, pass the raw key through the
//! edge filter, and for a new press wait out contact bounce, step the
//! calculator and update the display. Nothing here blocks except the injected
//! delay.

use embedded_hal::delay::DelayNs;

use crate::calc::{Action, Calculator, Output};
use crate::config::Timing;
use crate::edge::EdgeFilter;
use crate::traits::{CharDisplay, Keypad};

/// Owns the keypad, the display and the calculator state
pub struct Controller<K, D, W> {
    keypad: K,
    display: D,
    delay: W,
    filter: EdgeFilter,
    calculator: Calculator,
    timing: Timing,
}

impl<K, D, W> Controller<K, D, W>
where
    K: Keypad,
    D: CharDisplay,
    W: DelayNs,
{
    /// Create a controller in the power-on state
    pub fn new(keypad: K, display: D, delay: W, timing: Timing) -> Self {
        Self {
            keypad,
            display,
            delay,
            filter: EdgeFilter::new(),
            calculator: Calculator::new(),
            timing,
        }
    }

    /// Bring up the display. Call once before stepping.
    pub fn start(&mut self) {
        self.display.init();
    }

    /// Run one scan cycle
    ///
    /// Returns the action taken if the scan produced a new logical keypress.
    pub fn step(&mut self) -> Option<Action> {
        let raw = self.keypad.scan();
        let key = self.filter.feed(raw)?;

        self.delay.delay_ms(self.timing.debounce_ms);

        let action = self.calculator.press(key);
        if let Some(output) = action.output() {
            self.show(&output);
        }
        Some(action)
    }

    fn show(&mut self, output: &Output) {
        match output {
            Output::Append(text) => self.display.display(text, false),
            Output::Replace(text) => self.display.display(text, true),
            Output::Clear => self.display.clear(),
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    #[cfg(test)]
    fn keypad_mut(&mut self) -> &mut K {
        &mut self.keypad
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    #[cfg(test)]
    fn delay(&self) -> &W {
        &self.delay
    }
}
