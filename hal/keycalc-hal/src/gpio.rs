//! GPIO pin abstractions
//!
//! Provides traits for digital input and output lines that can be implemented
//! by chip-specific HALs. Both are infallible: a line that can fail to toggle
//! has no meaning for the keypad or the display.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// Digital input pin
///
/// Takes `&mut self` so implementations may sample through a peripheral
/// handle that needs exclusive access.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

impl<T: OutputPin + ?Sized> OutputPin for &mut T {
    fn set_high(&mut self) {
        (**self).set_high();
    }

    fn set_low(&mut self) {
        (**self).set_low();
    }
}

impl<T: InputPin + ?Sized> InputPin for &mut T {
    fn is_high(&mut self) -> bool {
        (**self).is_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_set_state() {
        let mut pin = MockPin { high: false };

        pin.set_state(true);
        assert!(pin.is_high());

        pin.set_state(false);
        assert!(pin.is_low());
    }

    #[test]
    fn test_through_mut_reference() {
        fn drive_low<P: OutputPin>(mut pin: P) {
            pin.set_low();
        }

        fn sample<P: InputPin>(mut pin: P) -> bool {
            pin.is_high()
        }

        let mut pin = MockPin { high: true };
        drive_low(&mut pin);

        assert!(!pin.high);
        assert!(!sample(&mut pin));
    }
}
