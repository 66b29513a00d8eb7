//! Timing configuration
//!
//! The only tunables in the system are the three fixed waits: the debounce
//! pause after a new key, the settle time after a display command, and the
//! enable strobe width.

/// Shortest settle delay the display tolerates after a command (ms)
pub const MIN_SETTLE_MS: u32 = 10;

/// Shortest enable high/low hold time (ms)
pub const MIN_STROBE_MS: u32 = 1;

/// Hardware timing in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Timing {
    /// Pause after a new key is detected, before it is processed
    pub debounce_ms: u32,
    /// Wait after each display configuration or clear command
    pub settle_ms: u32,
    /// Enable line high time, and low time after it
    pub strobe_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            debounce_ms: 200,
            settle_ms: MIN_SETTLE_MS,
            strobe_ms: MIN_STROBE_MS,
        }
    }
}

/// Invalid timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Settle delay below [`MIN_SETTLE_MS`]
    SettleTooShort(u32),
    /// Strobe width below [`MIN_STROBE_MS`]
    StrobeTooShort(u32),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::SettleTooShort(ms) => {
                write!(f, "settle_ms is {} but must be at least {}", ms, MIN_SETTLE_MS)
            }
            ConfigError::StrobeTooShort(ms) => {
                write!(f, "strobe_ms is {} but must be at least {}", ms, MIN_STROBE_MS)
            }
        }
    }
}

impl Timing {
    /// Check the display timing minimums
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.settle_ms < MIN_SETTLE_MS {
            return Err(ConfigError::SettleTooShort(self.settle_ms));
        }
        if self.strobe_ms < MIN_STROBE_MS {
            return Err(ConfigError::StrobeTooShort(self.strobe_ms));
        }
        Ok(())
    }

    /// Validated timing, or the defaults if invalid
    pub fn validated(self) -> Result<Self, (ConfigError, Self)> {
        match self.validate() {
            Ok(()) => Ok(self),
            Err(e) => Err((e, Self::default())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let timing = Timing::default();
        assert_eq!(timing.debounce_ms, 200);
        assert_eq!(timing.settle_ms, 10);
        assert_eq!(timing.strobe_ms, 1);
        assert!(timing.validate().is_ok());
    }

    #[test]
    fn test_rejects_short_settle() {
        let timing = Timing {
            settle_ms: 5,
            ..Timing::default()
        };
        assert_eq!(timing.validate(), Err(ConfigError::SettleTooShort(5)));
    }

    #[test]
    fn test_rejects_zero_strobe() {
        let timing = Timing {
            strobe_ms: 0,
            ..Timing::default()
        };
        assert_eq!(timing.validate(), Err(ConfigError::StrobeTooShort(0)));
    }

    #[test]
    fn test_zero_debounce_allowed() {
        let timing = Timing {
            debounce_ms: 0,
            ..Timing::default()
        };
        assert!(timing.validate().is_ok());
    }

    #[test]
    fn test_validated_fallback() {
        let bad = Timing {
            settle_ms: 1,
            debounce_ms: 50,
            ..Timing::default()
        };
        let (err, fallback) = bad.validated().unwrap_err();
        assert_eq!(err, ConfigError::SettleTooShort(1));
        assert_eq!(fallback, Timing::default());

        let good = Timing {
            debounce_ms: 50,
            ..Timing::default()
        };
        assert_eq!(good.validated(), Ok(good));
    }

    #[test]
    fn test_error_message() {
        let msg = ConfigError::StrobeTooShort(0).to_string();
        assert_eq!(msg, "strobe_ms is 0 but must be at least 1");
    }
}
