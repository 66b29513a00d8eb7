//! Timing configuration
//!
//! Values come from calculator.toml. build.rs validates them and emits the
//! `CONFIGURED` constant included below.

use defmt::{info, warn};
use keycalc_core::config::Timing;

include!(concat!(env!("OUT_DIR"), "/timing.rs"));

/// Timing to run with; the defaults if the baked-in values fail validation
pub fn timing() -> Timing {
    match CONFIGURED.validated() {
        Ok(timing) => {
            info!(
                "Timing: debounce={}ms settle={}ms strobe={}ms",
                timing.debounce_ms, timing.settle_ms, timing.strobe_ms
            );
            timing
        }
        Err((e, fallback)) => {
            warn!("Invalid timing config ({}), using defaults", e);
            fallback
        }
    }
}
