//! Resistance - Elemental damage mitigation with shred
//!
//! Formula, on effective resistance `r`:
//! - `r < 0`: `mult = 1 - r / 2`
//! - `r >= 0.75`: `mult = 1 / (4r + 1)`
//! - otherwise: `mult = 1 - r`

use super::constants::{HIGH_RESISTANCE_THRESHOLD, NEGATIVE_RESISTANCE_RATE};

/// Enemy base resistance minus total shred
pub fn effective_resistance(base_resistance: f64, shred: f64) -> f64 {
    base_resistance - shred
}

/// Damage multiplier for an effective resistance
pub fn resistance_multiplier(effective_res: f64) -> f64 {
    if effective_res < 0.0 {
        1.0 - effective_res * NEGATIVE_RESISTANCE_RATE
    } else if effective_res >= HIGH_RESISTANCE_THRESHOLD {
        1.0 / (4.0 * effective_res + 1.0)
    } else {
        1.0 - effective_res
    }
}
