//! Defense system - Enemy defense and resistance multipliers

mod level;
mod resistance;

pub use level::{defense_multiplier, effective_defense_factor};
pub use resistance::{effective_resistance, resistance_multiplier};

/// Defense calculation constants
pub mod constants {
    /// Added to both character and enemy level in the defense formula
    pub const LEVEL_OFFSET: f64 = 100.0;

    /// Effective resistance at which the curve switches to inverse scaling
    pub const HIGH_RESISTANCE_THRESHOLD: f64 = 0.75;

    /// Negative resistance counts at this rate
    pub const NEGATIVE_RESISTANCE_RATE: f64 = 0.5;
}
