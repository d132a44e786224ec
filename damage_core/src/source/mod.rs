//! StatSource - Trait and implementations for stat providers

mod artifact;
mod base_stats;
mod buff;
mod constellation;
mod resonance;
mod weapon;

pub use artifact::{ArtifactSource, SetBonusSource};
pub use base_stats::BaseStatsSource;
pub use buff::{enhancement_multiplier, BuffSource};
pub use constellation::ConstellationSource;
pub use resonance::ResonanceSource;
pub use weapon::WeaponSource;

use crate::stat_block::StatAccumulator;

/// Trait for anything that contributes stats to a resolved block
pub trait StatSource: Send + Sync {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Priority for application order (higher = applied later)
    /// Default priority is 0.
    /// Priorities used by the built-in sources:
    /// - Base stats + ascension: -100
    /// - Weapon substat + refinement: 0
    /// - Artifact pieces: 10
    /// - Artifact set bonus: 20
    /// - Constellation passives: 30
    /// - Team resonance: 40
    /// - Toggled buffs: 200
    fn priority(&self) -> i32 {
        0
    }

    /// Apply this source's stats to the accumulator
    fn apply(&self, stats: &mut StatAccumulator);
}
