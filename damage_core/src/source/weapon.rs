//! WeaponSource - Weapon substat and current refinement tier

use crate::definition::WeaponDefinition;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

/// Static stats from the equipped weapon
pub struct WeaponSource<'a> {
    pub key: &'a str,
    pub weapon: &'a WeaponDefinition,
    pub refinement: u8,
}

impl<'a> WeaponSource<'a> {
    pub fn new(key: &'a str, weapon: &'a WeaponDefinition, refinement: u8) -> Self {
        WeaponSource {
            key,
            weapon,
            refinement,
        }
    }
}

impl StatSource for WeaponSource<'_> {
    fn id(&self) -> &str {
        self.key
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.add_effects(&self.weapon.substats, 1.0);

        // Tiers mix stat deltas with descriptive fields; numbers only
        if let Some(tier) = self.weapon.refinement(self.refinement) {
            for (key, value) in tier.numeric_effects() {
                stats.add(key, value);
            }
        }
    }
}
