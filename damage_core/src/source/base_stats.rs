//! BaseStatsSource - Character and weapon base values plus ascension

use crate::definition::{CharacterDefinition, WeaponDefinition};
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

/// Base HP/ATK/DEF and the ascension bonus
pub struct BaseStatsSource<'a> {
    pub character: &'a CharacterDefinition,
    /// `None` when nothing is equipped
    pub weapon: Option<&'a WeaponDefinition>,
}

impl<'a> BaseStatsSource<'a> {
    /// Create a new base stats source
    pub fn new(character: &'a CharacterDefinition, weapon: Option<&'a WeaponDefinition>) -> Self {
        BaseStatsSource { character, weapon }
    }
}

impl StatSource for BaseStatsSource<'_> {
    fn id(&self) -> &str {
        "base_stats"
    }

    fn priority(&self) -> i32 {
        -100 // Base stats apply first
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.hp.add_base(self.character.base_hp);
        let weapon_atk = self.weapon.map(|w| w.base_atk).unwrap_or(0.0);
        stats.atk.add_base(self.character.base_atk + weapon_atk);
        stats.def.add_base(self.character.base_def);

        if let Some(ref ascension) = self.character.ascension {
            stats.add(&ascension.stat, ascension.value);
        }
    }
}
