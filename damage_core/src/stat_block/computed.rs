//! Derived values read from a resolved stat block

use super::keys;
use super::ResolvedStats;
use crate::types::{Element, ReactionType};

impl ResolvedStats {
    /// Crit rate clamped to [0, 1]
    pub fn crit_rate(&self) -> f64 {
        let rate = self.get(keys::CRIT_RATE);
        if rate.is_nan() {
            return 0.0;
        }
        rate.clamp(0.0, 1.0)
    }

    /// `1 + crit_dmg`, unbounded
    pub fn crit_multiplier(&self) -> f64 {
        1.0 + self.get(keys::CRIT_DMG)
    }

    /// `1 + <element>_dmg_bonus + all_dmg_bonus`
    pub fn dmg_bonus_multiplier(&self, damage_type: Element) -> f64 {
        1.0 + self.get(&keys::dmg_bonus_key(damage_type)) + self.get(keys::ALL_DMG_BONUS)
    }

    /// Total resistance shred against one damage type
    pub fn res_shred(&self, damage_type: Element) -> f64 {
        self.get(keys::ALL_RES_SHRED) + self.get(&keys::res_shred_key(damage_type))
    }

    pub fn def_shred(&self) -> f64 {
        self.get(keys::DEF_SHRED)
    }

    pub fn em(&self) -> f64 {
        self.get(keys::EM)
    }

    /// `reaction_bonus` plus the selected reaction's own bonus key
    pub fn reaction_bonus(&self, reaction: ReactionType) -> f64 {
        let specific = reaction.bonus_key().map(|k| self.get(k)).unwrap_or(0.0);
        self.get(keys::REACTION_BONUS) + specific
    }
}
