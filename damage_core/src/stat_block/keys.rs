//! Stat key vocabulary
//!
//! Effect maps are keyed by these strings. `hp`/`atk`/`def` in an effect map
//! are flat additions; in a resolved block they are the final absolute values.

use crate::types::Element;

pub const HP: &str = "hp";
pub const ATK: &str = "atk";
pub const DEF: &str = "def";
pub const HP_PERCENT: &str = "hp_percent";
pub const ATK_PERCENT: &str = "atk_percent";
pub const DEF_PERCENT: &str = "def_percent";

pub const BASE_HP: &str = "base_hp";
pub const BASE_ATK: &str = "base_atk";
pub const BASE_DEF: &str = "base_def";
/// Adjusts the character's own base ATK rather than a derived stat
pub const BASE_ATK_FLAT: &str = "base_atk_flat";

pub const CRIT_RATE: &str = "crit_rate";
pub const CRIT_DMG: &str = "crit_dmg";
pub const EM: &str = "em";
pub const ER: &str = "er";

pub const ALL_DMG_BONUS: &str = "all_dmg_bonus";
pub const DEF_SHRED: &str = "def_shred";
pub const ALL_RES_SHRED: &str = "all_res_shred";
pub const REACTION_BONUS: &str = "reaction_bonus";

/// `<element>_dmg_bonus`
pub fn dmg_bonus_key(element: Element) -> String {
    format!("{}_dmg_bonus", element.key())
}

/// `res_shred_<element>`
pub fn res_shred_key(element: Element) -> String {
    format!("res_shred_{}", element.key())
}

/// For a percent-of-base key, the (base key, absolute key) it resolves against
pub fn percent_base(key: &str) -> Option<(&'static str, &'static str)> {
    match key {
        HP_PERCENT => Some((BASE_HP, HP)),
        ATK_PERCENT => Some((BASE_ATK, ATK)),
        DEF_PERCENT => Some((BASE_DEF, DEF)),
        _ => None,
    }
}
