//! Level-based enemy defense
//!
//! Formula:
//! `mult = (char_level + 100) / ((char_level + 100) + (enemy_level + 100) * (1 - def_shred))`

use super::constants::LEVEL_OFFSET;

/// Fraction of the enemy's defense still standing after shred
pub fn effective_defense_factor(def_shred: f64) -> f64 {
    1.0 - def_shred
}

/// Damage multiplier from enemy defense
///
/// # Arguments
/// * `character_level` - Attacker level
/// * `enemy_level` - Defender level
/// * `def_shred` - Fractional defense reduction (0.3 = 30%)
pub fn defense_multiplier(character_level: u32, enemy_level: u32, def_shred: f64) -> f64 {
    let attacker = character_level as f64 + LEVEL_OFFSET;
    let defender = (enemy_level as f64 + LEVEL_OFFSET) * effective_defense_factor(def_shred);
    attacker / (attacker + defender)
}
