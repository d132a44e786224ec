//! DamageResult - The output of damage calculation

use crate::types::Element;
use serde::{Deserialize, Serialize};

/// Expected damage of one hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageResult {
    /// Crit-weighted average
    pub avg: f64,
    pub crit: f64,
    pub non_crit: f64,
    /// Crit rate used for the average, clamped to [0, 1]
    pub crit_rate: f64,
    pub damage_type: Element,
    pub trace: DamageTrace,
}

/// Intermediate values of the damage formula, for display only
///
/// These are never clamped, so they stay faithful to the formula even
/// when the final numbers are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageTrace {
    /// Talent multiplier at the resolved level
    pub multiplier: f64,
    /// Value of the talent's scaling stat
    pub scaling_value: f64,
    /// Talent scaling damage, including any secondary flat scaling
    pub base_damage: f64,
    /// Flat bonuses from stack-based rules
    pub flat_bonus: f64,
    pub additive_damage: f64,
    /// `base_damage + flat_bonus + additive_damage`
    pub outgoing_damage: f64,
    pub dmg_bonus_mult: f64,
    pub crit_multiplier: f64,
    pub def_mult: f64,
    pub effective_res: f64,
    pub res_mult: f64,
    pub reaction_mult: f64,
}
