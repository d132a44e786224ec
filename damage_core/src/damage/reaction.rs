//! Elemental reaction terms
//!
//! Additive reactions (Aggravate, Spread) add a second damage instance
//! before multipliers. Amplifying reactions (Vaporize, Melt) multiply the
//! final result.

use crate::config::{AdditiveReactionConstants, AmplifyingReactionConstants};
use crate::types::ReactionType;

/// Additive reaction damage, zero for every other reaction
///
/// `coefficient * level_constant * (1 + 5·EM / (1200 + EM) + bonus)`
pub fn additive_damage(
    reaction: ReactionType,
    em: f64,
    reaction_bonus: f64,
    constants: &AdditiveReactionConstants,
) -> f64 {
    let coefficient = match reaction {
        ReactionType::Aggravate => constants.aggravate_coefficient,
        ReactionType::Spread => constants.spread_coefficient,
        _ => return 0.0,
    };
    let em_bonus = constants.em_scale * em / (constants.em_offset + em);
    coefficient * constants.level_constant * (1.0 + em_bonus + reaction_bonus)
}

/// Amplifying reaction multiplier, 1 when no amplifying reaction applies
///
/// `base * (1 + 2.78·EM / (1400 + EM) + bonus)`
pub fn amplifying_multiplier(
    reaction: ReactionType,
    em: f64,
    reaction_bonus: f64,
    constants: &AmplifyingReactionConstants,
) -> f64 {
    match reaction.amplifying_base() {
        Some(base) => {
            let em_bonus = constants.em_scale * em / (constants.em_offset + em);
            base * (1.0 + em_bonus + reaction_bonus)
        }
        None => 1.0,
    }
}
