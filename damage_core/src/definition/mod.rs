//! Reference data shapes: characters, weapons, buffs, enemies
//!
//! All of these are read-only for the engine. They are deserialized from
//! TOML or JSON by [`crate::config`] and shared across computations.

mod buff;
mod character;
mod enemy;
mod weapon;

pub use buff::{BuffDefinition, DynamicRule, Ratio, StackableDescriptor, StatTable};
pub use character::{CharacterDefinition, StatBonus, TalentDefinition};
pub use enemy::EnemyDefinition;
pub use weapon::{RefinementTier, TierField, WeaponDefinition};

use std::collections::BTreeMap;

/// Stat key -> value map used by every static contribution
pub type EffectMap = BTreeMap<String, f64>;

/// Index a per-rank/per-level table with a 1-based position, clamped to the table
///
/// Returns 0.0 for an empty table.
pub fn lookup_clamped(values: &[f64], position: u32) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let index = (position.max(1) as usize - 1).min(values.len() - 1);
    values[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_clamped() {
        let values = [0.1, 0.2, 0.3];
        assert!((lookup_clamped(&values, 1) - 0.1).abs() < f64::EPSILON);
        assert!((lookup_clamped(&values, 3) - 0.3).abs() < f64::EPSILON);
        assert!((lookup_clamped(&values, 9) - 0.3).abs() < f64::EPSILON);
        assert!((lookup_clamped(&values, 0) - 0.1).abs() < f64::EPSILON);
        assert_eq!(lookup_clamped(&[], 2), 0.0);
    }
}
