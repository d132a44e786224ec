//! StatAccumulator - Collects stat contributions before assembly

use super::keys;
use super::{ResolvedStats, StatValue};
use crate::config::BaselineConstants;
use crate::definition::EffectMap;
use std::collections::BTreeMap;

/// Accumulates stat contributions from every source
///
/// Percent and flat contributions to HP/ATK/DEF stay separate until
/// [`StatAccumulator::assemble`]; every other key is a plain running sum.
#[derive(Debug, Clone, Default)]
pub struct StatAccumulator {
    pub hp: StatValue,
    pub atk: StatValue,
    pub def: StatValue,
    others: BTreeMap<String, f64>,
}

impl StatAccumulator {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        StatAccumulator::default()
    }

    /// Add one contribution, routing scaling keys to their StatValue
    pub fn add(&mut self, key: &str, value: f64) {
        match key {
            keys::HP => self.hp.add_flat(value),
            keys::HP_PERCENT => self.hp.add_percent(value),
            keys::ATK => self.atk.add_flat(value),
            keys::ATK_PERCENT => self.atk.add_percent(value),
            keys::DEF => self.def.add_flat(value),
            keys::DEF_PERCENT => self.def.add_percent(value),
            keys::BASE_ATK_FLAT => self.atk.add_base(value),
            _ => *self.others.entry(key.to_string()).or_insert(0.0) += value,
        }
    }

    /// Add every entry of an effect map, scaled
    pub fn add_effects(&mut self, effects: &EffectMap, scale: f64) {
        for (key, value) in effects {
            self.add(key, value * scale);
        }
    }

    /// Current sum for a pass-through key
    pub fn get(&self, key: &str) -> f64 {
        self.others.get(key).copied().unwrap_or(0.0)
    }

    /// Convert into absolute stats and apply the baseline floors
    pub fn assemble(self, baseline: &BaselineConstants) -> ResolvedStats {
        let mut resolved = ResolvedStats::from_map(self.others);

        resolved.set(keys::BASE_HP, self.hp.base);
        resolved.set(keys::BASE_ATK, self.atk.base);
        resolved.set(keys::BASE_DEF, self.def.base);
        resolved.set(keys::HP, self.hp.compute());
        resolved.set(keys::ATK, self.atk.compute());
        resolved.set(keys::DEF, self.def.compute());

        resolved.add(keys::CRIT_RATE, baseline.crit_rate);
        resolved.add(keys::CRIT_DMG, baseline.crit_dmg);
        resolved.add(keys::ER, baseline.er);

        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing() {
        let mut acc = StatAccumulator::new();
        acc.add("atk", 311.0);
        acc.add("atk_percent", 0.466);
        acc.add("em", 80.0);
        acc.add("em", 20.0);
        assert!((acc.atk.flat - 311.0).abs() < f64::EPSILON);
        assert!((acc.atk.percent - 0.466).abs() < f64::EPSILON);
        assert!((acc.get("em") - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_base_atk_flat_mutates_base() {
        let mut acc = StatAccumulator::new();
        acc.atk = StatValue::with_base(500.0);
        acc.add("base_atk_flat", 100.0);
        acc.add("atk_percent", 0.5);
        let resolved = acc.assemble(&BaselineConstants::default());
        assert!((resolved.get("base_atk") - 600.0).abs() < 1e-9);
        assert!((resolved.get("atk") - 900.0).abs() < 1e-9);
    }

    #[test]
    fn test_assemble_baseline_floor() {
        let resolved = StatAccumulator::new().assemble(&BaselineConstants::default());
        assert_eq!(resolved.get("crit_rate"), 0.05);
        assert_eq!(resolved.get("crit_dmg"), 0.50);
        assert_eq!(resolved.get("er"), 1.0);
        assert!(!resolved.contains("atk_percent"));
    }

    #[test]
    fn test_scaled_effects() {
        let mut acc = StatAccumulator::new();
        let effects: EffectMap = [("pyro_dmg_bonus".to_string(), 0.1)].into();
        acc.add_effects(&effects, 1.5);
        assert!((acc.get("pyro_dmg_bonus") - 0.15).abs() < 1e-12);
    }
}
