//! EnemyDefinition - Level and base resistances of a target

use crate::types::Element;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable enemy reference data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyDefinition {
    #[serde(default)]
    pub name: String,
    pub level: u32,
    /// Base resistance per element as a fraction (0.10 = 10%). May be negative
    /// or very large.
    #[serde(default)]
    pub resistances: BTreeMap<Element, f64>,
}

impl EnemyDefinition {
    /// Enemy with the same resistance to every element
    pub fn uniform(level: u32, resistance: f64) -> Self {
        EnemyDefinition {
            name: String::new(),
            level,
            resistances: Element::all().iter().map(|e| (*e, resistance)).collect(),
        }
    }

    /// Base resistance to a damage type; unlisted elements resist nothing
    pub fn resistance(&self, element: Element) -> f64 {
        self.resistances.get(&element).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_enemy() {
        let enemy = EnemyDefinition::uniform(90, 0.10);
        assert!((enemy.resistance(Element::Geo) - 0.10).abs() < f64::EPSILON);
        assert!((enemy.resistance(Element::Physical) - 0.10).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_resistance_is_zero() {
        let enemy: EnemyDefinition = toml::from_str("level = 100\n[resistances]\npyro = 0.7\n").unwrap();
        assert_eq!(enemy.resistance(Element::Hydro), 0.0);
        assert!((enemy.resistance(Element::Pyro) - 0.7).abs() < f64::EPSILON);
    }
}
