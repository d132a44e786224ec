//! WeaponDefinition - Base ATK, substat and refinement tiers

use super::EffectMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One field of a refinement tier. Tiers mix stat deltas with descriptive
/// metadata; only numbers contribute to stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TierField {
    Number(f64),
    Flag(bool),
    Text(String),
    /// Lists, tables and anything else descriptive
    Other(serde_json::Value),
}

/// Passive values at one refinement rank
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefinementTier(pub BTreeMap<String, TierField>);

impl RefinementTier {
    /// Numeric fields only
    pub fn numeric_effects(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.0.iter().filter_map(|(key, field)| match field {
            TierField::Number(value) => Some((key.as_str(), *value)),
            _ => None,
        })
    }
}

/// Immutable weapon reference data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponDefinition {
    #[serde(default)]
    pub name: String,
    pub base_atk: f64,
    /// Static substat
    #[serde(default)]
    pub substats: EffectMap,
    /// Tiers indexed by refinement rank - 1
    #[serde(default)]
    pub refinements: Vec<RefinementTier>,
}

impl WeaponDefinition {
    /// Tier for a refinement rank, clamped to 1..=5
    pub fn refinement(&self, rank: u8) -> Option<&RefinementTier> {
        if self.refinements.is_empty() {
            return None;
        }
        let index = (rank.clamp(1, 5) as usize - 1).min(self.refinements.len() - 1);
        self.refinements.get(index)
    }
}
