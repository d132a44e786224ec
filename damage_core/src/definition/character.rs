//! CharacterDefinition - Base stats and talents of a playable character

use crate::types::{Element, ScalingStat, TalentCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single stat + value pair (ascension bonus)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatBonus {
    pub stat: String,
    pub value: f64,
}

/// Immutable character reference data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterDefinition {
    /// Display name
    #[serde(default)]
    pub name: String,
    pub element: Element,
    #[serde(default)]
    pub weapon_type: String,
    pub base_hp: f64,
    pub base_atk: f64,
    pub base_def: f64,
    /// Stat granted by ascension
    #[serde(default)]
    pub ascension: Option<StatBonus>,
    /// Talent key -> definition
    #[serde(default)]
    pub talents: BTreeMap<String, TalentDefinition>,
}

impl CharacterDefinition {
    /// Get a talent by key
    pub fn talent(&self, key: &str) -> Option<&TalentDefinition> {
        self.talents.get(key)
    }
}

/// How one talent hit scales
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalentDefinition {
    /// Which talent level drives this hit
    pub category: TalentCategory,
    pub scaling_stat: ScalingStat,
    /// Multipliers indexed by talent level - 1
    pub multipliers: Vec<f64>,
    /// Secondary scaling component (dual-scaling abilities)
    #[serde(default)]
    pub flat_scaling_stat: Option<ScalingStat>,
    #[serde(default)]
    pub flat_multipliers: Vec<f64>,
    /// Overrides the character's element (e.g. physical normal attacks)
    #[serde(default)]
    pub element: Option<Element>,
    /// Whether an infusion may override the damage type
    #[serde(default)]
    pub infusable: bool,
}

impl TalentDefinition {
    /// Multiplier at a talent level (clamped to the table)
    pub fn multiplier_at(&self, level: u32) -> f64 {
        super::lookup_clamped(&self.multipliers, level)
    }

    /// Secondary multiplier at a talent level, 0 when there is no secondary scaling
    pub fn flat_multiplier_at(&self, level: u32) -> f64 {
        if self.flat_scaling_stat.is_none() {
            return 0.0;
        }
        super::lookup_clamped(&self.flat_multipliers, level)
    }
}
