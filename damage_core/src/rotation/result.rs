//! RotationResult - Per-action damage, totals and breakdowns

use crate::damage::DamageResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Damage of one rotation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    /// Position in the rotation
    pub index: usize,
    pub character: Option<String>,
    pub talent: Option<String>,
    pub repeat: u32,
    /// Average damage of a single hit
    pub per_hit: f64,
    /// `per_hit * repeat`
    pub total: f64,
    /// `None` for placeholders
    pub damage: Option<DamageResult>,
}

impl ActionResult {
    pub fn is_placeholder(&self) -> bool {
        self.damage.is_none()
    }
}

/// One group of a breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub key: String,
    pub total: f64,
    pub dps: f64,
    /// Fraction of rotation damage, 0 when the rotation deals none
    pub share: f64,
}

/// Rotation damage grouped three ways
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Breakdowns {
    pub by_character: Vec<BreakdownEntry>,
    pub by_damage_type: Vec<BreakdownEntry>,
    /// Keyed `<character>.<talent>`
    pub by_talent: Vec<BreakdownEntry>,
}

/// Output of [`super::compute_rotation`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationResult {
    pub per_action: Vec<ActionResult>,
    pub total_damage: f64,
    pub dps: f64,
    /// Duration actually divided by
    pub duration: f64,
    pub breakdowns: Breakdowns,
}

impl RotationResult {
    /// Aggregate per-action results over a duration
    pub fn from_actions(per_action: Vec<ActionResult>, duration: f64) -> Self {
        let duration = if duration > 0.0 { duration } else { 1.0 };
        let total_damage: f64 = per_action.iter().map(|a| a.total).sum();

        let mut by_character = BTreeMap::new();
        let mut by_damage_type = BTreeMap::new();
        let mut by_talent = BTreeMap::new();

        for action in &per_action {
            let (Some(damage), Some(character), Some(talent)) =
                (&action.damage, &action.character, &action.talent)
            else {
                continue;
            };
            *by_character.entry(character.clone()).or_insert(0.0) += action.total;
            *by_damage_type.entry(damage.damage_type.key().to_string()).or_insert(0.0) += action.total;
            *by_talent.entry(format!("{}.{}", character, talent)).or_insert(0.0) += action.total;
        }

        RotationResult {
            per_action,
            total_damage,
            dps: total_damage / duration,
            duration,
            breakdowns: Breakdowns {
                by_character: entries(by_character, total_damage, duration),
                by_damage_type: entries(by_damage_type, total_damage, duration),
                by_talent: entries(by_talent, total_damage, duration),
            },
        }
    }

    /// Breakdown entry for one character
    pub fn character_entry(&self, character: &str) -> Option<&BreakdownEntry> {
        self.breakdowns.by_character.iter().find(|e| e.key == character)
    }
}

/// Sorted by total descending; key order breaks ties
fn entries(groups: BTreeMap<String, f64>, total_damage: f64, duration: f64) -> Vec<BreakdownEntry> {
    let mut entries: Vec<BreakdownEntry> = groups
        .into_iter()
        .map(|(key, total)| BreakdownEntry {
            key,
            total,
            dps: total / duration,
            share: if total_damage > 0.0 { total / total_damage } else { 0.0 },
        })
        .collect();
    // Stable sort over key-ordered input
    entries.sort_by(|a, b| b.total.total_cmp(&a.total));
    entries
}
