//! Core types shared across the engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Elemental damage type. `Physical` is a damage type but never a
/// character element or resonance element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Pyro,
    Hydro,
    Electro,
    Cryo,
    Anemo,
    Geo,
    Dendro,
    Physical,
}

impl Element {
    /// Get all damage types, physical included
    pub fn all() -> &'static [Element] {
        &[
            Element::Pyro,
            Element::Hydro,
            Element::Electro,
            Element::Cryo,
            Element::Anemo,
            Element::Geo,
            Element::Dendro,
            Element::Physical,
        ]
    }

    /// Lowercase key used in stat names (`pyro_dmg_bonus`, `res_shred_geo`, ...)
    pub fn key(self) -> &'static str {
        match self {
            Element::Pyro => "pyro",
            Element::Hydro => "hydro",
            Element::Electro => "electro",
            Element::Cryo => "cryo",
            Element::Anemo => "anemo",
            Element::Geo => "geo",
            Element::Dendro => "dendro",
            Element::Physical => "physical",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Talent category a talent level is tracked under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TalentCategory {
    /// Normal / charged / plunging attacks
    Na,
    Skill,
    Burst,
}

/// Stat a talent multiplier scales off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalingStat {
    Atk,
    Hp,
    Def,
    Em,
}

impl ScalingStat {
    /// Key of the resolved stat this scaling reads
    pub fn key(self) -> &'static str {
        match self {
            ScalingStat::Atk => "atk",
            ScalingStat::Hp => "hp",
            ScalingStat::Def => "def",
            ScalingStat::Em => "em",
        }
    }
}

/// Artifact equipment slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactSlot {
    Flower,
    Plume,
    Sands,
    Goblet,
    Circlet,
}

impl ArtifactSlot {
    /// Get all artifact slots
    pub fn all() -> &'static [ArtifactSlot] {
        &[
            ArtifactSlot::Flower,
            ArtifactSlot::Plume,
            ArtifactSlot::Sands,
            ArtifactSlot::Goblet,
            ArtifactSlot::Circlet,
        ]
    }
}

/// Reaction selected for an action
///
/// Aggravate/Spread add a separate damage term before multipliers,
/// Vaporize/Melt multiply on top of everything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReactionType {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "vaporize_1.5")]
    Vaporize15,
    #[serde(rename = "vaporize_2.0")]
    Vaporize20,
    #[serde(rename = "melt_1.5")]
    Melt15,
    #[serde(rename = "melt_2.0")]
    Melt20,
    #[serde(rename = "aggravate")]
    Aggravate,
    #[serde(rename = "spread")]
    Spread,
}

impl ReactionType {
    /// Base multiplier for amplifying reactions
    pub fn amplifying_base(self) -> Option<f64> {
        match self {
            ReactionType::Vaporize15 | ReactionType::Melt15 => Some(1.5),
            ReactionType::Vaporize20 | ReactionType::Melt20 => Some(2.0),
            _ => None,
        }
    }

    /// Whether this reaction adds a separate damage term
    pub fn is_additive(self) -> bool {
        matches!(self, ReactionType::Aggravate | ReactionType::Spread)
    }

    /// Reaction-specific bonus stat key, summed with `reaction_bonus`
    pub fn bonus_key(self) -> Option<&'static str> {
        match self {
            ReactionType::None => None,
            ReactionType::Vaporize15 | ReactionType::Vaporize20 => Some("vaporize_bonus"),
            ReactionType::Melt15 | ReactionType::Melt20 => Some("melt_bonus"),
            ReactionType::Aggravate => Some("aggravate_bonus"),
            ReactionType::Spread => Some("spread_bonus"),
        }
    }
}

/// Where a buff comes from; decides how its holder is looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuffSourceType {
    Character,
    Weapon,
    ArtifactSet,
    Constellation,
}

/// Who receives a constellation passive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuffTarget {
    #[default]
    Team,
    Holder,
}
