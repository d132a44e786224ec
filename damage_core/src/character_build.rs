//! Caller-owned build and per-action buff state
//!
//! The engine only ever reads these.

use crate::definition::EffectMap;
use crate::types::{ArtifactSlot, TalentCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Equipped weapon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponRef {
    pub key: String,
    #[serde(default = "default_refinement")]
    pub refinement: u8,
}

fn default_refinement() -> u8 {
    1
}

/// Talent levels per category (1-15)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentLevels {
    #[serde(default = "default_talent_level")]
    pub na: u32,
    #[serde(default = "default_talent_level")]
    pub skill: u32,
    #[serde(default = "default_talent_level")]
    pub burst: u32,
}

fn default_talent_level() -> u32 {
    1
}

impl Default for TalentLevels {
    fn default() -> Self {
        TalentLevels { na: 1, skill: 1, burst: 1 }
    }
}

impl TalentLevels {
    /// Level for a category
    pub fn get(&self, category: TalentCategory) -> u32 {
        match category {
            TalentCategory::Na => self.na,
            TalentCategory::Skill => self.skill,
            TalentCategory::Burst => self.burst,
        }
    }
}

/// One artifact piece
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtifactPiece {
    /// Main stat key, valued through the catalog's main-stat table
    #[serde(default)]
    pub main_stat: Option<String>,
    #[serde(default)]
    pub substats: EffectMap,
}

/// Artifact loadout: set keys and the five pieces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtifactLoadout {
    #[serde(default)]
    pub set_2pc: Option<String>,
    #[serde(default)]
    pub set_4pc: Option<String>,
    #[serde(default)]
    pub pieces: BTreeMap<ArtifactSlot, ArtifactPiece>,
}

impl ArtifactLoadout {
    /// Whether either set field names `set`
    pub fn uses_set(&self, set: &str) -> bool {
        self.set_2pc.as_deref() == Some(set) || self.set_4pc.as_deref() == Some(set)
    }
}

/// A character's persistent build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterBuild {
    #[serde(default = "default_level")]
    pub level: u32,
    /// Constellation rank (0-6)
    #[serde(default)]
    pub constellation: u8,
    #[serde(default)]
    pub weapon: Option<WeaponRef>,
    #[serde(default)]
    pub talents: TalentLevels,
    #[serde(default)]
    pub artifacts: ArtifactLoadout,
}

fn default_level() -> u32 {
    90
}

impl Default for CharacterBuild {
    fn default() -> Self {
        CharacterBuild {
            level: default_level(),
            constellation: 0,
            weapon: None,
            talents: TalentLevels::default(),
            artifacts: ArtifactLoadout::default(),
        }
    }
}

impl CharacterBuild {
    /// Build with a weapon equipped at the given refinement
    pub fn with_weapon(mut self, key: impl Into<String>, refinement: u8) -> Self {
        self.weapon = Some(WeaponRef {
            key: key.into(),
            refinement,
        });
        self
    }

    /// Weapon key if one is equipped
    pub fn weapon_key(&self) -> Option<&str> {
        self.weapon.as_ref().map(|w| w.key.as_str())
    }

    /// Refinement rank of the equipped weapon, clamped to 1..=5
    pub fn refinement(&self) -> u8 {
        self.weapon.as_ref().map(|w| w.refinement.clamp(1, 5)).unwrap_or(1)
    }
}

/// Toggle state of one buff for one action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveBuffState {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub stacks: Option<u32>,
}

impl ActiveBuffState {
    /// Active with no explicit stack count
    pub fn on() -> Self {
        ActiveBuffState {
            active: true,
            stacks: None,
        }
    }

    /// Active with a stack count
    pub fn stacked(stacks: u32) -> Self {
        ActiveBuffState {
            active: true,
            stacks: Some(stacks),
        }
    }

    /// Stack count clamped to `[1, max_stacks]`; a missing or zero count is 1
    pub fn clamped_stacks(&self, max_stacks: Option<u32>) -> u32 {
        let stacks = self.stacks.unwrap_or(1).max(1);
        match max_stacks {
            Some(max) => stacks.min(max.max(1)),
            None => stacks,
        }
    }
}

/// Buff key -> toggle state for one action
pub type ActiveBuffs = BTreeMap<String, ActiveBuffState>;

/// Team slots and the builds of everyone in them
#[derive(Debug, Clone, Copy)]
pub struct TeamContext<'a> {
    /// Character keys per slot; empty slots are `None`
    pub members: &'a [Option<String>],
    pub builds: &'a BTreeMap<String, CharacterBuild>,
}

impl<'a> TeamContext<'a> {
    pub fn new(members: &'a [Option<String>], builds: &'a BTreeMap<String, CharacterBuild>) -> Self {
        TeamContext { members, builds }
    }

    /// Character keys of non-empty slots
    pub fn member_keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        let members = self.members;
        members.iter().filter_map(|m| m.as_deref()).filter(|k| !k.is_empty())
    }

    /// Build of a team member
    pub fn build(&self, key: &str) -> Option<&'a CharacterBuild> {
        let builds = self.builds;
        builds.get(key)
    }
}
