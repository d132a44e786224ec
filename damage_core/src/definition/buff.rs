//! BuffDefinition - Toggleable and passive stat modifiers
//!
//! A buff carries up to three kinds of contribution:
//! - `effects`: a static stat map
//! - `stackable`: a per-stack map multiplied by the current stack count
//! - `dynamic_effects`: a [`DynamicRule`] evaluated against build/team state

use super::EffectMap;
use crate::types::{BuffSourceType, BuffTarget, Element, TalentCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable buff reference data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuffDefinition {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub source_type: BuffSourceType,
    /// Character key, weapon key or set key, depending on `source_type`
    pub source: String,
    #[serde(default)]
    pub effects: EffectMap,
    #[serde(default)]
    pub stackable: Option<StackableDescriptor>,
    #[serde(default)]
    pub dynamic_effects: Option<DynamicRule>,
    /// Other buff key -> multiplier applied to this buff while both are active
    #[serde(default)]
    pub enhancement_mods: BTreeMap<String, f64>,
    /// Constellation rank the holder needs
    #[serde(default)]
    pub min_constellation: Option<u8>,
    /// Always-on constellation passive (not toggled per action)
    #[serde(default)]
    pub passive: bool,
    #[serde(default)]
    pub target: BuffTarget,
}

impl BuffDefinition {
    /// Maximum stack count, if the buff stacks
    pub fn max_stacks(&self) -> Option<u32> {
        self.stackable.as_ref().map(|s| s.max_stacks)
    }
}

/// Stack behaviour of a buff
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackableDescriptor {
    pub max_stacks: u32,
    /// Effect contributed per stack
    #[serde(default)]
    pub effects: EffectMap,
    /// Use the holder weapon's current refinement tier as the per-stack effect
    #[serde(default)]
    pub is_weapon_passive: bool,
}

/// A named stat with a value table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatTable {
    pub stat: String,
    pub values: Vec<f64>,
}

/// A ratio that is either fixed or read from a talent-level table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ratio {
    Fixed(f64),
    TalentScaled {
        talent: TalentCategory,
        values: Vec<f64>,
    },
}

/// Rules whose magnitude depends on build or team state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DynamicRule {
    /// Value indexed by the holder weapon's refinement rank
    RefinementBasedStat {
        #[serde(default)]
        stat: Option<String>,
        #[serde(default)]
        values: Vec<f64>,
        #[serde(default)]
        stats: Vec<StatTable>,
    },
    /// Value indexed by the holder's talent level
    TalentLevelBasedStat {
        talent: TalentCategory,
        stat: String,
        values: Vec<f64>,
    },
    /// Per-stack value indexed by talent level, times stack count
    TalentLevelStackingStat {
        talent: TalentCategory,
        stat: String,
        values: Vec<f64>,
    },
    /// Flat damage: per-stack-count multiplier times a resolved reference stat
    StackBasedLookup {
        reference_stat: String,
        values: Vec<f64>,
        #[serde(default)]
        applies_to: Option<Vec<TalentCategory>>,
    },
    /// Value indexed by how many team members match `elements`
    TeamComposition {
        elements: Vec<Element>,
        stat: String,
        values: Vec<f64>,
    },
    /// Holder's base ATK times a ratio
    BaseStatScalingBuff { stat: String, ratio: Ratio },
    /// Resolved source stat times a ratio; runs after assembly
    StatConversion {
        source_stat: String,
        target_stat: String,
        ratio: Ratio,
        #[serde(default)]
        cap: Option<f64>,
    },
    /// Value indexed by another buff's current stack count
    StackingStatBonus {
        source_buff: String,
        stat: String,
        values: Vec<f64>,
    },
}

impl DynamicRule {
    /// Whether this rule belongs to the post-assembly pass
    pub fn is_post_assembly(&self) -> bool {
        matches!(
            self,
            DynamicRule::StatConversion { .. } | DynamicRule::StackBasedLookup { .. }
        )
    }
}
