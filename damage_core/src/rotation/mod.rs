//! Rotation system - Folding a list of actions into totals and DPS
//!
//! Each action is resolved independently with its own buff toggles. An
//! action whose character, build or talent cannot be found becomes a zero
//! placeholder so the rest of the rotation still computes.

mod result;
mod sample;

pub use result::{ActionResult, Breakdowns, BreakdownEntry, RotationResult};
pub use sample::{sample_rotation, SampledRotation};

use crate::character_build::{ActiveBuffs, CharacterBuild, TeamContext};
use crate::config::Catalog;
use crate::damage::{compute_damage, DamageContext, DamageResult};
use crate::definition::EnemyDefinition;
use crate::stat_block::resolve_stats;
use crate::types::{Element, ReactionType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-action settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionConfig {
    #[serde(default)]
    pub reaction_type: ReactionType,
    #[serde(default)]
    pub active_buffs: ActiveBuffs,
    #[serde(default)]
    pub infusion: Option<Element>,
}

/// One rotation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Character key; `None` while the slot is still being edited
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub talent: Option<String>,
    #[serde(default)]
    pub config: ActionConfig,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

fn default_repeat() -> u32 {
    1
}

impl Action {
    pub fn new(character: impl Into<String>, talent: impl Into<String>) -> Self {
        Action {
            character: Some(character.into()),
            talent: Some(talent.into()),
            config: ActionConfig::default(),
            repeat: 1,
        }
    }

    pub fn with_repeat(mut self, repeat: u32) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_reaction(mut self, reaction: ReactionType) -> Self {
        self.config.reaction_type = reaction;
        self
    }

    pub fn with_buffs(mut self, active_buffs: ActiveBuffs) -> Self {
        self.config.active_buffs = active_buffs;
        self
    }

    pub fn with_infusion(mut self, element: Element) -> Self {
        self.config.infusion = Some(element);
        self
    }
}

/// Resolve one action, `None` when a reference is missing
fn resolve_action(
    catalog: &Catalog,
    action: &Action,
    builds: &BTreeMap<String, CharacterBuild>,
    team: TeamContext<'_>,
    enemy: &EnemyDefinition,
) -> Option<DamageResult> {
    let character_key = action.character.as_deref().filter(|k| !k.is_empty())?;
    let talent_key = action.talent.as_deref().filter(|k| !k.is_empty())?;

    let Some(character) = catalog.character(character_key) else {
        tracing::debug!(character = character_key, "action character not in catalog");
        return None;
    };
    let Some(build) = builds.get(character_key) else {
        tracing::debug!(character = character_key, "no build for action character");
        return None;
    };
    let Some(talent) = character.talent(talent_key) else {
        tracing::debug!(character = character_key, talent = talent_key, "talent not found");
        return None;
    };

    let resolution = resolve_stats(catalog, character_key, build, team, &action.config.active_buffs);
    let ctx = DamageContext {
        character_level: build.level,
        character_element: character.element,
        infusion: action.config.infusion,
        reaction: action.config.reaction_type,
        enemy,
    };

    Some(compute_damage(
        &resolution,
        talent,
        build.talents.get(talent.category),
        &ctx,
        &catalog.constants,
    ))
}

/// Compute every action of a rotation and aggregate totals
///
/// A `duration` of zero or less is treated as 1 second. A `repeat` of zero
/// counts as one hit.
pub fn compute_rotation(
    catalog: &Catalog,
    actions: &[Action],
    builds: &BTreeMap<String, CharacterBuild>,
    team: &[Option<String>],
    enemy: &EnemyDefinition,
    duration: f64,
) -> RotationResult {
    let team = TeamContext::new(team, builds);

    let per_action = actions
        .iter()
        .enumerate()
        .map(|(index, action)| {
            let repeat = action.repeat.max(1);
            let damage = resolve_action(catalog, action, builds, team, enemy);
            let per_hit = damage.as_ref().map(|d| d.avg).unwrap_or(0.0);

            tracing::trace!(
                index,
                character = action.character.as_deref().unwrap_or(""),
                talent = action.talent.as_deref().unwrap_or(""),
                per_hit,
                repeat,
                "action resolved"
            );

            ActionResult {
                index,
                character: action.character.clone(),
                talent: action.talent.clone(),
                repeat,
                per_hit,
                total: per_hit * repeat as f64,
                damage,
            }
        })
        .collect();

    RotationResult::from_actions(per_action, duration)
}
