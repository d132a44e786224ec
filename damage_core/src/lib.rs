//! damage_core - Stat aggregation and damage resolution for party-based RPG builds
//!
//! This library provides:
//! - resolve_stats: Folds base stats, weapon, artifacts, set bonuses,
//!   constellations, resonance and toggled buffs into one stat block
//! - Dynamic rules: Buff magnitudes driven by refinement, talent level,
//!   stacks, team composition or other resolved stats
//! - compute_damage: The multi-stage damage formula with reactions
//! - compute_rotation: Totals, DPS and breakdowns over a list of actions
//!
//! Every entry point is a pure function of its inputs. Reference data is
//! read-only and missing references degrade to zero instead of failing.

pub mod character_build;
pub mod config;
pub mod damage;
pub mod defense;
pub mod definition;
pub mod prelude;
pub mod rotation;
pub mod rules;
pub mod source;
pub mod stat_block;
pub mod types;

// Re-export core types for convenience
pub use character_build::{
    ActiveBuffState, ActiveBuffs, ArtifactLoadout, ArtifactPiece, CharacterBuild, TalentLevels,
    TeamContext, WeaponRef,
};
pub use config::{default_constants, load_catalog, Catalog, ConfigError, FormulaConstants};
pub use damage::{compute_damage, DamageContext, DamageResult, DamageTrace};
pub use defense::{defense_multiplier, resistance_multiplier};
pub use definition::{
    BuffDefinition, CharacterDefinition, DynamicRule, EnemyDefinition, TalentDefinition,
    WeaponDefinition,
};
pub use rotation::{compute_rotation, sample_rotation, Action, ActionConfig, RotationResult};
pub use source::StatSource;
pub use stat_block::{resolve_stats, FlatDamageBonus, ResolvedStats, StatAccumulator, StatResolution, StatValue};
pub use types::{Element, ReactionType, TalentCategory};
