//! Prelude module for convenient imports
//!
//! ```rust
//! use damage_core::prelude::*;
//! ```

// Builds and per-action state
pub use crate::character_build::{ActiveBuffState, ActiveBuffs, CharacterBuild, TeamContext};

// Reference data
pub use crate::config::{Catalog, FormulaConstants};
pub use crate::definition::{BuffDefinition, CharacterDefinition, EnemyDefinition, TalentDefinition, WeaponDefinition};

// Stat resolution
pub use crate::stat_block::{resolve_stats, ResolvedStats, StatResolution};

// Damage
pub use crate::damage::{compute_damage, DamageContext, DamageResult};

// Rotation
pub use crate::rotation::{compute_rotation, Action, RotationResult};

// Core enums
pub use crate::types::{Element, ReactionType, ScalingStat, TalentCategory};
