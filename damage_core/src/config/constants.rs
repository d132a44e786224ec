//! Formula constants configuration

use serde::{Deserialize, Serialize};

/// Tunable formula constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormulaConstants {
    #[serde(default)]
    pub baseline: BaselineConstants,
    #[serde(default)]
    pub additive: AdditiveReactionConstants,
    #[serde(default)]
    pub amplifying: AmplifyingReactionConstants,
    #[serde(default)]
    pub resonance: ResonanceConstants,
}

/// Stats every character has before any source contributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineConstants {
    #[serde(default = "default_crit_rate")]
    pub crit_rate: f64,
    #[serde(default = "default_crit_dmg")]
    pub crit_dmg: f64,
    #[serde(default = "default_er")]
    pub er: f64,
}

impl Default for BaselineConstants {
    fn default() -> Self {
        BaselineConstants {
            crit_rate: default_crit_rate(),
            crit_dmg: default_crit_dmg(),
            er: default_er(),
        }
    }
}

fn default_crit_rate() -> f64 {
    0.05
}
fn default_crit_dmg() -> f64 {
    0.50
}
fn default_er() -> f64 {
    1.0
}

/// Aggravate/Spread: `coefficient × level_constant × (1 + em_scale·EM/(em_offset + EM) + bonus)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditiveReactionConstants {
    /// Level-90 reaction base value
    #[serde(default = "default_level_constant")]
    pub level_constant: f64,
    #[serde(default = "default_aggravate")]
    pub aggravate_coefficient: f64,
    #[serde(default = "default_spread")]
    pub spread_coefficient: f64,
    #[serde(default = "default_additive_em_scale")]
    pub em_scale: f64,
    #[serde(default = "default_additive_em_offset")]
    pub em_offset: f64,
}

impl Default for AdditiveReactionConstants {
    fn default() -> Self {
        AdditiveReactionConstants {
            level_constant: default_level_constant(),
            aggravate_coefficient: default_aggravate(),
            spread_coefficient: default_spread(),
            em_scale: default_additive_em_scale(),
            em_offset: default_additive_em_offset(),
        }
    }
}

fn default_level_constant() -> f64 {
    1446.85
}
fn default_aggravate() -> f64 {
    1.15
}
fn default_spread() -> f64 {
    1.25
}
fn default_additive_em_scale() -> f64 {
    5.0
}
fn default_additive_em_offset() -> f64 {
    1200.0
}

/// Vaporize/Melt: `base × (1 + em_scale·EM/(em_offset + EM) + bonus)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmplifyingReactionConstants {
    #[serde(default = "default_amplifying_em_scale")]
    pub em_scale: f64,
    #[serde(default = "default_amplifying_em_offset")]
    pub em_offset: f64,
}

impl Default for AmplifyingReactionConstants {
    fn default() -> Self {
        AmplifyingReactionConstants {
            em_scale: default_amplifying_em_scale(),
            em_offset: default_amplifying_em_offset(),
        }
    }
}

fn default_amplifying_em_scale() -> f64 {
    2.78
}
fn default_amplifying_em_offset() -> f64 {
    1400.0
}

/// Team elemental resonance bonuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResonanceConstants {
    /// Members of one element needed to trigger its resonance
    #[serde(default = "default_threshold")]
    pub threshold: usize,
    #[serde(default = "default_pyro_atk")]
    pub pyro_atk_percent: f64,
    #[serde(default = "default_hydro_hp")]
    pub hydro_hp_percent: f64,
    #[serde(default = "default_dendro_em")]
    pub dendro_em: f64,
    #[serde(default = "default_geo_dmg")]
    pub geo_all_dmg_bonus: f64,
    #[serde(default = "default_geo_shred")]
    pub geo_res_shred: f64,
}

impl Default for ResonanceConstants {
    fn default() -> Self {
        ResonanceConstants {
            threshold: default_threshold(),
            pyro_atk_percent: default_pyro_atk(),
            hydro_hp_percent: default_hydro_hp(),
            dendro_em: default_dendro_em(),
            geo_all_dmg_bonus: default_geo_dmg(),
            geo_res_shred: default_geo_shred(),
        }
    }
}

fn default_threshold() -> usize {
    2
}
fn default_pyro_atk() -> f64 {
    0.25
}
fn default_hydro_hp() -> f64 {
    0.25
}
fn default_dendro_em() -> f64 {
    50.0
}
fn default_geo_dmg() -> f64 {
    0.15
}
fn default_geo_shred() -> f64 {
    0.20
}

/// Constants shipped with the crate, falling back to built-in defaults
pub fn default_constants() -> FormulaConstants {
    let toml = include_str!("../../config/constants.toml");
    super::parse_toml(toml).unwrap_or_default()
}
