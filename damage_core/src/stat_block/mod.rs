//! Stat resolution - Fold every stat source into one resolved block
//!
//! Sources are applied in priority order into a [`StatAccumulator`], which
//! is assembled into absolute [`ResolvedStats`]. A second pass over the
//! active buffs then reads the resolved block for stat conversions and flat
//! damage bonuses.

mod aggregator;
mod computed;
pub mod keys;
mod stat_value;

pub use aggregator::StatAccumulator;
pub use stat_value::StatValue;

use crate::character_build::{ActiveBuffState, ActiveBuffs, CharacterBuild, TeamContext};
use crate::config::Catalog;
use crate::definition::BuffDefinition;
use crate::rules::{self, RuleContext};
use crate::source::{
    enhancement_multiplier, ArtifactSource, BaseStatsSource, BuffSource, ConstellationSource,
    ResonanceSource, SetBonusSource, StatSource, WeaponSource,
};
use crate::types::{BuffSourceType, TalentCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Final stat key -> value map
///
/// Missing keys read as zero. Iteration order is the key order, so two
/// resolutions of the same inputs serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedStats(BTreeMap<String, f64>);

impl ResolvedStats {
    pub fn from_map(map: BTreeMap<String, f64>) -> Self {
        ResolvedStats(map)
    }

    /// Value of a stat, zero when absent
    pub fn get(&self, key: &str) -> f64 {
        self.0.get(key).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, key: &str, value: f64) {
        self.0.insert(key.to_string(), value);
    }

    /// Add onto a stat, creating it at zero
    pub fn add(&mut self, key: &str, value: f64) {
        *self.0.entry(key.to_string()).or_insert(0.0) += value;
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Flat damage added at the base-damage stage, outside the stat block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatDamageBonus {
    /// Buff that produced it
    pub buff: String,
    pub amount: f64,
    /// Talent categories it applies to; `None` means every talent
    #[serde(default)]
    pub applies_to: Option<Vec<TalentCategory>>,
}

impl FlatDamageBonus {
    pub fn applies(&self, category: TalentCategory) -> bool {
        self.applies_to
            .as_ref()
            .map(|categories| categories.contains(&category))
            .unwrap_or(true)
    }
}

/// Output of [`resolve_stats`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatResolution {
    pub stats: ResolvedStats,
    #[serde(default)]
    pub flat_damage: Vec<FlatDamageBonus>,
}

impl StatResolution {
    /// Total flat damage for a talent category
    pub fn flat_damage_for(&self, category: TalentCategory) -> f64 {
        self.flat_damage
            .iter()
            .filter(|bonus| bonus.applies(category))
            .map(|bonus| bonus.amount)
            .sum()
    }
}

/// Active buffs that apply this action, in key order
///
/// Skips inactive toggles, unknown keys and always-on constellation passives
/// (those come from [`ConstellationSource`]). Rank-gated buffs need their
/// holder on the team at the required constellation.
fn toggled_buffs<'a>(ctx: &RuleContext<'a>) -> Vec<(&'a str, &'a BuffDefinition, ActiveBuffState)> {
    let active_buffs: &'a ActiveBuffs = ctx.active_buffs;
    let mut toggled = Vec::new();

    for (key, state) in active_buffs {
        if !state.active {
            continue;
        }
        let Some(buff) = ctx.catalog.buff(key) else {
            tracing::debug!(buff = %key, "active buff not in catalog");
            continue;
        };
        if buff.passive && buff.source_type == BuffSourceType::Constellation {
            continue;
        }
        if buff.min_constellation.is_some() {
            let unlocked = ctx
                .holder(buff)
                .map(|holder| ctx.meets_constellation(buff, &holder))
                .unwrap_or(false);
            if !unlocked {
                continue;
            }
        }
        toggled.push((key.as_str(), buff, *state));
    }

    toggled
}

/// Resolve a character's stats for one action
///
/// A missing character, or a weapon key the catalog does not know, yields an
/// empty resolution rather than an error; the caller may be mid-edit. An
/// empty weapon slot resolves normally with no weapon contribution.
pub fn resolve_stats(
    catalog: &Catalog,
    character_key: &str,
    build: &CharacterBuild,
    team: TeamContext<'_>,
    active_buffs: &ActiveBuffs,
) -> StatResolution {
    let Some(character) = catalog.character(character_key) else {
        tracing::debug!(character = character_key, "character not in catalog");
        return StatResolution::default();
    };
    let weapon = match build.weapon_key() {
        Some(weapon_key) => match catalog.weapon(weapon_key) {
            Some(weapon) => Some((weapon_key, weapon)),
            None => {
                tracing::debug!(weapon = weapon_key, "weapon not in catalog");
                return StatResolution::default();
            }
        },
        None => None,
    };

    let ctx = RuleContext {
        catalog,
        team,
        receiver: character_key,
        receiver_build: build,
        active_buffs,
    };

    let mut members: Vec<&str> = team.member_keys().collect();
    if !members.contains(&character_key) {
        members.push(character_key);
    }

    let toggled = toggled_buffs(&ctx);
    let constellations = ConstellationSource::new(ctx);

    let mut sources: Vec<Box<dyn StatSource + '_>> = vec![
        Box::new(BaseStatsSource::new(character, weapon.map(|(_, w)| w))),
        Box::new(ArtifactSource {
            loadout: &build.artifacts,
            catalog,
        }),
        Box::new(SetBonusSource {
            loadout: &build.artifacts,
            catalog,
        }),
        Box::new(ResonanceSource::new(catalog, members.into_iter())),
    ];
    if let Some((weapon_key, weapon)) = weapon {
        sources.push(Box::new(WeaponSource::new(weapon_key, weapon, build.refinement())));
    }
    for &(key, buff, state) in &toggled {
        sources.push(Box::new(BuffSource::new(key, buff, state, ctx)));
    }

    // Post-assembly rules of unlocked passives run with the toggled ones
    let mut post_assembly: Vec<(&str, &BuffDefinition, ActiveBuffState)> = constellations
        .unlocked()
        .map(|(key, buff)| (key, buff, ActiveBuffState::on()))
        .collect();
    post_assembly.extend(toggled.iter().copied());

    sources.push(Box::new(constellations));

    // Stable sort keeps buffs in key order within a priority
    sources.sort_by_key(|s| s.priority());

    let mut accumulator = StatAccumulator::new();
    for source in &sources {
        tracing::trace!(source = source.id(), priority = source.priority(), "applying stat source");
        source.apply(&mut accumulator);
    }

    let mut stats = accumulator.assemble(&catalog.constants.baseline);

    // Post-assembly pass: every rule reads the same snapshot
    let snapshot = stats.clone();
    let mut flat_damage = Vec::new();

    for &(key, buff, state) in &post_assembly {
        let Some(ref rule) = buff.dynamic_effects else {
            continue;
        };
        if !rule.is_post_assembly() {
            continue;
        }
        let enhancement = enhancement_multiplier(buff, active_buffs);

        for (stat, value) in rules::evaluate_conversion(rule, buff, &ctx, &snapshot) {
            stats.add(&stat, value * enhancement);
        }
        if let Some(mut bonus) = rules::evaluate_flat_damage(rule, key, buff, &state, &snapshot) {
            bonus.amount *= enhancement;
            flat_damage.push(bonus);
        }
    }

    StatResolution { stats, flat_damage }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
[main_stats]
atk_percent = 0.466

[characters.hero]
element = "pyro"
base_hp = 10000
base_atk = 300
base_def = 600

[characters.hero.ascension]
stat = "crit_rate"
value = 0.192

[characters.ally]
element = "pyro"
base_hp = 10000
base_atk = 200
base_def = 600

[weapons.blade]
base_atk = 200

[buffs.em_to_atk]
source_type = "character"
source = "hero"

[buffs.em_to_atk.dynamic_effects]
type = "stat_conversion"
source_stat = "em"
target_stat = "atk_percent"
ratio = 0.001

[buffs.em_flat]
source_type = "character"
source = "hero"
effects = { em = 100 }

[buffs.hero_c6]
source_type = "constellation"
source = "hero"
min_constellation = 6
passive = true
target = "holder"
effects = { em = 100 }

[buffs.hero_c6.dynamic_effects]
type = "stat_conversion"
source_stat = "em"
target_stat = "atk"
ratio = 1.0

[buffs.burst_flat]
source_type = "character"
source = "hero"
stackable = { max_stacks = 3 }

[buffs.burst_flat.dynamic_effects]
type = "stack_based_lookup"
reference_stat = "atk"
values = [0.1, 0.2, 0.3]
applies_to = ["burst"]
"#;

    struct Fixture {
        catalog: Catalog,
        members: Vec<Option<String>>,
        builds: BTreeMap<String, CharacterBuild>,
    }

    impl Fixture {
        fn new() -> Self {
            let mut builds = BTreeMap::new();
            builds.insert("hero".to_string(), CharacterBuild::default().with_weapon("blade", 1));
            builds.insert("ally".to_string(), CharacterBuild::default().with_weapon("blade", 1));
            Fixture {
                catalog: Catalog::from_toml_str(CATALOG).unwrap(),
                members: vec![Some("hero".to_string()), None],
                builds,
            }
        }

        fn resolve(&self, active: &ActiveBuffs) -> StatResolution {
            let team = TeamContext::new(&self.members, &self.builds);
            resolve_stats(&self.catalog, "hero", &self.builds["hero"], team, active)
        }
    }

    #[test]
    fn test_base_and_baseline() {
        let fx = Fixture::new();
        let resolution = fx.resolve(&ActiveBuffs::new());
        let stats = &resolution.stats;
        assert!((stats.get("atk") - 500.0).abs() < 1e-9);
        assert!((stats.get("crit_rate") - 0.242).abs() < 1e-9);
        assert!((stats.get("crit_dmg") - 0.5).abs() < 1e-9);
        assert!((stats.get("er") - 1.0).abs() < 1e-9);
        assert!(resolution.flat_damage.is_empty());
    }

    #[test]
    fn test_missing_character_is_empty() {
        let fx = Fixture::new();
        let team = TeamContext::new(&fx.members, &fx.builds);
        let resolution =
            resolve_stats(&fx.catalog, "nobody", &CharacterBuild::default(), team, &ActiveBuffs::new());
        assert!(resolution.stats.is_empty());
    }

    #[test]
    fn test_missing_weapon_is_empty() {
        let fx = Fixture::new();
        let team = TeamContext::new(&fx.members, &fx.builds);
        let build = CharacterBuild::default().with_weapon("unknown", 1);
        let resolution = resolve_stats(&fx.catalog, "hero", &build, team, &ActiveBuffs::new());
        assert_eq!(resolution, StatResolution::default());
    }

    #[test]
    fn test_empty_weapon_slot_keeps_baseline() {
        let fx = Fixture::new();
        let team = TeamContext::new(&fx.members, &fx.builds);
        let build = CharacterBuild::default();
        let stats = resolve_stats(&fx.catalog, "hero", &build, team, &ActiveBuffs::new()).stats;
        assert!((stats.get("atk") - 300.0).abs() < 1e-9);
        assert!((stats.get("hp") - 10000.0).abs() < 1e-9);
        assert!((stats.get("crit_rate") - 0.242).abs() < 1e-9);
        assert!((stats.get("crit_dmg") - 0.5).abs() < 1e-9);
        assert!((stats.get("er") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_passive_constellation_conversion() {
        let mut fx = Fixture::new();
        fx.builds.get_mut("hero").unwrap().constellation = 6;
        let stats = fx.resolve(&ActiveBuffs::new()).stats;
        // 100 EM from the passive, converted 1:1 into flat ATK
        assert!((stats.get("em") - 100.0).abs() < 1e-9);
        assert!((stats.get("atk") - 600.0).abs() < 1e-9);

        fx.builds.get_mut("hero").unwrap().constellation = 5;
        let stats = fx.resolve(&ActiveBuffs::new()).stats;
        assert!((stats.get("atk") - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_conversion_reads_resolved_stats() {
        let fx = Fixture::new();
        let active = ActiveBuffs::from([
            ("em_flat".to_string(), ActiveBuffState::on()),
            ("em_to_atk".to_string(), ActiveBuffState::on()),
        ]);
        let stats = fx.resolve(&active).stats;
        // 100 EM * 0.001 = 10% of base 500
        assert!((stats.get("atk") - 550.0).abs() < 1e-9);
    }

    #[test]
    fn test_inactive_buffs_ignored() {
        let fx = Fixture::new();
        let active = ActiveBuffs::from([("em_flat".to_string(), ActiveBuffState::default())]);
        assert_eq!(fx.resolve(&active).stats.get("em"), 0.0);
    }

    #[test]
    fn test_flat_damage_filtered_by_category() {
        let fx = Fixture::new();
        let active = ActiveBuffs::from([("burst_flat".to_string(), ActiveBuffState::stacked(9))]);
        let resolution = fx.resolve(&active);
        // max stacks 3 -> 0.3 * 500
        assert!((resolution.flat_damage_for(TalentCategory::Burst) - 150.0).abs() < 1e-9);
        assert_eq!(resolution.flat_damage_for(TalentCategory::Na), 0.0);
    }

    #[test]
    fn test_resonance_counts_team() {
        let fx = Fixture::new();
        let members = vec![Some("hero".to_string()), Some("ally".to_string())];
        let team = TeamContext::new(&members, &fx.builds);
        let stats =
            resolve_stats(&fx.catalog, "hero", &fx.builds["hero"], team, &ActiveBuffs::new()).stats;
        assert!((stats.get("atk") - 625.0).abs() < 1e-9);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let fx = Fixture::new();
        let active = ActiveBuffs::from([
            ("em_flat".to_string(), ActiveBuffState::on()),
            ("burst_flat".to_string(), ActiveBuffState::stacked(2)),
        ]);
        let first = serde_json::to_string(&fx.resolve(&active)).unwrap();
        let second = serde_json::to_string(&fx.resolve(&active)).unwrap();
        assert_eq!(first, second);
    }
}
