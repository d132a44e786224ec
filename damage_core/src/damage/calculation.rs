//! Damage calculation - turning a resolved stat block and a talent into damage

use super::reaction::{additive_damage, amplifying_multiplier};
use super::{DamageResult, DamageTrace};
use crate::config::FormulaConstants;
use crate::defense::{defense_multiplier, effective_resistance, resistance_multiplier};
use crate::definition::{EnemyDefinition, TalentDefinition};
use crate::stat_block::StatResolution;
use crate::types::{Element, ReactionType};

/// Everything about a hit that is not a stat
#[derive(Debug, Clone, Copy)]
pub struct DamageContext<'a> {
    pub character_level: u32,
    /// Fallback when the talent declares no element
    pub character_element: Element,
    /// Overrides the element of infusable talents
    pub infusion: Option<Element>,
    pub reaction: ReactionType,
    pub enemy: &'a EnemyDefinition,
}

/// Infusion, then the talent's own element, then the character's
pub fn resolve_damage_type(talent: &TalentDefinition, ctx: &DamageContext<'_>) -> Element {
    match ctx.infusion {
        Some(element) if talent.infusable => element,
        _ => talent.element.unwrap_or(ctx.character_element),
    }
}

/// NaN and negative damage become zero
fn floor_damage(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Compute expected damage of one talent hit
pub fn compute_damage(
    resolution: &StatResolution,
    talent: &TalentDefinition,
    talent_level: u32,
    ctx: &DamageContext<'_>,
    constants: &FormulaConstants,
) -> DamageResult {
    let stats = &resolution.stats;

    // Step 1: Talent scaling
    let multiplier = talent.multiplier_at(talent_level);
    let scaling_value = stats.get(talent.scaling_stat.key());
    let mut base_damage = multiplier * scaling_value;
    if let Some(flat_stat) = talent.flat_scaling_stat {
        base_damage += talent.flat_multiplier_at(talent_level) * stats.get(flat_stat.key());
    }

    // Step 2: Flat bonuses outside the stat block
    let flat_bonus = resolution.flat_damage_for(talent.category);

    // Step 3: Element
    let damage_type = resolve_damage_type(talent, ctx);

    // Step 4: Additive reaction
    let em = stats.em();
    let reaction_bonus = stats.reaction_bonus(ctx.reaction);
    let additive = additive_damage(ctx.reaction, em, reaction_bonus, &constants.additive);
    let outgoing_damage = base_damage + flat_bonus + additive;

    // Steps 5-9: Multipliers
    let dmg_bonus_mult = stats.dmg_bonus_multiplier(damage_type);
    let crit_rate = stats.crit_rate();
    let crit_multiplier = stats.crit_multiplier();
    let def_mult = defense_multiplier(ctx.character_level, ctx.enemy.level, stats.def_shred());
    let effective_res = effective_resistance(
        ctx.enemy.resistance(damage_type),
        stats.res_shred(damage_type),
    );
    let res_mult = resistance_multiplier(effective_res);
    let reaction_mult = amplifying_multiplier(ctx.reaction, em, reaction_bonus, &constants.amplifying);

    // Step 10: Compose
    let non_crit = outgoing_damage * dmg_bonus_mult * def_mult * res_mult * reaction_mult;
    let crit = non_crit * crit_multiplier;
    let avg = non_crit * (1.0 - crit_rate) + crit * crit_rate;

    DamageResult {
        avg: floor_damage(avg),
        crit: floor_damage(crit),
        non_crit: floor_damage(non_crit),
        crit_rate,
        damage_type,
        trace: DamageTrace {
            multiplier,
            scaling_value,
            base_damage,
            flat_bonus,
            additive_damage: additive,
            outgoing_damage,
            dmg_bonus_mult,
            crit_multiplier,
            def_mult,
            effective_res,
            res_mult,
            reaction_mult,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat_block::{FlatDamageBonus, ResolvedStats};
    use crate::types::{ScalingStat, TalentCategory};

    const EPS: f64 = 1e-9;

    fn talent(multiplier: f64) -> TalentDefinition {
        TalentDefinition {
            category: TalentCategory::Skill,
            scaling_stat: ScalingStat::Atk,
            multipliers: vec![multiplier; 15],
            flat_scaling_stat: None,
            flat_multipliers: Vec::new(),
            element: None,
            infusable: false,
        }
    }

    fn resolution(atk: f64) -> StatResolution {
        let mut stats = ResolvedStats::default();
        stats.set("atk", atk);
        stats.set("crit_rate", 0.05);
        stats.set("crit_dmg", 0.5);
        stats.set("er", 1.0);
        StatResolution {
            stats,
            flat_damage: Vec::new(),
        }
    }

    fn ctx(enemy: &EnemyDefinition, reaction: ReactionType) -> DamageContext<'_> {
        DamageContext {
            character_level: 90,
            character_element: Element::Pyro,
            infusion: None,
            reaction,
            enemy,
        }
    }

    #[test]
    fn test_reference_hit() {
        let enemy = EnemyDefinition::uniform(90, 0.10);
        let result = compute_damage(
            &resolution(500.0),
            &talent(2.0),
            10,
            &ctx(&enemy, ReactionType::None),
            &FormulaConstants::default(),
        );
        assert!((result.non_crit - 450.0).abs() < EPS);
        assert!((result.crit - 675.0).abs() < EPS);
        assert!((result.avg - 461.25).abs() < EPS);
        assert!((result.trace.def_mult - 0.5).abs() < EPS);
        assert!((result.trace.res_mult - 0.9).abs() < EPS);
        assert_eq!(result.damage_type, Element::Pyro);
    }

    #[test]
    fn test_vaporize_doubles() {
        let enemy = EnemyDefinition::uniform(90, 0.10);
        let result = compute_damage(
            &resolution(500.0),
            &talent(2.0),
            1,
            &ctx(&enemy, ReactionType::Vaporize20),
            &FormulaConstants::default(),
        );
        assert!((result.trace.reaction_mult - 2.0).abs() < EPS);
        assert!((result.non_crit - 900.0).abs() < EPS);
    }

    #[test]
    fn test_aggravate_is_additive() {
        let enemy = EnemyDefinition::uniform(90, 0.10);
        let result = compute_damage(
            &resolution(500.0),
            &talent(2.0),
            1,
            &ctx(&enemy, ReactionType::Aggravate),
            &FormulaConstants::default(),
        );
        let additive = 1.15 * 1446.85;
        assert_eq!(result.trace.reaction_mult, 1.0);
        assert!((result.trace.additive_damage - additive).abs() < EPS);
        assert!((result.non_crit - (1000.0 + additive) * 0.45).abs() < 1e-6);
    }

    #[test]
    fn test_infusion_only_for_infusable() {
        let enemy = EnemyDefinition::uniform(90, 0.10);
        let mut physical = talent(1.0);
        physical.element = Some(Element::Physical);
        let mut context = ctx(&enemy, ReactionType::None);
        context.infusion = Some(Element::Cryo);

        assert_eq!(resolve_damage_type(&physical, &context), Element::Physical);
        physical.infusable = true;
        assert_eq!(resolve_damage_type(&physical, &context), Element::Cryo);
    }

    #[test]
    fn test_flat_scaling_and_flat_bonus() {
        let enemy = EnemyDefinition::uniform(90, 0.0);
        let mut res = resolution(1000.0);
        res.stats.set("em", 400.0);
        res.flat_damage.push(FlatDamageBonus {
            buff: "test".to_string(),
            amount: 250.0,
            applies_to: Some(vec![TalentCategory::Skill]),
        });
        let mut t = talent(1.0);
        t.flat_scaling_stat = Some(ScalingStat::Em);
        t.flat_multipliers = vec![2.0; 15];

        let result = compute_damage(&res, &t, 1, &ctx(&enemy, ReactionType::None), &FormulaConstants::default());
        assert!((result.trace.base_damage - 1800.0).abs() < EPS);
        assert!((result.trace.flat_bonus - 250.0).abs() < EPS);
        assert!((result.non_crit - 2050.0 * 0.5).abs() < EPS);
    }

    #[test]
    fn test_negative_damage_floored() {
        let enemy = EnemyDefinition::uniform(90, 0.10);
        let result = compute_damage(
            &resolution(-500.0),
            &talent(2.0),
            1,
            &ctx(&enemy, ReactionType::None),
            &FormulaConstants::default(),
        );
        assert_eq!(result.avg, 0.0);
        assert_eq!(result.non_crit, 0.0);
        assert!(result.trace.base_damage < 0.0);
    }

    #[test]
    fn test_nan_damage_floored() {
        let enemy = EnemyDefinition::uniform(90, 0.10);
        let result = compute_damage(
            &resolution(f64::NAN),
            &talent(2.0),
            1,
            &ctx(&enemy, ReactionType::None),
            &FormulaConstants::default(),
        );
        assert_eq!(result.avg, 0.0);
        assert_eq!(result.crit, 0.0);
    }
}
