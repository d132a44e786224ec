//! Dynamic rule evaluation
//!
//! Each [`DynamicRule`] kind is a pure function of the buff definition, the
//! holder's build, the current stack count and team state. Rules that read
//! resolved stats (`stat_conversion`, `stack_based_lookup`) run in the
//! post-assembly pass; everything else feeds the accumulator.
//!
//! A rule whose holder cannot be found contributes nothing.

mod context;

pub use context::{Holder, RuleContext};

use crate::character_build::{ActiveBuffState, CharacterBuild};
use crate::definition::{lookup_clamped, BuffDefinition, DynamicRule, EffectMap, Ratio};
use crate::stat_block::{keys, FlatDamageBonus, ResolvedStats};

impl Ratio {
    /// Resolve the ratio for a holder build
    pub fn value(&self, build: &CharacterBuild) -> f64 {
        match self {
            Ratio::Fixed(ratio) => *ratio,
            Ratio::TalentScaled { talent, values } => {
                lookup_clamped(values, build.talents.get(*talent))
            }
        }
    }

    fn needs_holder(&self) -> bool {
        matches!(self, Ratio::TalentScaled { .. })
    }
}

fn add(delta: &mut EffectMap, stat: &str, value: f64) {
    *delta.entry(stat.to_string()).or_insert(0.0) += value;
}

/// Evaluate a pre-assembly rule into a stat delta
///
/// Post-assembly kinds return an empty delta here.
pub fn evaluate(
    rule: &DynamicRule,
    buff: &BuffDefinition,
    state: &ActiveBuffState,
    ctx: &RuleContext<'_>,
) -> EffectMap {
    let mut delta = EffectMap::new();

    match rule {
        DynamicRule::RefinementBasedStat {
            stat,
            values,
            stats,
        } => {
            if let Some(holder) = ctx.holder(buff) {
                let rank = holder.build.refinement() as u32;
                if let Some(stat) = stat {
                    add(&mut delta, stat, lookup_clamped(values, rank));
                }
                for table in stats {
                    add(&mut delta, &table.stat, lookup_clamped(&table.values, rank));
                }
            }
        }
        DynamicRule::TalentLevelBasedStat {
            talent,
            stat,
            values,
        } => {
            if let Some(holder) = ctx.holder(buff) {
                let level = holder.build.talents.get(*talent);
                add(&mut delta, stat, lookup_clamped(values, level));
            }
        }
        DynamicRule::TalentLevelStackingStat {
            talent,
            stat,
            values,
        } => {
            if let Some(holder) = ctx.holder(buff) {
                let level = holder.build.talents.get(*talent);
                let stacks = state.clamped_stacks(buff.max_stacks());
                add(&mut delta, stat, lookup_clamped(values, level) * stacks as f64);
            }
        }
        DynamicRule::TeamComposition {
            elements,
            stat,
            values,
        } => {
            let count = ctx
                .team
                .member_keys()
                .filter_map(|key| ctx.catalog.character(key))
                .filter(|character| elements.contains(&character.element))
                .count();
            if !values.is_empty() {
                add(&mut delta, stat, values[count.min(values.len() - 1)]);
            }
        }
        DynamicRule::BaseStatScalingBuff { stat, ratio } => {
            if let Some(holder) = ctx.holder(buff) {
                add(&mut delta, stat, holder.base_atk() * ratio.value(holder.build));
            }
        }
        DynamicRule::StackingStatBonus {
            source_buff,
            stat,
            values,
        } => {
            let sibling = ctx.active_buffs.get(source_buff).filter(|s| s.active);
            if let Some(sibling) = sibling {
                let max = ctx.catalog.buff(source_buff).and_then(|b| b.max_stacks());
                let stacks = sibling.clamped_stacks(max);
                add(&mut delta, stat, lookup_clamped(values, stacks));
            }
        }
        DynamicRule::StackBasedLookup { .. } | DynamicRule::StatConversion { .. } => {}
    }

    delta
}

/// Evaluate a `stat_conversion` against resolved stats
///
/// Percent-of-base targets are turned into absolute bonuses using the
/// resolved base stat. Returns absolute deltas.
pub fn evaluate_conversion(
    rule: &DynamicRule,
    buff: &BuffDefinition,
    ctx: &RuleContext<'_>,
    resolved: &ResolvedStats,
) -> EffectMap {
    let mut delta = EffectMap::new();

    if let DynamicRule::StatConversion {
        source_stat,
        target_stat,
        ratio,
        cap,
    } = rule
    {
        let ratio_value = if ratio.needs_holder() {
            match ctx.holder(buff) {
                Some(holder) => ratio.value(holder.build),
                None => return delta,
            }
        } else {
            ratio.value(ctx.receiver_build)
        };

        let mut bonus = resolved.get(source_stat) * ratio_value;
        if let Some(cap) = cap {
            bonus = bonus.min(*cap);
        }

        match keys::percent_base(target_stat) {
            Some((base_key, absolute_key)) => {
                add(&mut delta, absolute_key, bonus * resolved.get(base_key))
            }
            None => add(&mut delta, target_stat, bonus),
        }
    }

    delta
}

/// Evaluate a `stack_based_lookup` into a flat damage bonus
pub fn evaluate_flat_damage(
    rule: &DynamicRule,
    buff_key: &str,
    buff: &BuffDefinition,
    state: &ActiveBuffState,
    resolved: &ResolvedStats,
) -> Option<FlatDamageBonus> {
    match rule {
        DynamicRule::StackBasedLookup {
            reference_stat,
            values,
            applies_to,
        } => {
            let stacks = state.clamped_stacks(buff.max_stacks());
            let multiplier = lookup_clamped(values, stacks);
            Some(FlatDamageBonus {
                buff: buff_key.to_string(),
                amount: multiplier * resolved.get(reference_stat),
                applies_to: applies_to.clone(),
            })
        }
        _ => None,
    }
}
