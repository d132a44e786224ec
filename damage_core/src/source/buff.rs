//! BuffSource - Per-action toggled buffs

use crate::character_build::{ActiveBuffState, ActiveBuffs};
use crate::definition::{BuffDefinition, EffectMap};
use crate::rules::{self, RuleContext};
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

/// Product of the multipliers of every enhancement mod that is active
///
/// Evaluated against the whole active set, so toggle order never matters.
pub fn enhancement_multiplier(buff: &BuffDefinition, active_buffs: &ActiveBuffs) -> f64 {
    buff.enhancement_mods
        .iter()
        .filter(|(key, _)| active_buffs.get(*key).map(|s| s.active).unwrap_or(false))
        .map(|(_, multiplier)| *multiplier)
        .product()
}

/// One active buff from the action's toggle set
pub struct BuffSource<'a> {
    pub key: &'a str,
    pub buff: &'a BuffDefinition,
    pub state: ActiveBuffState,
    pub ctx: RuleContext<'a>,
}

impl<'a> BuffSource<'a> {
    pub fn new(
        key: &'a str,
        buff: &'a BuffDefinition,
        state: ActiveBuffState,
        ctx: RuleContext<'a>,
    ) -> Self {
        BuffSource {
            key,
            buff,
            state,
            ctx,
        }
    }

    /// Per-stack effect: the buff's own map or the holder weapon's tier
    fn per_stack_effects(&self) -> EffectMap {
        let Some(ref stackable) = self.buff.stackable else {
            return EffectMap::new();
        };
        if !stackable.is_weapon_passive {
            return stackable.effects.clone();
        }

        self.ctx
            .holder(self.buff)
            .and_then(|holder| {
                let weapon = holder.weapon?;
                weapon.refinement(holder.build.refinement())
            })
            .map(|tier| {
                tier.numeric_effects()
                    .map(|(key, value)| (key.to_string(), value))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl StatSource for BuffSource<'_> {
    fn id(&self) -> &str {
        self.key
    }

    fn priority(&self) -> i32 {
        200
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        let enhancement = enhancement_multiplier(self.buff, self.ctx.active_buffs);

        stats.add_effects(&self.buff.effects, enhancement);

        match self.buff.dynamic_effects {
            Some(ref rule) => {
                if !rule.is_post_assembly() {
                    let delta = rules::evaluate(rule, self.buff, &self.state, &self.ctx);
                    stats.add_effects(&delta, enhancement);
                }
            }
            None if self.buff.stackable.is_some() => {
                let stacks = self.state.clamped_stacks(self.buff.max_stacks());
                stats.add_effects(&self.per_stack_effects(), stacks as f64 * enhancement);
            }
            None => {}
        }
    }
}
