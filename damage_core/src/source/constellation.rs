//! ConstellationSource - Always-on constellation passives of the team

use crate::character_build::ActiveBuffState;
use crate::definition::BuffDefinition;
use crate::rules::{self, RuleContext};
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;
use crate::types::{BuffSourceType, BuffTarget};

/// Passive constellation buffs unlocked by anyone on the team
///
/// A passive targeting `holder` only reaches the holder itself. A
/// `base_atk_flat` effect lands on the receiver's base ATK. Conversions and
/// flat damage rules read the assembled block, so [`resolve_stats`] runs
/// them after the fold.
///
/// [`resolve_stats`]: crate::stat_block::resolve_stats
pub struct ConstellationSource<'a> {
    pub ctx: RuleContext<'a>,
}

impl<'a> ConstellationSource<'a> {
    pub fn new(ctx: RuleContext<'a>) -> Self {
        ConstellationSource { ctx }
    }

    /// Passives that reach the receiver, keyed by buff key
    pub fn unlocked(&self) -> impl Iterator<Item = (&'a str, &'a BuffDefinition)> + '_ {
        let ctx = self.ctx;
        ctx.catalog
            .buffs
            .iter()
            .filter(|(_, buff)| buff.passive && buff.source_type == BuffSourceType::Constellation)
            .filter(move |(_, buff)| match ctx.holder(buff) {
                Some(holder) => {
                    ctx.meets_constellation(buff, &holder)
                        && (buff.target == BuffTarget::Team || holder.key == ctx.receiver)
                }
                None => false,
            })
            .map(|(key, buff)| (key.as_str(), buff))
    }
}

impl StatSource for ConstellationSource<'_> {
    fn id(&self) -> &str {
        "constellations"
    }

    fn priority(&self) -> i32 {
        30
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        let state = ActiveBuffState::on();
        for (_, buff) in self.unlocked() {
            stats.add_effects(&buff.effects, 1.0);
            if let Some(rule) = buff.dynamic_effects.as_ref().filter(|r| !r.is_post_assembly()) {
                stats.add_effects(&rules::evaluate(rule, buff, &state, &self.ctx), 1.0);
            }
        }
    }
}
