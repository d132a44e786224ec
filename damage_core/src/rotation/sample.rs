//! Crit sampling - Rolled damage of a computed rotation

use super::RotationResult;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One randomized playthrough of a rotation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampledRotation {
    pub total_damage: f64,
    pub dps: f64,
    pub hits: u32,
    pub crits: u32,
}

/// Roll every hit of a rotation as crit or non-crit
///
/// Averaged over many samples this converges on the deterministic total.
pub fn sample_rotation(result: &RotationResult, rng: &mut impl Rng) -> SampledRotation {
    let mut sampled = SampledRotation::default();

    for action in &result.per_action {
        let Some(ref damage) = action.damage else {
            continue;
        };
        for _ in 0..action.repeat {
            let is_critical = rng.gen::<f64>() < damage.crit_rate;
            sampled.total_damage += if is_critical { damage.crit } else { damage.non_crit };
            sampled.hits += 1;
            if is_critical {
                sampled.crits += 1;
            }
        }
    }

    sampled.dps = sampled.total_damage / result.duration;
    sampled
}
