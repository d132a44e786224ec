//! ArtifactSource and SetBonusSource - Stats from artifact pieces and sets

use crate::character_build::ArtifactLoadout;
use crate::config::Catalog;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

/// Main stats and substats of the five pieces
pub struct ArtifactSource<'a> {
    pub loadout: &'a ArtifactLoadout,
    pub catalog: &'a Catalog,
}

impl StatSource for ArtifactSource<'_> {
    fn id(&self) -> &str {
        "artifacts"
    }

    fn priority(&self) -> i32 {
        10
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        for (slot, piece) in &self.loadout.pieces {
            if let Some(ref main) = piece.main_stat {
                match self.catalog.main_stat_value(main) {
                    Some(value) => stats.add(main, value),
                    None => tracing::debug!(?slot, main_stat = %main, "unknown artifact main stat"),
                }
            }
            stats.add_effects(&piece.substats, 1.0);
        }
    }
}

/// 2-piece set bonus
///
/// A set in `set_4pc` with a registered `<set>_2pc` bonus supersedes
/// `set_2pc` entirely; callers are expected to keep both fields on the same
/// set when a 4-piece is worn.
pub struct SetBonusSource<'a> {
    pub loadout: &'a ArtifactLoadout,
    pub catalog: &'a Catalog,
}

impl StatSource for SetBonusSource<'_> {
    fn id(&self) -> &str {
        "artifact_set"
    }

    fn priority(&self) -> i32 {
        20
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        let from_4pc = self
            .loadout
            .set_4pc
            .as_deref()
            .and_then(|set| self.catalog.set_bonus(set));

        let bonus = match from_4pc {
            Some(bonus) => Some(bonus),
            None => self
                .loadout
                .set_2pc
                .as_deref()
                .and_then(|set| self.catalog.set_bonus(set)),
        };

        if let Some(bonus) = bonus {
            stats.add_effects(&bonus.effects, 1.0);
        }
    }
}
