//! ResonanceSource - Team elemental resonance

use crate::config::{Catalog, ResonanceConstants};
use crate::source::StatSource;
use crate::stat_block::{keys, StatAccumulator};
use crate::types::Element;
use std::collections::BTreeMap;

/// Fixed bonuses for elements at least `threshold` members share
pub struct ResonanceSource {
    counts: BTreeMap<Element, usize>,
    constants: ResonanceConstants,
}

impl ResonanceSource {
    /// Count elements among the given member keys
    pub fn new<'k>(catalog: &Catalog, members: impl Iterator<Item = &'k str>) -> Self {
        let mut counts = BTreeMap::new();
        for key in members {
            match catalog.character(key) {
                Some(character) => *counts.entry(character.element).or_insert(0) += 1,
                None => tracing::debug!(character = key, "team member not in catalog"),
            }
        }
        ResonanceSource {
            counts,
            constants: catalog.constants.resonance.clone(),
        }
    }

    /// Elements whose resonance is active
    pub fn active(&self) -> Vec<Element> {
        self.counts
            .iter()
            .filter(|(_, count)| **count >= self.constants.threshold)
            .map(|(element, _)| *element)
            .collect()
    }
}

impl StatSource for ResonanceSource {
    fn id(&self) -> &str {
        "resonance"
    }

    fn priority(&self) -> i32 {
        40
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        let c = &self.constants;
        for element in self.active() {
            match element {
                Element::Pyro => stats.add(keys::ATK_PERCENT, c.pyro_atk_percent),
                Element::Hydro => stats.add(keys::HP_PERCENT, c.hydro_hp_percent),
                Element::Dendro => stats.add(keys::EM, c.dendro_em),
                Element::Geo => {
                    stats.add(keys::ALL_DMG_BONUS, c.geo_all_dmg_bonus);
                    stats.add(&keys::res_shred_key(Element::Geo), c.geo_res_shred);
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_toml_str(
            r#"
[characters.zhongli]
element = "geo"
base_hp = 14695
base_atk = 251
base_def = 738

[characters.albedo]
element = "geo"
base_hp = 13226
base_atk = 251
base_def = 876

[characters.bennett]
element = "pyro"
base_hp = 12397
base_atk = 191
base_def = 771

[characters.nahida]
element = "dendro"
base_hp = 10360
base_atk = 299
base_def = 630
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_geo_resonance_applies_both_bonuses() {
        let catalog = catalog();
        let source = ResonanceSource::new(&catalog, ["zhongli", "albedo", "bennett"].into_iter());
        let mut acc = StatAccumulator::new();
        source.apply(&mut acc);
        assert!((acc.get("all_dmg_bonus") - 0.15).abs() < f64::EPSILON);
        assert!((acc.get("res_shred_geo") - 0.20).abs() < f64::EPSILON);
        assert_eq!(acc.atk.percent, 0.0);
    }

    #[test]
    fn test_single_member_no_resonance() {
        let catalog = catalog();
        let source = ResonanceSource::new(&catalog, ["bennett", "nahida", "unknown"].into_iter());
        assert!(source.active().is_empty());
    }
}
