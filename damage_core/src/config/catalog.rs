//! Catalog - The reference data bundle handed to every computation

use super::{default_constants, ConfigError, FormulaConstants};
use crate::definition::{BuffDefinition, CharacterDefinition, EnemyDefinition, WeaponDefinition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Read-only reference data: characters, weapons, buffs, enemies, the
/// artifact main-stat table and formula constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub characters: BTreeMap<String, CharacterDefinition>,
    #[serde(default)]
    pub weapons: BTreeMap<String, WeaponDefinition>,
    #[serde(default)]
    pub buffs: BTreeMap<String, BuffDefinition>,
    #[serde(default)]
    pub enemies: BTreeMap<String, EnemyDefinition>,
    /// Main-stat key -> value at max artifact level
    #[serde(default)]
    pub main_stats: BTreeMap<String, f64>,
    /// Falls back to the constants shipped with the crate
    #[serde(default = "default_constants")]
    pub constants: FormulaConstants,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            characters: BTreeMap::new(),
            weapons: BTreeMap::new(),
            buffs: BTreeMap::new(),
            enemies: BTreeMap::new(),
            main_stats: BTreeMap::new(),
            constants: default_constants(),
        }
    }
}

impl Catalog {
    /// Parse and validate a TOML catalog
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let catalog: Catalog = super::parse_toml(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a JSON catalog
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let catalog: Catalog = super::parse_json(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn character(&self, key: &str) -> Option<&CharacterDefinition> {
        self.characters.get(key)
    }

    pub fn weapon(&self, key: &str) -> Option<&WeaponDefinition> {
        self.weapons.get(key)
    }

    pub fn buff(&self, key: &str) -> Option<&BuffDefinition> {
        self.buffs.get(key)
    }

    pub fn enemy(&self, key: &str) -> Option<&EnemyDefinition> {
        self.enemies.get(key)
    }

    /// Value of an artifact main stat
    pub fn main_stat_value(&self, key: &str) -> Option<f64> {
        self.main_stats.get(key).copied()
    }

    /// The 2-piece bonus registered for an artifact set (`<set>_2pc`)
    pub fn set_bonus(&self, set: &str) -> Option<&BuffDefinition> {
        self.buffs.get(&format!("{}_2pc", set))
    }

    /// Check structural invariants of the reference data
    ///
    /// Missing cross-references are not errors; they degrade at compute time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        for (key, weapon) in &self.weapons {
            if !weapon.refinements.is_empty() && weapon.refinements.len() != 5 {
                problems.push(format!(
                    "weapon '{}' has {} refinement tiers, expected 5",
                    key,
                    weapon.refinements.len()
                ));
            }
        }

        for (char_key, character) in &self.characters {
            for (talent_key, talent) in &character.talents {
                if talent.multipliers.is_empty() {
                    problems.push(format!("talent '{}.{}' has no multipliers", char_key, talent_key));
                }
                if talent.flat_scaling_stat.is_some() && talent.flat_multipliers.is_empty() {
                    problems.push(format!(
                        "talent '{}.{}' declares flat scaling without multipliers",
                        char_key, talent_key
                    ));
                }
            }
        }

        for (key, buff) in &self.buffs {
            if let Some(stackable) = &buff.stackable {
                if stackable.max_stacks == 0 {
                    problems.push(format!("buff '{}' has max_stacks = 0", key));
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::ValidationError(problems.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_catalog() {
        let toml = r#"
[main_stats]
atk = 311
atk_percent = 0.466

[weapons.dull_blade]
base_atk = 185

[enemies.dummy]
level = 90
resistances = { pyro = 0.1 }
"#;
        let catalog = Catalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.main_stat_value("atk"), Some(311.0));
        assert!(catalog.weapon("dull_blade").is_some());
        assert!(catalog.enemy("dummy").is_some());
        assert!(catalog.character("nobody").is_none());
    }

    #[test]
    fn test_missing_constants_use_shipped_file() {
        let catalog = Catalog::from_toml_str("[weapons.dull_blade]\nbase_atk = 185\n").unwrap();
        assert_eq!(catalog.constants, default_constants());
        assert_eq!(Catalog::default().constants, default_constants());
    }

    #[test]
    fn test_refinement_metadata_does_not_block_loading() {
        let toml = r#"
[weapons.the_catch]
base_atk = 510

[[weapons.the_catch.refinements]]
atk_percent = 0.2
notes = ["on hit", "stacks"]

[[weapons.the_catch.refinements]]
atk_percent = 0.25

[[weapons.the_catch.refinements]]
atk_percent = 0.3

[[weapons.the_catch.refinements]]
atk_percent = 0.35

[[weapons.the_catch.refinements]]
atk_percent = 0.4
"#;
        let catalog = Catalog::from_toml_str(toml).unwrap();
        let tier = catalog.weapon("the_catch").unwrap().refinement(1).unwrap();
        assert_eq!(tier.numeric_effects().collect::<Vec<_>>(), vec![("atk_percent", 0.2)]);
    }

    #[test]
    fn test_validation_rejects_partial_refinements() {
        let toml = r#"
[weapons.broken]
base_atk = 500
refinements = [{ atk_percent = 0.1 }, { atk_percent = 0.2 }]
"#;
        let err = Catalog::from_toml_str(toml).unwrap_err();
        match err {
            ConfigError::ValidationError(msg) => assert!(msg.contains("broken")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validation_rejects_zero_max_stacks() {
        let json = r#"{
            "buffs": {
                "bad": {
                    "source_type": "character",
                    "source": "x",
                    "stackable": { "max_stacks": 0 }
                }
            }
        }"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_set_bonus_lookup() {
        let json = r#"{
            "buffs": {
                "crimson_witch_2pc": {
                    "source_type": "artifact_set",
                    "source": "crimson_witch",
                    "effects": { "pyro_dmg_bonus": 0.15 }
                }
            }
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        let bonus = catalog.set_bonus("crimson_witch").unwrap();
        assert_eq!(bonus.effects.get("pyro_dmg_bonus"), Some(&0.15));
        assert!(catalog.set_bonus("gladiator").is_none());
    }
}
