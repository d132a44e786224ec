//! RuleContext - Team and build state a dynamic rule is evaluated against

use crate::character_build::{ActiveBuffs, CharacterBuild, TeamContext};
use crate::config::Catalog;
use crate::definition::{BuffDefinition, CharacterDefinition, WeaponDefinition};
use crate::types::BuffSourceType;

/// Everything a rule may read. Passed explicitly into every evaluation.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub catalog: &'a Catalog,
    pub team: TeamContext<'a>,
    /// Character whose stats are being resolved
    pub receiver: &'a str,
    pub receiver_build: &'a CharacterBuild,
    /// Buff toggles of the action being resolved
    pub active_buffs: &'a ActiveBuffs,
}

/// The team member a buff comes from
#[derive(Debug, Clone, Copy)]
pub struct Holder<'a> {
    pub key: &'a str,
    pub build: &'a CharacterBuild,
    pub character: Option<&'a CharacterDefinition>,
    pub weapon: Option<&'a WeaponDefinition>,
}

impl<'a> Holder<'a> {
    /// Character base ATK + weapon base ATK
    pub fn base_atk(&self) -> f64 {
        self.character.map(|c| c.base_atk).unwrap_or(0.0)
            + self.weapon.map(|w| w.base_atk).unwrap_or(0.0)
    }
}

impl<'a> RuleContext<'a> {
    /// Find the holder of a buff: the receiver first, then the rest of the team
    pub fn holder(&self, buff: &BuffDefinition) -> Option<Holder<'a>> {
        let receiver = std::iter::once((self.receiver, self.receiver_build));
        let teammates = self
            .team
            .member_keys()
            .filter(move |key| *key != self.receiver)
            .filter_map(move |key| self.team.build(key).map(|build| (key, build)));

        let found = receiver.chain(teammates).find(|(key, build)| match buff.source_type {
            BuffSourceType::Character | BuffSourceType::Constellation => *key == buff.source,
            BuffSourceType::Weapon => build.weapon_key() == Some(buff.source.as_str()),
            BuffSourceType::ArtifactSet => build.artifacts.uses_set(&buff.source),
        });

        match found {
            Some((key, build)) => Some(Holder {
                key,
                build,
                character: self.catalog.character(key),
                weapon: build.weapon_key().and_then(|w| self.catalog.weapon(w)),
            }),
            None => {
                tracing::debug!(
                    source = %buff.source,
                    receiver = %self.receiver,
                    "buff holder not on team"
                );
                None
            }
        }
    }

    /// Whether a holder meets a buff's constellation requirement
    pub fn meets_constellation(&self, buff: &BuffDefinition, holder: &Holder<'_>) -> bool {
        buff.min_constellation
            .map(|rank| holder.build.constellation >= rank)
            .unwrap_or(true)
    }
}
