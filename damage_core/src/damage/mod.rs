//! Damage system - Turning resolved stats and a talent into damage

mod calculation;
mod reaction;
mod result;

pub use calculation::{compute_damage, resolve_damage_type, DamageContext};
pub use reaction::{additive_damage, amplifying_multiplier};
pub use result::{DamageResult, DamageTrace};
