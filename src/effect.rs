//! Status effect identifiers and application records
//!
//! The host engine identifies potion-style status effects by small numeric
//! ids. [`MobEffect`] names them; [`EffectInstance`] bundles one effect with
//! its duration and amplifier so item tables can carry "what to apply" as
//! plain data.

use serde::{Deserialize, Serialize};

use crate::host::{EntityId, Host};

/// Status effect types understood by the host engine.
///
/// Discriminant values are the host's numeric effect ids and must not be
/// renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MobEffect {
    Speed = 1,
    Slowness = 2,
    Haste = 3,
    MiningFatigue = 4,
    Strength = 5,
    InstantHealth = 6,
    InstantDamage = 7,
    JumpBoost = 8,
    Nausea = 9,
    Regeneration = 10,
    Resistance = 11,
    FireResistance = 12,
    WaterBreathing = 13,
    Invisibility = 14,
    Blindness = 15,
    NightVision = 16,
    Hunger = 17,
    Weakness = 18,
    Poison = 19,
    Wither = 20,
    HealthBoost = 21,
    Absorption = 22,
    Saturation = 23,
}

impl MobEffect {
    /// The numeric id the host uses for this effect.
    pub fn id(self) -> i32 {
        self as i32
    }
}

/// One concrete status effect application: what, how long, how strong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectInstance {
    /// Which effect to apply
    pub effect: MobEffect,

    /// Duration in game ticks
    pub duration_ticks: i32,

    /// Effect level minus one (0 = level I)
    pub amplifier: i32,
}

impl EffectInstance {
    /// Creates a new effect instance.
    pub fn new(effect: MobEffect, duration_ticks: i32, amplifier: i32) -> Self {
        EffectInstance {
            effect,
            duration_ticks,
            amplifier,
        }
    }

    /// Applies this effect to a target entity.
    ///
    /// The ambient/particle flags are fixed at (false, true), matching the
    /// host's direct-application convention for item-granted effects.
    pub fn apply(&self, host: &dyn Host, target: EntityId) {
        host.add_effect(
            target,
            self.effect,
            self.duration_ticks,
            self.amplifier,
            false,
            true,
        );
    }
}
