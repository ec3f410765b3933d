//! Attack and touch behaviors
//!
//! Behaviors are data: each variant carries its tuning values and a single
//! `execute` operation that plays them out through the host interface. Item
//! tables pick variants; nothing here knows which item it belongs to.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::effect::EffectInstance;
use crate::host::{EntityId, Host};
use crate::scheduler::Scheduler;

/// Ticks of burn applied by fire-based strikes.
pub const FIRE_TICKS: i32 = 10;

/// Block id of fire in the host's block table.
const FIRE_BLOCK: i32 = 51;

/// Block id of air, used to revert temporary placements.
const AIR_BLOCK: i32 = 0;

/// Degrees-to-radians factor used by the host's view math.
const DEG_TO_RAD: f32 = 0.017;

/// Effect run when an entity is struck with the carrying item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttackBehavior {
    /// Reduce the victim's health by a flat amount
    Damage { amount: i32 },

    /// Set the victim on fire, then deal flat damage
    FireDamage { amount: i32 },

    /// Apply a status effect to the victim
    ApplyEffect { effect: EffectInstance },

    /// Deal damage (if any) and grant the attacker one or more effects
    BuffAttacker {
        damage: i32,
        effects: Vec<EffectInstance>,
    },

    /// Deal damage (if any) and knock the victim upward
    Launch { damage: i32, velocity_y: f32 },

    /// Ignite and damage the victim; if the victim is a player, restore
    /// `drain` health to the attacker
    LeechHealth { damage: i32, drain: i32 },
}

impl AttackBehavior {
    /// Plays this behavior out against the struck victim.
    pub fn execute(&self, host: &dyn Host, attacker: EntityId, victim: EntityId) {
        match self {
            AttackBehavior::Damage { amount } => {
                deal_damage(host, victim, *amount);
            }
            AttackBehavior::FireDamage { amount } => {
                host.set_fire_ticks(victim, FIRE_TICKS);
                deal_damage(host, victim, *amount);
            }
            AttackBehavior::ApplyEffect { effect } => {
                effect.apply(host, victim);
            }
            AttackBehavior::BuffAttacker { damage, effects } => {
                if *damage > 0 {
                    deal_damage(host, victim, *damage);
                }
                for effect in effects {
                    effect.apply(host, attacker);
                }
            }
            AttackBehavior::Launch { damage, velocity_y } => {
                if *damage > 0 {
                    deal_damage(host, victim, *damage);
                }
                host.set_velocity_y(victim, *velocity_y);
            }
            AttackBehavior::LeechHealth { damage, drain } => {
                host.set_fire_ticks(victim, FIRE_TICKS);
                deal_damage(host, victim, *damage);
                if host.is_player(victim) {
                    host.set_health(attacker, host.health(attacker) + drain);
                }
            }
        }
    }
}

/// Effect run when the carrying item is used at a world location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TouchBehavior {
    /// Host explosion centered at the touched coordinates
    Explode { radius: f32, fire: bool },

    /// Fill a cube of blocks around the touched coordinates
    FillBlocks {
        range: i32,
        block_id: i32,
        block_data: i32,
    },

    /// Place a 3x3x3 volume rooted at the touched coordinates, then revert
    /// every cell to air after a delay
    TemporaryCage {
        block_id: i32,
        block_data: i32,
        revert_secs: u64,
    },

    /// Apply a status effect to every live entity except the user.
    /// The `range` field is carried for table parity; it does not filter
    /// targets by distance.
    EffectOthers { range: i32, effect: EffectInstance },

    /// Apply a status effect to the user only
    EffectUser { effect: EffectInstance },

    /// Paint fire blocks along the user's line of sight, starting three
    /// blocks out and stopping short of `reach`
    FlameTrail { reach: i32 },
}

impl TouchBehavior {
    /// Plays this behavior out at the touched location.
    ///
    /// `host` arrives as an `Arc` because delayed variants hand it to the
    /// scheduler; everything else borrows it.
    pub fn execute(
        &self,
        host: &Arc<dyn Host>,
        scheduler: &dyn Scheduler,
        x: i32,
        y: i32,
        z: i32,
        user: EntityId,
    ) {
        match self {
            TouchBehavior::Explode { radius, fire } => {
                host.explode(x, y, z, *radius, *fire);
            }
            TouchBehavior::FillBlocks {
                range,
                block_id,
                block_data,
            } => {
                fill_cube(host.as_ref(), x, y, z, *range, *block_id, *block_data);
            }
            TouchBehavior::TemporaryCage {
                block_id,
                block_data,
                revert_secs,
            } => {
                fill_cage(host.as_ref(), x, y, z, *block_id, *block_data);

                let host = Arc::clone(host);
                scheduler.schedule(
                    Duration::from_secs(*revert_secs),
                    Box::new(move || {
                        fill_cage(host.as_ref(), x, y, z, AIR_BLOCK, 0);
                    }),
                );
            }
            TouchBehavior::EffectOthers { range: _, effect } => {
                for entity in host.entities() {
                    if entity != user {
                        effect.apply(host.as_ref(), entity);
                    }
                }
            }
            TouchBehavior::EffectUser { effect } => {
                effect.apply(host.as_ref(), user);
            }
            TouchBehavior::FlameTrail { reach } => {
                let yaw = host.yaw(user) * DEG_TO_RAD;
                let pitch = host.pitch(user) * DEG_TO_RAD;
                let sin = -yaw.sin();
                let cos = yaw.cos();
                let pcos = pitch.cos();

                for i in 3..*reach {
                    let fx = x as f32 + i as f32 * sin * pcos;
                    let fz = z as f32 + i as f32 * cos * pcos;
                    host.set_block(fx as i32, y, fz as i32, FIRE_BLOCK, 0);
                }
            }
        }
    }
}

fn deal_damage(host: &dyn Host, victim: EntityId, amount: i32) {
    host.set_health(victim, host.health(victim) - amount);
}

/// Fills the cube spanning, on each axis, `c - range/2` through
/// `c - range/2 + (range + 1)/2` inclusive.
///
/// The bounds are deliberately lopsided for even ranges (a range of 2 covers
/// offsets -1 and 0, not -1 through 1); existing content packs were tuned
/// against exactly this footprint.
fn fill_cube(host: &dyn Host, cx: i32, cy: i32, cz: i32, range: i32, block_id: i32, block_data: i32) {
    let lo_x = cx - range / 2;
    let lo_y = cy - range / 2;
    let lo_z = cz - range / 2;
    let half_up = (range + 1) / 2;

    for x in lo_x..=lo_x + half_up {
        for y in lo_y..=lo_y + half_up {
            for z in lo_z..=lo_z + half_up {
                host.set_block(x, y, z, block_id, block_data);
            }
        }
    }
}

/// Places the fixed cage volume: one block out on x and z, floor level
/// through two blocks up on y.
fn fill_cage(host: &dyn Host, x: i32, y: i32, z: i32, block_id: i32, block_data: i32) {
    for dx in -1..=1 {
        for dy in 0..=2 {
            for dz in -1..=1 {
                host.set_block(x + dx, y + dy, z + dz, block_id, block_data);
            }
        }
    }
}
