//! The capability interface to the host game engine
//!
//! Everything this library does to the running game goes through the [`Host`]
//! trait: entity mutation, world mutation, item registration, and transient
//! UI messages. The live implementation wraps the engine's scripting surface;
//! tests substitute a recording fake. No host call can fail from this side of
//! the boundary, so every method returns `()`.

use std::fmt;

use crate::effect::MobEffect;
use crate::item::ItemId;

/// Handle to a live entity owned by the host engine.
///
/// The host hands these out in event callbacks. They are opaque: the only
/// valid operations are passing them back into [`Host`] methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub i64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}

/// Capabilities consumed from the host engine.
///
/// The surface is deliberately narrow: only the calls the shipped behaviors
/// actually make. Coordinates are world-space block coordinates, durations
/// are game ticks, and health is in the host's half-heart units.
pub trait Host: Send + Sync {
    /// Current health of an entity.
    fn health(&self, entity: EntityId) -> i32;

    /// Overwrites an entity's health. The host owns clamping and death.
    fn set_health(&self, entity: EntityId, health: i32);

    /// Sets an entity on fire for the given number of ticks.
    fn set_fire_ticks(&self, entity: EntityId, ticks: i32);

    /// Sets an entity's vertical velocity.
    fn set_velocity_y(&self, entity: EntityId, velocity: f32);

    /// Applies a status effect to an entity.
    ///
    /// `ambient` and `particles` are passed through to the host unchanged;
    /// this library never interprets them.
    fn add_effect(
        &self,
        entity: EntityId,
        effect: MobEffect,
        duration_ticks: i32,
        amplifier: i32,
        ambient: bool,
        particles: bool,
    );

    /// Every entity currently alive in the world.
    fn entities(&self) -> Vec<EntityId>;

    /// Whether an entity is a player-controlled character.
    fn is_player(&self, entity: EntityId) -> bool;

    /// An entity's view yaw, in degrees.
    fn yaw(&self, entity: EntityId) -> f32;

    /// An entity's view pitch, in degrees.
    fn pitch(&self, entity: EntityId) -> f32;

    /// Places a block at integer world coordinates.
    fn set_block(&self, x: i32, y: i32, z: i32, block_id: i32, block_data: i32);

    /// Triggers an explosion centered at the given coordinates.
    fn explode(&self, x: i32, y: i32, z: i32, radius: f32, fire: bool);

    /// Declares a custom item with the host's item loader.
    fn register_item(
        &self,
        id: ItemId,
        icon: &str,
        icon_variant: i32,
        styled_name: &str,
        max_stack: i32,
    );

    /// Makes a registered item obtainable from the creative inventory.
    fn add_to_creative_inventory(&self, id: ItemId, count: i32, data: i32);

    /// Shows a transient message to the player.
    fn show_tip(&self, message: &str);
}
