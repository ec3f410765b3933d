// Shared test double for the host engine.
//
// Records every capability call in order and keeps just enough scripted
// state (healths, player flags, the live entity list, a view angle) for
// behaviors to read back what they wrote.

use std::collections::{HashMap, HashSet};

use parking_lot::Mutex;

use crate::effect::MobEffect;
use crate::host::{EntityId, Host};
use crate::item::ItemId;

const DEFAULT_HEALTH: i32 = 20;

#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    SetHealth(EntityId, i32),
    SetFireTicks(EntityId, i32),
    SetVelocityY(EntityId, f32),
    AddEffect {
        entity: EntityId,
        effect: MobEffect,
        duration_ticks: i32,
        amplifier: i32,
        ambient: bool,
        particles: bool,
    },
    SetBlock {
        x: i32,
        y: i32,
        z: i32,
        block_id: i32,
        block_data: i32,
    },
    Explode {
        x: i32,
        y: i32,
        z: i32,
        radius: f32,
        fire: bool,
    },
    RegisterItem {
        id: ItemId,
        icon: String,
        styled_name: String,
    },
    AddToCreative(ItemId),
    ShowTip(String),
}

pub struct RecordingHost {
    calls: Mutex<Vec<HostCall>>,
    healths: Mutex<HashMap<EntityId, i32>>,
    players: Mutex<HashSet<EntityId>>,
    live: Mutex<Vec<EntityId>>,
    view: Mutex<(f32, f32)>,
}

impl RecordingHost {
    pub fn new() -> Self {
        RecordingHost {
            calls: Mutex::new(Vec::new()),
            healths: Mutex::new(HashMap::new()),
            players: Mutex::new(HashSet::new()),
            live: Mutex::new(Vec::new()),
            view: Mutex::new((0.0, 0.0)),
        }
    }

    /// Scripts an entity's starting health.
    pub fn set_entity_health(&self, entity: EntityId, health: i32) {
        self.healths.lock().insert(entity, health);
    }

    /// Marks an entity as player-controlled.
    pub fn mark_player(&self, entity: EntityId) {
        self.players.lock().insert(entity);
    }

    /// Populates the live entity list, in enumeration order.
    pub fn spawn_entities(&self, entities: &[EntityId]) {
        self.live.lock().extend_from_slice(entities);
    }

    /// Scripts the view angle reported for every entity.
    #[allow(dead_code)] // Exercised once view-dependent behaviors grow tests beyond the zero-angle path
    pub fn set_view(&self, yaw: f32, pitch: f32) {
        *self.view.lock() = (yaw, pitch);
    }

    /// Everything the library asked the host to do, in order.
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().clone()
    }

    /// Every block placement, in order, as (x, y, z, block_id, block_data).
    pub fn blocks_set(&self) -> Vec<(i32, i32, i32, i32, i32)> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                HostCall::SetBlock {
                    x,
                    y,
                    z,
                    block_id,
                    block_data,
                } => Some((*x, *y, *z, *block_id, *block_data)),
                _ => None,
            })
            .collect()
    }

    /// The target of every status effect application, in order.
    pub fn effect_targets(&self) -> Vec<EntityId> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                HostCall::AddEffect { entity, .. } => Some(*entity),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().push(call);
    }
}

impl Host for RecordingHost {
    fn health(&self, entity: EntityId) -> i32 {
        self.healths
            .lock()
            .get(&entity)
            .copied()
            .unwrap_or(DEFAULT_HEALTH)
    }

    fn set_health(&self, entity: EntityId, health: i32) {
        self.healths.lock().insert(entity, health);
        self.record(HostCall::SetHealth(entity, health));
    }

    fn set_fire_ticks(&self, entity: EntityId, ticks: i32) {
        self.record(HostCall::SetFireTicks(entity, ticks));
    }

    fn set_velocity_y(&self, entity: EntityId, velocity: f32) {
        self.record(HostCall::SetVelocityY(entity, velocity));
    }

    fn add_effect(
        &self,
        entity: EntityId,
        effect: MobEffect,
        duration_ticks: i32,
        amplifier: i32,
        ambient: bool,
        particles: bool,
    ) {
        self.record(HostCall::AddEffect {
            entity,
            effect,
            duration_ticks,
            amplifier,
            ambient,
            particles,
        });
    }

    fn entities(&self) -> Vec<EntityId> {
        self.live.lock().clone()
    }

    fn is_player(&self, entity: EntityId) -> bool {
        self.players.lock().contains(&entity)
    }

    fn yaw(&self, _entity: EntityId) -> f32 {
        self.view.lock().0
    }

    fn pitch(&self, _entity: EntityId) -> f32 {
        self.view.lock().1
    }

    fn set_block(&self, x: i32, y: i32, z: i32, block_id: i32, block_data: i32) {
        self.record(HostCall::SetBlock {
            x,
            y,
            z,
            block_id,
            block_data,
        });
    }

    fn explode(&self, x: i32, y: i32, z: i32, radius: f32, fire: bool) {
        self.record(HostCall::Explode {
            x,
            y,
            z,
            radius,
            fire,
        });
    }

    fn register_item(
        &self,
        id: ItemId,
        icon: &str,
        _icon_variant: i32,
        styled_name: &str,
        _max_stack: i32,
    ) {
        self.record(HostCall::RegisterItem {
            id,
            icon: icon.to_string(),
            styled_name: styled_name.to_string(),
        });
    }

    fn add_to_creative_inventory(&self, id: ItemId, _count: i32, _data: i32) {
        self.record(HostCall::AddToCreative(id));
    }

    fn show_tip(&self, message: &str) {
        self.record(HostCall::ShowTip(message.to_string()));
    }
}
