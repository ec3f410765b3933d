//! Event dispatch
//!
//! The host engine delivers two callbacks: "entity struck entity" and "item
//! used at a location". The [`Dispatcher`] routes each to the matching item
//! definition, enforces the cooldown gate, and runs the behavior for that
//! event, in a fixed order:
//!
//! 1. Look up the carried item id. Unknown ids are not errors; most ids in
//!    the world belong to the base game or other mods and are ignored.
//! 2. Claim the cooldown gate if there is one. A closed gate suppresses the
//!    use entirely (and tells the player so).
//! 3. Run the behavior in the triggered slot, if that slot is populated.
//! 4. Queue the gate's re-arm task. The gate closes before the behavior runs
//!    and the timer starts only after it finishes, so a slow effect can
//!    never race its own re-arm.

use std::sync::Arc;

use crate::host::{EntityId, Host};
use crate::item::{ItemDefinition, ItemId, ItemRegistry};
use crate::scheduler::Scheduler;

/// Routes host event callbacks to registered item behaviors.
///
/// Holds the registry read-only; all per-use state lives in the items'
/// cooldown gates.
pub struct Dispatcher {
    registry: ItemRegistry,
    host: Arc<dyn Host>,
    scheduler: Arc<dyn Scheduler>,
}

impl Dispatcher {
    /// Creates a dispatcher over a fully built registry.
    pub fn new(registry: ItemRegistry, host: Arc<dyn Host>, scheduler: Arc<dyn Scheduler>) -> Self {
        Dispatcher {
            registry,
            host,
            scheduler,
        }
    }

    /// The registry this dispatcher routes against.
    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    /// Host callback: `attacker` struck `victim` while carrying
    /// `carried_item`.
    pub fn on_entity_struck(&self, attacker: EntityId, victim: EntityId, carried_item: ItemId) {
        let Some(item) = self.registry.get(carried_item) else {
            log::trace!("ignoring strike with unregistered item {}", carried_item);
            return;
        };

        if !self.claim_gate(item) {
            return;
        }

        if let Some(attack) = item.attack() {
            log::debug!("{} strikes {}", item.name(), victim);
            attack.execute(self.host.as_ref(), attacker, victim);
        }

        self.queue_rearm(item);
    }

    /// Host callback: `user` used `item_id` at block coordinates
    /// (`x`, `y`, `z`).
    pub fn on_item_used_at(&self, x: i32, y: i32, z: i32, user: EntityId, item_id: ItemId) {
        let Some(item) = self.registry.get(item_id) else {
            log::trace!("ignoring use of unregistered item {}", item_id);
            return;
        };

        if !self.claim_gate(item) {
            return;
        }

        if let Some(touch) = item.touch() {
            log::debug!("{} used at ({}, {}, {})", item.name(), x, y, z);
            touch.execute(&self.host, self.scheduler.as_ref(), x, y, z, user);
        }

        self.queue_rearm(item);
    }

    /// Claims the item's gate, if it has one. A closed gate means the use is
    /// dropped; the player gets a transient notice.
    fn claim_gate(&self, item: &ItemDefinition) -> bool {
        let Some(cooldown) = item.cooldown() else {
            return true;
        };

        if cooldown.try_acquire() {
            true
        } else {
            self.host
                .show_tip(&format!("{}§f§r is not available", item.name()));
            false
        }
    }

    fn queue_rearm(&self, item: &ItemDefinition) {
        if let Some(cooldown) = item.cooldown() {
            cooldown.schedule_rearm(self.scheduler.as_ref());
        }
    }
}
