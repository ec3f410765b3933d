//! Custom weapon and magic items for a mobile sandbox-game scripting host
//!
//! The host engine owns the world, the entities, and the event loop; this
//! library owns a table of custom items and what they do. Wire the host's
//! two item events into a [`Dispatcher`] and it routes each one to the
//! matching [`item::ItemDefinition`], honoring per-item cooldowns:
//!
//! ```no_run
//! use std::sync::Arc;
//! use pocket_arsenal::{arsenal, EntityId, Host, ItemId};
//! # fn engine_host() -> Arc<dyn Host> { unimplemented!() }
//!
//! let dispatcher = arsenal::install(engine_host());
//!
//! // From the host's "entity struck entity" hook:
//! dispatcher.on_entity_struck(EntityId(12), EntityId(34), ItemId(256));
//!
//! // From the host's "item used at a location" hook:
//! dispatcher.on_item_used_at(100, 64, -20, EntityId(12), ItemId(275));
//! ```
//!
//! Everything the items do to the game flows through the [`Host`] capability
//! trait, so the whole pack runs against a fake host in tests.

pub mod arsenal;
pub mod config;
pub mod cooldown;
pub mod dispatcher;
pub mod effect;
pub mod host;
pub mod item;
pub mod scheduler;

#[cfg(test)]
mod testutil;

pub use cooldown::Cooldown;
pub use dispatcher::Dispatcher;
pub use effect::{EffectInstance, MobEffect};
pub use host::{EntityId, Host};
pub use item::{AttackBehavior, ItemDefinition, ItemId, ItemRegistry, RegistryError, TouchBehavior};
pub use scheduler::{ManualScheduler, Scheduler, ThreadScheduler};
