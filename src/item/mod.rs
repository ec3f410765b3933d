// Item system module
//
// This module provides the core item model for the mod pack, including:
// - Item definitions (identity, display, behavior slots, cooldown gate)
// - Attack and touch behaviors as data-carrying variants
// - The item registry, the single source of truth for what the pack adds

pub mod behavior;
pub mod definition;
pub mod error;
pub mod registry;

// Re-export main types for convenient access
pub use behavior::{AttackBehavior, FIRE_TICKS, TouchBehavior};
pub use definition::{ItemDefinition, ItemId};
pub use error::RegistryError;
pub use registry::ItemRegistry;
