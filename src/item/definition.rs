use std::fmt;

use serde::{Deserialize, Serialize};

use super::behavior::{AttackBehavior, TouchBehavior};
use crate::cooldown::Cooldown;

/// Numeric item identifier assigned by the host's item loader.
///
/// Custom items occupy whatever id block the mod pack reserves; nothing in
/// this library assumes the block is contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub i32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The blueprint for one custom item
///
/// A definition is assembled with the builder methods at startup and never
/// mutated afterwards: the registry owns it for the lifetime of the mod
/// session. Either behavior slot (or both, or neither) may be populated; a
/// definition with neither is a decorative item that dispatches to nothing.
#[derive(Debug)]
pub struct ItemDefinition {
    id: ItemId,
    name: String,
    styled_name: String,
    icon: String,
    icon_variant: i32,
    attack: Option<AttackBehavior>,
    touch: Option<TouchBehavior>,
    cooldown: Option<Cooldown>,
}

impl ItemDefinition {
    /// Creates a definition with no behaviors, no cooldown, and the default
    /// icon. The styled name starts out identical to the plain name.
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        let name = name.into();
        ItemDefinition {
            id,
            styled_name: name.clone(),
            name,
            icon: "map_empty".to_string(),
            icon_variant: 0,
            attack: None,
            touch: None,
            cooldown: None,
        }
    }

    /// Sets the color-coded name shown by the host's inventory UI.
    pub fn with_styled_name(mut self, styled_name: impl Into<String>) -> Self {
        self.styled_name = styled_name.into();
        self
    }

    /// Sets the host texture reference used for the item icon.
    pub fn with_icon(mut self, icon: impl Into<String>, variant: i32) -> Self {
        self.icon = icon.into();
        self.icon_variant = variant;
        self
    }

    /// Sets the behavior run when an entity is struck with this item.
    pub fn with_attack(mut self, attack: AttackBehavior) -> Self {
        self.attack = Some(attack);
        self
    }

    /// Sets the behavior run when this item is used at a world location.
    pub fn with_touch(mut self, touch: TouchBehavior) -> Self {
        self.touch = Some(touch);
        self
    }

    /// Gates this item behind a cooldown of the given number of seconds.
    pub fn with_cooldown_secs(mut self, secs: u64) -> Self {
        self.cooldown = Some(Cooldown::from_secs(secs));
        self
    }

    /// Unique identifier within the registry.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Plain display name, used in user-facing messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Color-coded name registered with the host.
    pub fn styled_name(&self) -> &str {
        &self.styled_name
    }

    /// Host texture reference for the item icon.
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Texture variant index for the item icon.
    pub fn icon_variant(&self) -> i32 {
        self.icon_variant
    }

    /// Behavior for "entity struck entity" events, if any.
    pub fn attack(&self) -> Option<&AttackBehavior> {
        self.attack.as_ref()
    }

    /// Behavior for "item used at a location" events, if any.
    pub fn touch(&self) -> Option<&TouchBehavior> {
        self.touch.as_ref()
    }

    /// The availability gate, if this item has one.
    pub fn cooldown(&self) -> Option<&Cooldown> {
        self.cooldown.as_ref()
    }
}
