use super::definition::{ItemDefinition, ItemId};
use super::error::RegistryError;
use crate::host::Host;

/// Central registry of all custom item definitions
///
/// This is the single source of truth for what items this mod pack adds.
/// It is populated once at startup and read-only afterwards; dispatch looks
/// definitions up by the numeric id the host reports in its event callbacks.
///
/// Storage is a plain ordered list. Tables top out around twenty entries, so
/// a linear scan beats the bookkeeping of a map.
pub struct ItemRegistry {
    items: Vec<ItemDefinition>,
}

impl ItemRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        ItemRegistry { items: Vec::new() }
    }

    /// Registers a new item definition
    ///
    /// Returns an error if an item with this id already exists.
    pub fn register(&mut self, item: ItemDefinition) -> Result<(), RegistryError> {
        if self.exists(item.id()) {
            return Err(RegistryError::DuplicateItem(item.id()));
        }

        self.items.push(item);
        Ok(())
    }

    /// Gets an item definition by id
    ///
    /// Returns None if no item with this id exists.
    pub fn get(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Returns true if an item with this id exists
    pub fn exists(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    /// Number of registered items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over all definitions in registration order
    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter()
    }

    /// Declares every registered item with the host's item loader and drops
    /// one of each into the creative inventory.
    ///
    /// Called once at mod startup, after the table is fully built.
    pub fn announce(&self, host: &dyn Host) {
        for item in &self.items {
            host.register_item(
                item.id(),
                item.icon(),
                item.icon_variant(),
                item.styled_name(),
                0,
            );
            host.add_to_creative_inventory(item.id(), 1, 0);
        }
    }
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}
