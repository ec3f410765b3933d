use std::fmt;

use super::definition::ItemId;

/// Errors that can occur while building an item registry
#[derive(Debug, Clone)]
pub enum RegistryError {
    /// An item with this id was already registered
    DuplicateItem(ItemId),

    /// An item table could not be parsed
    InvalidTable(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RegistryError::DuplicateItem(id) => {
                write!(f, "Item {} already registered", id)
            }
            RegistryError::InvalidTable(reason) => {
                write!(f, "Invalid item table: {}", reason)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

impl From<serde_json::Error> for RegistryError {
    fn from(error: serde_json::Error) -> Self {
        RegistryError::InvalidTable(error.to_string())
    }
}
