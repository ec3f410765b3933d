//! Data-driven item tables
//!
//! The shipped arsenal is compiled in, but every knob on an item definition
//! is plain data, so a pack can also be described as JSON and loaded at
//! startup. One table row:
//!
//! ```json
//! {
//!     "id": 258,
//!     "name": "Assassin I",
//!     "styled_name": "§c§oAssassin I",
//!     "attack": { "BuffAttacker": { "damage": 3, "effects": [
//!         { "effect": "Invisibility", "duration_ticks": 160, "amplifier": 0 }
//!     ] } },
//!     "cooldown_secs": 25
//! }
//! ```
//!
//! Omitted fields fall back to the same defaults the builder uses.

use serde::{Deserialize, Serialize};

use crate::item::{AttackBehavior, ItemDefinition, ItemId, ItemRegistry, RegistryError, TouchBehavior};

/// One row of a JSON item table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemEntry {
    pub id: ItemId,
    pub name: String,

    /// Color-coded inventory name; defaults to `name`
    #[serde(default)]
    pub styled_name: Option<String>,

    /// Host texture reference for the icon
    #[serde(default = "default_icon")]
    pub icon: String,

    /// Texture variant index
    #[serde(default)]
    pub icon_variant: i32,

    #[serde(default)]
    pub attack: Option<AttackBehavior>,

    #[serde(default)]
    pub touch: Option<TouchBehavior>,

    /// Cooldown in whole seconds; absent means ungated
    #[serde(default)]
    pub cooldown_secs: Option<u64>,
}

fn default_icon() -> String {
    "map_empty".to_string()
}

impl ItemEntry {
    /// Builds the runtime definition this row describes.
    pub fn into_definition(self) -> ItemDefinition {
        let mut item = ItemDefinition::new(self.id, self.name).with_icon(self.icon, self.icon_variant);

        if let Some(styled_name) = self.styled_name {
            item = item.with_styled_name(styled_name);
        }
        if let Some(attack) = self.attack {
            item = item.with_attack(attack);
        }
        if let Some(touch) = self.touch {
            item = item.with_touch(touch);
        }
        if let Some(secs) = self.cooldown_secs {
            item = item.with_cooldown_secs(secs);
        }

        item
    }
}

/// Builds a registry from a JSON array of [`ItemEntry`] rows.
///
/// Fails on malformed JSON and on duplicate ids; a partial table is never
/// returned.
pub fn registry_from_json(json: &str) -> Result<ItemRegistry, RegistryError> {
    let entries: Vec<ItemEntry> = serde_json::from_str(json)?;

    let mut registry = ItemRegistry::new();
    for entry in entries {
        registry.register(entry.into_definition())?;
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_row_uses_builder_defaults() {
        let registry = registry_from_json(r#"[{ "id": 260, "name": "Apollon I" }]"#).unwrap();

        let item = registry.get(ItemId(260)).unwrap();
        assert_eq!(item.name(), "Apollon I");
        assert_eq!(item.styled_name(), "Apollon I");
        assert_eq!(item.icon(), "map_empty");
        assert!(item.attack().is_none());
        assert!(item.touch().is_none());
        assert!(item.cooldown().is_none());
    }

    #[test]
    fn test_full_row_builds_a_gated_weapon() {
        let json = r#"[{
            "id": 267,
            "name": "Fighter II",
            "styled_name": "§b§oFighter II",
            "attack": { "Launch": { "damage": 4, "velocity_y": 10.0 } },
            "cooldown_secs": 45
        }]"#;
        let registry = registry_from_json(json).unwrap();

        let item = registry.get(ItemId(267)).unwrap();
        assert_eq!(item.styled_name(), "§b§oFighter II");
        assert_eq!(
            item.attack(),
            Some(&AttackBehavior::Launch {
                damage: 4,
                velocity_y: 10.0
            })
        );
        assert_eq!(
            item.cooldown().unwrap().duration(),
            std::time::Duration::from_secs(45)
        );
    }

    #[test]
    fn test_touch_rows_parse_effect_payloads() {
        use crate::effect::{EffectInstance, MobEffect};

        let json = r#"[{
            "id": 300,
            "name": "Warden",
            "touch": { "EffectOthers": { "range": 5, "effect": {
                "effect": "Slowness", "duration_ticks": 200, "amplifier": 0
            } } }
        }]"#;
        let registry = registry_from_json(json).unwrap();

        assert_eq!(
            registry.get(ItemId(300)).unwrap().touch(),
            Some(&TouchBehavior::EffectOthers {
                range: 5,
                effect: EffectInstance::new(MobEffect::Slowness, 200, 0),
            })
        );
    }

    #[test]
    fn test_duplicate_ids_fail_the_whole_table() {
        let json = r#"[
            { "id": 256, "name": "Ares I" },
            { "id": 256, "name": "Ares I again" }
        ]"#;

        assert!(matches!(
            registry_from_json(json),
            Err(RegistryError::DuplicateItem(ItemId(256)))
        ));
    }

    #[test]
    fn test_malformed_json_is_a_table_error() {
        let result = registry_from_json("not a table");
        assert!(matches!(result, Err(RegistryError::InvalidTable(_))));
    }
}
