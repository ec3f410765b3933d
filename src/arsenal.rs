//! The shipped weapon table
//!
//! Ten weapon families, two tiers each, occupying item ids 256 through 275.
//! Tier I items carry the red italic style, tier II the aqua italic style.
//! This is the table existing worlds were balanced against; tuning values
//! are not free to drift.

use std::sync::Arc;

use crate::dispatcher::Dispatcher;
use crate::effect::{EffectInstance, MobEffect};
use crate::host::Host;
use crate::item::{AttackBehavior, ItemDefinition, ItemId, ItemRegistry, TouchBehavior};
use crate::scheduler::ThreadScheduler;

/// First id of the block reserved for this pack.
pub const FIRST_ITEM_ID: i32 = 256;

const TIER_ONE_STYLE: &str = "§c§o";
const TIER_TWO_STYLE: &str = "§b§o";

fn tier_one(id: i32, name: &str) -> ItemDefinition {
    ItemDefinition::new(ItemId(id), name).with_styled_name(format!("{TIER_ONE_STYLE}{name}"))
}

fn tier_two(id: i32, name: &str) -> ItemDefinition {
    ItemDefinition::new(ItemId(id), name).with_styled_name(format!("{TIER_TWO_STYLE}{name}"))
}

/// Builds the registry with the full shipped arsenal.
pub fn default_registry() -> ItemRegistry {
    let mut registry = ItemRegistry::new();

    for item in shipped_items() {
        registry
            .register(item)
            .expect("Shipped arsenal contains a duplicate item id");
    }

    registry
}

/// Announces the shipped arsenal to the host and wires up a dispatcher with
/// the production timer. Call once from the mod's init hook, then feed the
/// host's event callbacks into the returned dispatcher.
pub fn install(host: Arc<dyn Host>) -> Dispatcher {
    let registry = default_registry();
    registry.announce(host.as_ref());

    Dispatcher::new(registry, host, Arc::new(ThreadScheduler::new()))
}

fn shipped_items() -> Vec<ItemDefinition> {
    vec![
        // Ares: plain swords, the pack's baseline damage dealers.
        tier_one(256, "Ares I").with_attack(AttackBehavior::Damage { amount: 6 }),
        tier_two(257, "Ares II").with_attack(AttackBehavior::Damage { amount: 8 }),
        // Assassin: strike and vanish.
        tier_one(258, "Assassin I")
            .with_attack(AttackBehavior::BuffAttacker {
                damage: 3,
                effects: vec![EffectInstance::new(MobEffect::Invisibility, 160, 0)],
            })
            .with_cooldown_secs(25),
        tier_two(259, "Assassin II")
            .with_attack(AttackBehavior::BuffAttacker {
                damage: 6,
                effects: vec![EffectInstance::new(MobEffect::Invisibility, 200, 0)],
            })
            .with_cooldown_secs(20),
        // Apollon: decorative tier, no wired behavior yet.
        tier_one(260, "Apollon I"),
        tier_two(261, "Apollon II"),
        // Barbarian: self-buffing bruisers.
        tier_one(262, "Barbarian I").with_attack(AttackBehavior::BuffAttacker {
            damage: 4,
            effects: vec![EffectInstance::new(MobEffect::Speed, 600, 1)],
        }),
        tier_two(263, "Barbarian II")
            .with_attack(AttackBehavior::BuffAttacker {
                damage: 6,
                effects: vec![
                    EffectInstance::new(MobEffect::Strength, 200, 1),
                    EffectInstance::new(MobEffect::Resistance, 200, 1),
                    EffectInstance::new(MobEffect::Regeneration, 200, 1),
                    EffectInstance::new(MobEffect::Absorption, 200, 1),
                ],
            })
            .with_cooldown_secs(200),
        // Stance: decorative tier I, venomous tier II.
        tier_one(264, "Stance I"),
        tier_two(265, "Stance II").with_attack(AttackBehavior::ApplyEffect {
            effect: EffectInstance::new(MobEffect::Poison, 200, 0),
        }),
        // Fighter: tier II launches the victim skyward.
        tier_one(266, "Fighter I").with_attack(AttackBehavior::Damage { amount: 4 }),
        tier_two(267, "Fighter II")
            .with_attack(AttackBehavior::Launch {
                damage: 4,
                velocity_y: 10.0,
            })
            .with_cooldown_secs(45),
        // Phoenix: fire-themed, tier II feeds on player victims.
        tier_one(268, "Phoenix I").with_attack(AttackBehavior::BuffAttacker {
            damage: 2,
            effects: vec![
                EffectInstance::new(MobEffect::Resistance, 600, 1),
                EffectInstance::new(MobEffect::Regeneration, 600, 0),
            ],
        }),
        tier_two(269, "Phoenix II").with_attack(AttackBehavior::LeechHealth { damage: 3, drain: 1 }),
        // Fire Magician: trail of fire, then a full incendiary blast.
        tier_one(270, "Fire Magician I")
            .with_attack(AttackBehavior::Damage { amount: 2 })
            .with_touch(TouchBehavior::FlameTrail { reach: 14 })
            .with_cooldown_secs(30),
        tier_two(271, "Fire Magician II")
            .with_attack(AttackBehavior::Damage { amount: 4 })
            .with_touch(TouchBehavior::Explode {
                radius: 3.0,
                fire: true,
            })
            .with_cooldown_secs(50),
        // Ice Magician: chills itself for balance, then walls victims in.
        tier_one(272, "Ice Magician I").with_attack(AttackBehavior::BuffAttacker {
            damage: 2,
            effects: vec![EffectInstance::new(MobEffect::Slowness, 200, 0)],
        }),
        tier_two(273, "Ice Magician II")
            .with_attack(AttackBehavior::Damage { amount: 4 })
            .with_touch(TouchBehavior::TemporaryCage {
                block_id: 79,
                block_data: 0,
                revert_secs: 5,
            })
            .with_cooldown_secs(25),
        // Riot Drinker: tier II trades the blade for a dry blast.
        tier_one(274, "Riot Drinker I").with_attack(AttackBehavior::Damage { amount: 2 }),
        tier_two(275, "Riot Drinker II")
            .with_touch(TouchBehavior::Explode {
                radius: 4.0,
                fire: false,
            })
            .with_cooldown_secs(30),
    ]
}
