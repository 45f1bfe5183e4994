//! The potion database.
//!
//! Items are immutable templates looked up by name; the backpack holds
//! clones of them. Health potions apply instantly; attack and defence
//! potions start a timed buff on the drinker.

use serde::{Deserialize, Serialize};

/// What consuming an item does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemEffect {
    /// Instant healing. Not a buff; there is no cap at `max_hp`.
    Heal { amount: i32 },
    /// Adds to current damage for a number of rounds.
    AttackBuff { amount: i32, rounds: i32 },
    /// Adds to current defence for a number of rounds.
    DefenceBuff { amount: f64, rounds: i32 },
}

/// A consumable item template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub effect: ItemEffect,
}

impl Item {
    fn new(name: &str, description: &str, effect: ItemEffect) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            effect,
        }
    }
}

lazy_static::lazy_static! {
    /// Every potion in the game.
    pub static ref ITEMS: Vec<Item> = vec![
        Item::new(
            "Small Health Potion",
            "Heals you for 30 HP, drink it while you can!",
            ItemEffect::Heal { amount: 30 },
        ),
        Item::new(
            "Big Health Potion",
            "Heals you for 50 HP, that's a lot!",
            ItemEffect::Heal { amount: 50 },
        ),
        Item::new(
            "Small Defence Potion",
            "Grants you a small amount of additional defence for 3 rounds, enjoy it!",
            ItemEffect::DefenceBuff { amount: 0.3, rounds: 3 },
        ),
        Item::new(
            "Big Defence Potion",
            "Grants you a big amount of defence for 3 rounds, this will feel good!",
            ItemEffect::DefenceBuff { amount: 0.5, rounds: 3 },
        ),
        Item::new(
            "Small Attack Potion",
            "Gives you a little more attack, You need this!",
            ItemEffect::AttackBuff { amount: 5, rounds: 3 },
        ),
        Item::new(
            "Big Attack Potion",
            "Grants you a huge attack boost, You will feel stronger!",
            ItemEffect::AttackBuff { amount: 10, rounds: 3 },
        ),
    ];
}

/// Find an item template by name, case-insensitively.
pub fn find_item(name: &str) -> Option<Item> {
    let name_lower = name.trim().to_lowercase();
    ITEMS
        .iter()
        .find(|item| item.name.to_lowercase() == name_lower)
        .cloned()
}
