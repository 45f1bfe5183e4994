//! The player-controlled fighter: race, weapon, backpack, buff state and
//! the session-wide violence score.

use crate::inventory::{Inventory, InventoryError};
use crate::items::{Item, ItemEffect};
use crate::races::{Race, RaceKind};
use crate::weapons::{Weapon, WeaponKind};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn from_token(token: &str) -> Option<Gender> {
        match token.trim().to_lowercase().as_str() {
            "m" => Some(Gender::Male),
            "f" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "M"),
            Gender::Female => write!(f, "F"),
        }
    }
}

/// Which stat a timed buff raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuffKind {
    Attack,
    Defence,
}

impl fmt::Display for BuffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuffKind::Attack => write!(f, "Attack"),
            BuffKind::Defence => write!(f, "Defence"),
        }
    }
}

/// Timed stat modification from an attack or defence potion.
///
/// `rounds_left` is decremented every round whether or not a buff is
/// active, so it runs negative between buffs; expiry fires only on the
/// round it is exactly zero while a kind is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Buff {
    pub rounds_left: i32,
    pub kind: Option<BuffKind>,
}

/// Post-victory decision over a beaten enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mercy {
    Spare,
    Kill,
}

impl Mercy {
    pub fn from_token(token: &str) -> Option<Mercy> {
        match token.trim().to_lowercase().as_str() {
            "spare" => Some(Mercy::Spare),
            "kill" => Some(Mercy::Kill),
            _ => None,
        }
    }
}

/// The player's character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fighter {
    pub name: String,
    pub gender: Gender,
    pub race: Race,
    pub weapon: Weapon,
    pub inventory: Inventory,
    pub buff: Buff,
    /// Monotonic kill counter; gates the narrative ending.
    pub violence: u32,
}

impl Fighter {
    pub fn new(name: impl Into<String>, gender: Gender, race: RaceKind, weapon: WeaponKind) -> Self {
        Self {
            name: name.into(),
            gender,
            race: Race::new(race),
            weapon: Weapon::new(weapon),
            inventory: Inventory::new(),
            buff: Buff::default(),
            violence: 0,
        }
    }

    /// Raw damage of a basic attack: race damage plus weapon bonus.
    pub fn attack_damage(&self) -> i32 {
        self.race.damage + self.weapon.attack
    }

    /// Apply mitigated damage and return how much actually landed.
    /// Hp is clamped at zero.
    pub fn take_damage(&mut self, raw: f64) -> i32 {
        let effective = (raw / self.race.defence).floor() as i32;
        self.race.hp = (self.race.hp - effective).max(0);
        effective
    }

    pub fn is_dead(&self) -> bool {
        self.race.hp == 0
    }

    /// Instant healing. Not capped at `max_hp`.
    pub fn heal(&mut self, amount: i32) {
        self.race.hp += amount;
    }

    /// Start-of-round buff counter decrement. No floor; see [`Buff`].
    pub fn tick_buff(&mut self) {
        self.buff.rounds_left -= 1;
    }

    /// Restore the buffed stat to its baseline if the buff ran out this
    /// round, returning which stat was restored.
    pub fn expire_buff_if_due(&mut self) -> Option<BuffKind> {
        if self.buff.rounds_left != 0 {
            return None;
        }
        let kind = self.buff.kind.take()?;
        match kind {
            BuffKind::Attack => self.race.damage = self.race.max_damage,
            BuffKind::Defence => self.race.defence = self.race.max_defence,
        }
        Some(kind)
    }

    /// Consume an item from the backpack: apply its effect and discard it
    /// as one transaction. Rejects without mutation when the item is not
    /// in the backpack.
    pub fn use_item(&mut self, name: &str) -> Result<Item, InventoryError> {
        let item = self
            .inventory
            .remove(name)
            .ok_or_else(|| InventoryError::NoSuchItem(name.to_string()))?;
        match item.effect {
            ItemEffect::Heal { amount } => self.heal(amount),
            ItemEffect::AttackBuff { amount, rounds } => {
                self.buff.rounds_left = rounds;
                self.buff.kind = Some(BuffKind::Attack);
                self.race.damage += amount;
            }
            ItemEffect::DefenceBuff { amount, rounds } => {
                self.buff.rounds_left = rounds;
                self.buff.kind = Some(BuffKind::Defence);
                self.race.defence += amount;
            }
        }
        Ok(item)
    }

    /// Record the post-encounter decision. Killing raises the violence
    /// score; sparing changes nothing.
    pub fn record_mercy(&mut self, mercy: Mercy) {
        if mercy == Mercy::Kill {
            self.violence += 1;
        }
    }
}

impl fmt::Display for Fighter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Your name =  {}, gender = {}, race = {}, weapon = {}",
            self.name, self.gender, self.race.kind, self.weapon.kind
        )
    }
}
