//! Weapon abilities: burst damage plus optional damage-over-time,
//! permanent enemy damage reduction, or stun.
//!
//! Each weapon grants exactly one ability, created at weapon construction.
//! Cooldown state lives on the ability and persists for the whole session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A weapon's special ability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub description: String,
    pub damage: i32,
    /// Rounds between uses.
    pub cooldown: i32,
    /// Rounds left before the ability is ready again. Decremented once per
    /// round with no floor; readiness is checked against zero instead.
    pub current_cooldown: i32,
    /// Damage-over-time payload applied to the enemy on use.
    pub dot: i32,
    pub dot_rounds: i32,
    /// Permanent reduction of the enemy's damage, applied on every use.
    pub damage_reduction: i32,
    /// Stun payload; a positive value negates the enemy's counter-attack
    /// for the round the ability lands.
    pub stun: i32,
}

impl Ability {
    fn new(name: &str, description: &str, damage: i32, cooldown: i32) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            damage,
            cooldown,
            current_cooldown: 0,
            dot: 0,
            dot_rounds: 0,
            damage_reduction: 0,
            stun: 0,
        }
    }

    fn with_dot(mut self, dot: i32, rounds: i32) -> Self {
        self.dot = dot;
        self.dot_rounds = rounds;
        self
    }

    fn with_damage_reduction(mut self, amount: i32) -> Self {
        self.damage_reduction = amount;
        self
    }

    fn with_stun(mut self, rounds: i32) -> Self {
        self.stun = rounds;
        self
    }

    /// The Sword ability.
    pub fn triple_cut() -> Self {
        Ability::new(
            "Triple Cut",
            "Cut Your opponent in three places. Make them bleed.",
            33,
            3,
        )
        .with_dot(3, 6)
        .with_damage_reduction(3)
    }

    /// The Bow ability.
    pub fn burning_arrow() -> Self {
        Ability::new(
            "Burning Arrow",
            "Set fire to your arrow, and set Your enemy ablaze!",
            25,
            4,
        )
        .with_dot(5, 3)
    }

    /// The Axe ability.
    pub fn axerang() -> Self {
        Ability::new(
            "Axerang",
            "Throw Your axe into the enemy like a boomerang and break their bones!",
            35,
            5,
        )
        .with_damage_reduction(5)
        .with_stun(1)
    }

    /// The Slingshot ability. One shot per session for all practical purposes.
    pub fn meat_shot() -> Self {
        Ability::new(
            "Meat Shot",
            "Shoot some meat at the enemy, let the dogs take care of them!",
            45,
            999,
        )
    }

    pub fn is_ready(&self) -> bool {
        self.current_cooldown <= 0
    }

    /// Rounds the player still has to wait, floored at zero for display.
    pub fn remaining_cooldown(&self) -> i32 {
        self.current_cooldown.max(0)
    }

    /// Start-of-round decrement. No floor; [`Ability::is_ready`] and
    /// [`Ability::remaining_cooldown`] clamp at read time.
    pub fn tick_cooldown(&mut self) {
        self.current_cooldown -= 1;
    }

    /// Restart the cooldown after a use.
    pub fn trigger_cooldown(&mut self) {
        self.current_cooldown = self.cooldown;
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name = {}", self.name)?;
        writeln!(f, "Damage = {}", self.damage)?;
        writeln!(f, "Cooldown = {}", self.cooldown)?;
        writeln!(
            f,
            "Damage Over Time = {}, for {} rounds",
            self.dot, self.dot_rounds
        )?;
        writeln!(f, "Damage reduction = {}", self.damage_reduction)?;
        writeln!(f, "Stun = {}", self.stun)?;
        write!(f, "Description = {}", self.description)
    }
}
