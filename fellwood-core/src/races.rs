//! Playable races and their combat statistics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The playable races.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaceKind {
    Ork,
    Goblin,
    Elf,
    Human,
}

impl RaceKind {
    pub const ALL: [RaceKind; 4] = [
        RaceKind::Ork,
        RaceKind::Goblin,
        RaceKind::Elf,
        RaceKind::Human,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RaceKind::Ork => "Ork",
            RaceKind::Goblin => "Goblin",
            RaceKind::Elf => "Elf",
            RaceKind::Human => "Human",
        }
    }

    /// Look up a race from a user-entered token, case-insensitively.
    pub fn from_token(token: &str) -> Option<RaceKind> {
        let token = token.trim().to_lowercase();
        RaceKind::ALL
            .into_iter()
            .find(|kind| kind.name().to_lowercase() == token)
    }
}

impl fmt::Display for RaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Mutable combat statistics for a fighter's race.
///
/// `hp`, `damage` and `defence` move during combat; the `max_*` fields are
/// the baselines temporary buffs restore to at expiry. Permanent effects
/// (none exist for the player today) would adjust the `max_*` fields too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Race {
    pub kind: RaceKind,
    pub max_hp: i32,
    pub hp: i32,
    pub max_damage: i32,
    pub damage: i32,
    pub max_defence: f64,
    pub defence: f64,
}

impl Race {
    pub fn new(kind: RaceKind) -> Self {
        let (hp, damage, defence) = match kind {
            RaceKind::Ork => (2200, 10, 1.8),
            RaceKind::Goblin => (170, 15, 1.3),
            RaceKind::Elf => (190, 13, 1.4),
            RaceKind::Human => (200, 11, 1.5),
        };
        Self {
            kind,
            max_hp: hp,
            hp,
            max_damage: damage,
            damage,
            max_defence: defence,
            defence,
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Your {} attributes: HP = {}, Damage = {}, Defence = {}",
            self.kind, self.hp, self.damage, self.defence
        )
    }
}
