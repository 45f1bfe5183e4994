//! Weapons and the ability each one grants.

use crate::abilities::Ability;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The choosable weapons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    Sword,
    Bow,
    Axe,
    Slingshot,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 4] = [
        WeaponKind::Sword,
        WeaponKind::Bow,
        WeaponKind::Axe,
        WeaponKind::Slingshot,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WeaponKind::Sword => "Sword",
            WeaponKind::Bow => "Bow",
            WeaponKind::Axe => "Axe",
            WeaponKind::Slingshot => "Slingshot",
        }
    }

    /// Look up a weapon from a user-entered token, case-insensitively.
    pub fn from_token(token: &str) -> Option<WeaponKind> {
        let token = token.trim().to_lowercase();
        WeaponKind::ALL
            .into_iter()
            .find(|kind| kind.name().to_lowercase() == token)
    }
}

impl fmt::Display for WeaponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A fighter's weapon: a flat attack bonus, a critical-hit chance, and
/// the one ability it grants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub kind: WeaponKind,
    pub attack: i32,
    /// Critical-hit chance in percent.
    pub critical: u32,
    pub ability: Ability,
}

impl Weapon {
    pub fn new(kind: WeaponKind) -> Self {
        let (attack, critical, ability) = match kind {
            WeaponKind::Sword => (15, 30, Ability::triple_cut()),
            WeaponKind::Bow => (13, 40, Ability::burning_arrow()),
            WeaponKind::Axe => (20, 15, Ability::axerang()),
            WeaponKind::Slingshot => (11, 50, Ability::meat_shot()),
        };
        Self {
            kind,
            attack,
            critical,
            ability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weapon_table() {
        let sword = Weapon::new(WeaponKind::Sword);
        assert_eq!((sword.attack, sword.critical), (15, 30));
        assert_eq!(sword.ability.name, "Triple Cut");

        let slingshot = Weapon::new(WeaponKind::Slingshot);
        assert_eq!((slingshot.attack, slingshot.critical), (11, 50));
        assert_eq!(slingshot.ability.name, "Meat Shot");
    }

    #[test]
    fn test_from_token() {
        assert_eq!(WeaponKind::from_token("bow"), Some(WeaponKind::Bow));
        assert_eq!(WeaponKind::from_token("AXE"), Some(WeaponKind::Axe));
        assert_eq!(WeaponKind::from_token("spear"), None);
    }
}
