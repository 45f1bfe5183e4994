//! Enemy stat blocks.
//!
//! Enemies are constructed once per session and mutated in place: hp loss,
//! damage-over-time, stun, and permanent damage reduction all stick to the
//! same value for as long as the session lives.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four scripted enemies, in encounter order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Boar,
    Bear,
    Zombie,
    Werewolf,
}

impl EnemyKind {
    pub fn name(&self) -> &'static str {
        match self {
            EnemyKind::Boar => "Boar",
            EnemyKind::Bear => "Bear",
            EnemyKind::Zombie => "Zombie",
            EnemyKind::Werewolf => "Werewolf",
        }
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A live enemy.
///
/// `dot`, `dot_rounds` and `stun` are runtime fields overwritten wholesale
/// by ability use; `damage` may be permanently lowered the same way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub hp: i32,
    pub damage: i32,
    /// Mitigation divisor: effective incoming damage is `raw / defence`,
    /// floored.
    pub defence: f64,
    /// Critical-hit chance in percent.
    pub critical: u32,
    /// Dodge chance in percent.
    pub dodge: u32,
    pub dot: i32,
    pub dot_rounds: i32,
    pub stun: i32,
    noises: Vec<String>,
    dying_voices: Vec<String>,
}

impl Enemy {
    pub fn new(kind: EnemyKind) -> Self {
        let (hp, damage, defence, critical, dodge) = match kind {
            EnemyKind::Boar => (100, 25, 1.1, 20, 15),
            EnemyKind::Bear => (150, 22, 1.2, 25, 5),
            EnemyKind::Zombie => (110, 18, 1.1, 25, 20),
            EnemyKind::Werewolf => (110, 18, 1.1, 25, 20),
        };
        let noises: &[&str] = match kind {
            EnemyKind::Boar => &["*growls at you*", "*loud squealing*", "*grunts*"],
            EnemyKind::Bear => &["*huffs at you*", "*loud growl*", "*roars*"],
            EnemyKind::Zombie => &["*screams*", "*loudly hisses*", "*growls silently*"],
            EnemyKind::Werewolf => &["*howls*", "*screams loudly*", "*growls painfully*"],
        };
        let dying_voices: &[&str] = match kind {
            EnemyKind::Zombie => &[
                "'I-I--'",
                "'I-I-Onl-y-'",
                "'W-W-Wan-ted-'",
                "'T-T-To-'",
                "'P-P-Pro-te-c--'",
            ],
            EnemyKind::Werewolf => &[
                "'PLEASE.'",
                "'DON'T DO THIS.'",
                "'I AM.'",
                "'HIS ONLY.'",
                "'HOPE.'",
            ],
            _ => &[],
        };
        Self {
            kind,
            hp,
            damage,
            defence,
            critical,
            dodge,
            dot: 0,
            dot_rounds: 0,
            stun: 0,
            noises: noises.iter().map(|s| s.to_string()).collect(),
            dying_voices: dying_voices.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Idle flavor lines.
    pub fn noises(&self) -> &[String] {
        &self.noises
    }

    /// Voice lines for the forced-finish sequence. Empty for enemies that
    /// never get one.
    pub fn dying_voices(&self) -> &[String] {
        &self.dying_voices
    }

    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }

    /// Apply mitigated damage and return how much actually landed.
    /// Hp is clamped at zero.
    pub fn take_damage(&mut self, raw: f64) -> i32 {
        let effective = (raw / self.defence).floor() as i32;
        self.hp = (self.hp - effective).max(0);
        effective
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_table() {
        let boar = Enemy::new(EnemyKind::Boar);
        assert_eq!((boar.hp, boar.damage), (100, 25));
        assert_eq!(boar.defence, 1.1);
        assert_eq!((boar.critical, boar.dodge), (20, 15));

        let bear = Enemy::new(EnemyKind::Bear);
        assert_eq!((bear.hp, bear.dodge), (150, 5));
    }

    #[test]
    fn test_dying_voices() {
        assert!(Enemy::new(EnemyKind::Boar).dying_voices().is_empty());
        assert!(Enemy::new(EnemyKind::Bear).dying_voices().is_empty());
        assert_eq!(Enemy::new(EnemyKind::Zombie).dying_voices().len(), 5);
        assert_eq!(Enemy::new(EnemyKind::Werewolf).dying_voices().len(), 5);
    }

    #[test]
    fn test_take_damage_floors_and_clamps() {
        let mut boar = Enemy::new(EnemyKind::Boar);
        // floor(26 / 1.1) = 23
        assert_eq!(boar.take_damage(26.0), 23);
        assert_eq!(boar.hp, 77);

        boar.hp = 10;
        assert_eq!(boar.take_damage(2200.0), 2000);
        assert_eq!(boar.hp, 0);
        assert!(boar.is_dead());
    }
}
