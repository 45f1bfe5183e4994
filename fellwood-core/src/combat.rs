//! The per-round combat resolution state machine.
//!
//! One round runs in a fixed order: cooldown and buff counters tick,
//! damage-over-time lands, an expired buff restores its stat, the enemy
//! may make an idle noise, the player's action resolves, and finally the
//! enemy counter-attacks unless it just died or was stunned.
//!
//! The engine takes already-validated [`Action`] values and never reads
//! input or prints. Rejections ([`ActionError`]) leave all state untouched
//! so the caller can prompt for a different action without re-running the
//! start-of-round bookkeeping; that split is [`begin_round`] /
//! [`take_action`], with [`resolve_round`] composing both.

use crate::enemies::Enemy;
use crate::fighter::{BuffKind, Fighter};
use crate::inventory::InventoryError;
use crate::items::Item;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Source of uniform rolls for the engine.
///
/// Combat code never touches an RNG directly; production wires in
/// [`thread_roll`], tests script exact outcomes (see [`crate::testing`]).
pub trait Roll {
    /// Uniform roll over `[0, 100)`. A chance of `c` percent "hits" when
    /// the roll is below `c`.
    fn percent(&mut self) -> u32;

    /// Uniform index below `n`.
    fn pick(&mut self, n: usize) -> usize;
}

/// [`Roll`] backed by any [`rand::Rng`].
#[derive(Debug)]
pub struct RngRoll<R: Rng>(pub R);

impl<R: Rng> Roll for RngRoll<R> {
    fn percent(&mut self) -> u32 {
        self.0.gen_range(0..100)
    }

    fn pick(&mut self, n: usize) -> usize {
        self.0.gen_range(0..n)
    }
}

/// The thread-local RNG as a [`Roll`].
pub fn thread_roll() -> RngRoll<rand::rngs::ThreadRng> {
    RngRoll(rand::thread_rng())
}

/// A player action for one combat round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Attack,
    Defend,
    UseAbility,
    /// Consume the named backpack item.
    UseItem(String),
}

/// State of the fight after a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Both sides still standing.
    Continue,
    Won,
    Lost,
    /// The enemy was stunned and skipped its counter-attack this round.
    Stunned,
}

/// A rejected action. Nothing was mutated; the caller re-prompts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("the {name} ability is on cooldown for {remaining} more rounds")]
    AbilityOnCooldown { name: String, remaining: i32 },
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

/// Everything that happened during (part of) a round, in order, for the
/// caller to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CombatEvent {
    EnemyNoise(String),
    DotTick { damage: i32, enemy_hp: i32 },
    BuffExpired(BuffKind),
    Defended,
    EnemyDodged,
    FighterCritical,
    FighterHit { damage: i32, enemy_hp: i32 },
    AbilityUsed { name: String },
    AbilityHit { damage: i32, enemy_hp: i32 },
    EnemyWeakened { reduction: i32, enemy_damage: i32 },
    EnemyStunned,
    ItemUsed { item: Item },
    EnemyCritical,
    EnemyHit { damage: i32, fighter_hp: i32 },
}

/// Result of the start-of-round bookkeeping.
#[derive(Debug)]
pub struct RoundStart {
    /// `Some(RoundOutcome::Won)` when the damage-over-time tick finished
    /// the enemy; the rest of the round is skipped.
    pub outcome: Option<RoundOutcome>,
    pub events: Vec<CombatEvent>,
}

/// A fully resolved player action plus its counter-attack.
#[derive(Debug)]
pub struct RoundResolution {
    pub outcome: RoundOutcome,
    pub events: Vec<CombatEvent>,
}

/// Run the start-of-round bookkeeping, in this order: cooldown and buff
/// counters tick down, active damage-over-time lands (ending the fight
/// immediately if it kills), a buff that just ran out restores its stat,
/// and the enemy makes an idle noise half the time.
pub fn begin_round(fighter: &mut Fighter, enemy: &mut Enemy, roll: &mut dyn Roll) -> RoundStart {
    let mut events = Vec::new();

    fighter.weapon.ability.tick_cooldown();
    fighter.tick_buff();

    if enemy.dot_rounds > 0 {
        enemy.hp = (enemy.hp - enemy.dot).max(0);
        enemy.dot_rounds -= 1;
        events.push(CombatEvent::DotTick {
            damage: enemy.dot,
            enemy_hp: enemy.hp,
        });
        if enemy.is_dead() {
            return RoundStart {
                outcome: Some(RoundOutcome::Won),
                events,
            };
        }
    }

    if let Some(kind) = fighter.expire_buff_if_due() {
        events.push(CombatEvent::BuffExpired(kind));
    }

    if roll.percent() < 50 {
        let noise = enemy.noises()[roll.pick(enemy.noises().len())].clone();
        events.push(CombatEvent::EnemyNoise(noise));
    }

    RoundStart {
        outcome: None,
        events,
    }
}

/// Resolve the player's action for this round, including the enemy
/// counter-attack where one is due.
///
/// An ability on cooldown or an item not in the backpack is rejected
/// before any state changes.
pub fn take_action(
    fighter: &mut Fighter,
    enemy: &mut Enemy,
    action: &Action,
    roll: &mut dyn Roll,
) -> Result<RoundResolution, ActionError> {
    match action {
        Action::UseAbility if !fighter.weapon.ability.is_ready() => {
            return Err(ActionError::AbilityOnCooldown {
                name: fighter.weapon.ability.name.clone(),
                remaining: fighter.weapon.ability.remaining_cooldown(),
            });
        }
        Action::UseItem(name) if fighter.inventory.get(name).is_none() => {
            return Err(InventoryError::NoSuchItem(name.clone()).into());
        }
        _ => {}
    }

    let mut events = Vec::new();
    let outcome = match action {
        Action::Attack => attack(fighter, enemy, roll, &mut events),
        Action::Defend => {
            events.push(CombatEvent::Defended);
            // Double for the counter-attack only, then halve back: the
            // exact inverse, so defence never drifts across rounds.
            fighter.race.defence *= 2.0;
            let outcome = counter_attack(fighter, enemy, roll, &mut events);
            fighter.race.defence *= 0.5;
            outcome
        }
        Action::UseAbility => use_ability(fighter, enemy, roll, &mut events),
        Action::UseItem(name) => {
            let item = fighter.use_item(name)?;
            events.push(CombatEvent::ItemUsed { item });
            counter_attack(fighter, enemy, roll, &mut events)
        }
    };
    Ok(RoundResolution { outcome, events })
}

/// Resolve one complete round with an already-validated action.
///
/// Prefer [`begin_round`] + [`take_action`] when the action may be
/// rejected and re-chosen interactively; this composition runs the
/// bookkeeping before the action is validated.
pub fn resolve_round(
    fighter: &mut Fighter,
    enemy: &mut Enemy,
    action: &Action,
    roll: &mut dyn Roll,
) -> Result<RoundResolution, ActionError> {
    let start = begin_round(fighter, enemy, roll);
    let mut events = start.events;
    if let Some(outcome) = start.outcome {
        return Ok(RoundResolution { outcome, events });
    }
    let mut resolution = take_action(fighter, enemy, action, roll)?;
    events.append(&mut resolution.events);
    Ok(RoundResolution {
        outcome: resolution.outcome,
        events,
    })
}

fn attack(
    fighter: &mut Fighter,
    enemy: &mut Enemy,
    roll: &mut dyn Roll,
    events: &mut Vec<CombatEvent>,
) -> RoundOutcome {
    if roll.percent() < enemy.dodge {
        events.push(CombatEvent::EnemyDodged);
        return counter_attack(fighter, enemy, roll, events);
    }

    let mut raw = fighter.attack_damage();
    if roll.percent() < fighter.weapon.critical {
        raw *= 2;
        events.push(CombatEvent::FighterCritical);
    }

    let damage = enemy.take_damage(raw as f64);
    events.push(CombatEvent::FighterHit {
        damage,
        enemy_hp: enemy.hp,
    });
    if enemy.is_dead() {
        return RoundOutcome::Won;
    }
    counter_attack(fighter, enemy, roll, events)
}

fn use_ability(
    fighter: &mut Fighter,
    enemy: &mut Enemy,
    roll: &mut dyn Roll,
    events: &mut Vec<CombatEvent>,
) -> RoundOutcome {
    let ability = &mut fighter.weapon.ability;
    events.push(CombatEvent::AbilityUsed {
        name: ability.name.clone(),
    });

    // Ability damage ignores dodge and never crits.
    let damage = enemy.take_damage(ability.damage as f64);
    // The payload overwrites whatever was on the enemy, it does not stack.
    enemy.dot = ability.dot;
    enemy.dot_rounds = ability.dot_rounds;
    enemy.stun = ability.stun;
    ability.trigger_cooldown();

    events.push(CombatEvent::AbilityHit {
        damage,
        enemy_hp: enemy.hp,
    });
    if enemy.is_dead() {
        return RoundOutcome::Won;
    }

    if ability.damage_reduction > 0 {
        enemy.damage -= ability.damage_reduction;
        events.push(CombatEvent::EnemyWeakened {
            reduction: ability.damage_reduction,
            enemy_damage: enemy.damage,
        });
    }

    if enemy.stun > 0 {
        events.push(CombatEvent::EnemyStunned);
        return RoundOutcome::Stunned;
    }
    counter_attack(fighter, enemy, roll, events)
}

fn counter_attack(
    fighter: &mut Fighter,
    enemy: &mut Enemy,
    roll: &mut dyn Roll,
    events: &mut Vec<CombatEvent>,
) -> RoundOutcome {
    let mut raw = enemy.damage as f64;
    if roll.percent() < enemy.critical {
        raw *= 1.5;
        events.push(CombatEvent::EnemyCritical);
    }

    let damage = fighter.take_damage(raw);
    events.push(CombatEvent::EnemyHit {
        damage,
        fighter_hp: fighter.race.hp,
    });
    if fighter.is_dead() {
        RoundOutcome::Lost
    } else {
        RoundOutcome::Continue
    }
}
