//! Scripted end-to-end encounters against the real engine.
//!
//! Every test forces roll outcomes through `ScriptedRolls`, so the exact
//! damage arithmetic is asserted round by round.

use fellwood_core::combat::{begin_round, resolve_round, take_action, Action, ActionError};
use fellwood_core::items::find_item;
use fellwood_core::testing::{duel, ScriptedActions, ScriptedRolls};
use fellwood_core::{
    run_encounter, EncounterOutcome, EnemyKind, Mercy, RaceKind, RoundOutcome, WeaponKind,
};

#[test]
fn item_buff_lives_and_dies_inside_one_encounter() {
    let (mut fighter, mut enemy) = duel(RaceKind::Human, WeaponKind::Sword, EnemyKind::Boar);
    fighter.inventory.add(find_item("Big Attack Potion").unwrap());
    let mut roll = ScriptedRolls::misses();

    // Round 1: plain attack. floor(26 / 1.1) = 23; counter floor(25 / 1.5) = 16.
    let res = resolve_round(&mut fighter, &mut enemy, &Action::Attack, &mut roll).unwrap();
    assert_eq!(res.outcome, RoundOutcome::Continue);
    assert_eq!((enemy.hp, fighter.race.hp), (77, 184));

    // Round 2: drink the attack potion. Damage 11 -> 21 for three rounds.
    let action = Action::UseItem("Big Attack Potion".into());
    resolve_round(&mut fighter, &mut enemy, &action, &mut roll).unwrap();
    assert_eq!(fighter.race.damage, 21);
    assert_eq!(fighter.race.hp, 168);

    // Rounds 3 and 4: buffed attacks, floor(36 / 1.1) = 32 each.
    resolve_round(&mut fighter, &mut enemy, &Action::Attack, &mut roll).unwrap();
    assert_eq!(enemy.hp, 45);
    resolve_round(&mut fighter, &mut enemy, &Action::Attack, &mut roll).unwrap();
    assert_eq!((enemy.hp, fighter.race.hp), (13, 136));

    // Round 5: the buff expires before the action, and the unbuffed
    // attack (23) still finishes the boar. No counter-attack follows.
    let res = resolve_round(&mut fighter, &mut enemy, &Action::Attack, &mut roll).unwrap();
    assert_eq!(res.outcome, RoundOutcome::Won);
    assert_eq!(fighter.race.damage, fighter.race.max_damage);
    assert_eq!(enemy.hp, 0);
    assert_eq!(fighter.race.hp, 136);
}

#[test]
fn ability_cooldown_gates_reuse_across_rounds() {
    let (mut fighter, mut enemy) = duel(RaceKind::Human, WeaponKind::Bow, EnemyKind::Boar);
    let mut roll = ScriptedRolls::misses();

    // Round 1: Burning Arrow. floor(25 / 1.1) = 22, DoT 5 for 3 rounds,
    // cooldown restarts at 4.
    let res = resolve_round(&mut fighter, &mut enemy, &Action::UseAbility, &mut roll).unwrap();
    assert_eq!(res.outcome, RoundOutcome::Continue);
    assert_eq!(enemy.hp, 78);
    assert_eq!(fighter.weapon.ability.current_cooldown, 4);
    assert_eq!(fighter.race.hp, 184);

    // Round 2: still cooling down; the rejection mutates nothing and the
    // round continues with a different action.
    let start = begin_round(&mut fighter, &mut enemy, &mut roll);
    assert_eq!(start.outcome, None);
    assert_eq!(enemy.hp, 73); // one DoT tick
    let err = take_action(&mut fighter, &mut enemy, &Action::UseAbility, &mut roll).unwrap_err();
    assert_eq!(
        err,
        ActionError::AbilityOnCooldown {
            name: "Burning Arrow".into(),
            remaining: 3
        }
    );
    assert_eq!(enemy.hp, 73);
    take_action(&mut fighter, &mut enemy, &Action::Defend, &mut roll).unwrap();

    // Rounds 3-4: defend while the cooldown and the DoT run out.
    for expected_hp in [68, 63] {
        begin_round(&mut fighter, &mut enemy, &mut roll);
        assert_eq!(enemy.hp, expected_hp);
        take_action(&mut fighter, &mut enemy, &Action::Defend, &mut roll).unwrap();
    }

    // Round 5: exactly `cooldown` rounds elapsed; the ability fires again
    // and overwrites the (spent) DoT payload.
    begin_round(&mut fighter, &mut enemy, &mut roll);
    assert!(fighter.weapon.ability.is_ready());
    let res = take_action(&mut fighter, &mut enemy, &Action::UseAbility, &mut roll).unwrap();
    assert_eq!(res.outcome, RoundOutcome::Continue);
    assert_eq!(enemy.hp, 41);
    assert_eq!((enemy.dot, enemy.dot_rounds), (5, 3));
    assert_eq!(fighter.weapon.ability.current_cooldown, 4);
}

#[test]
fn mercy_decisions_accumulate_violence() {
    let (mut fighter, _) = duel(RaceKind::Ork, WeaponKind::Axe, EnemyKind::Boar);

    for (kind, mercy) in [
        (EnemyKind::Boar, Mercy::Kill),
        (EnemyKind::Bear, Mercy::Spare),
        (EnemyKind::Zombie, Mercy::Kill),
    ] {
        let mut enemy = fellwood_core::Enemy::new(kind);
        enemy.hp = 1;
        let mut roll = ScriptedRolls::misses();
        let mut actions = ScriptedActions::repeat_attack();
        let outcome = run_encounter(&mut fighter, &mut enemy, &mut roll, &mut actions);
        assert_eq!(outcome, EncounterOutcome::Won);
        fighter.record_mercy(mercy);
    }

    assert_eq!(fighter.violence, 2);
}

#[test]
fn near_death_fighter_still_wins_on_the_killing_blow() {
    let (mut fighter, mut enemy) = duel(RaceKind::Goblin, WeaponKind::Slingshot, EnemyKind::Boar);
    fighter.race.hp = 1;
    enemy.hp = 5;
    let mut roll = ScriptedRolls::misses();
    let mut actions = ScriptedActions::repeat_attack();

    let outcome = run_encounter(&mut fighter, &mut enemy, &mut roll, &mut actions);

    assert_eq!(outcome, EncounterOutcome::Won);
    assert_eq!(fighter.race.hp, 1);
}

#[test]
fn session_persistence_carries_enemy_damage_reduction_forward() {
    // Enemies live for the whole session; a weakened enemy stays weakened
    // if fought again.
    let (mut fighter, mut enemy) = duel(RaceKind::Ork, WeaponKind::Axe, EnemyKind::Bear);
    let mut roll = ScriptedRolls::misses();

    resolve_round(&mut fighter, &mut enemy, &Action::UseAbility, &mut roll).unwrap();
    assert_eq!(enemy.damage, 22 - 5);

    // A later defended round against the same enemy uses the reduced
    // damage: floor(17 / 3.6) = 4.
    let hp_before = fighter.race.hp;
    resolve_round(&mut fighter, &mut enemy, &Action::Defend, &mut roll).unwrap();
    assert_eq!(hp_before - fighter.race.hp, (17.0_f64 / 3.6).floor() as i32);
}
