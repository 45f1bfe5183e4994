//! Drives the combat engine round-by-round until a terminal outcome.

use crate::combat::{
    begin_round, take_action, Action, ActionError, CombatEvent, Roll, RoundOutcome,
};
use crate::enemies::Enemy;
use crate::fighter::Fighter;
use serde::{Deserialize, Serialize};

/// How an encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterOutcome {
    Won,
    Lost,
}

/// Supplies validated decisions to the encounter driver.
///
/// The engine never reads input: interactive front-ends prompt here,
/// tests script it (see [`crate::testing::ScriptedActions`]).
pub trait ActionSource {
    /// Choose the action for the current round. Called again with the
    /// rejection when the previous choice was refused (ability on
    /// cooldown, item not held); the start-of-round bookkeeping is not
    /// re-run in that case.
    fn choose_action(
        &mut self,
        fighter: &Fighter,
        enemy: &Enemy,
        rejected: Option<&ActionError>,
    ) -> Action;

    /// Render a slice of round events. Defaults to ignoring them.
    fn on_events(&mut self, _events: &[CombatEvent]) {}
}

/// Fight to the end: repeat rounds until the enemy or the fighter falls.
///
/// A `Stunned` round skips straight to the next round without asking the
/// source for anything. Post-victory mercy is the caller's business.
pub fn run_encounter(
    fighter: &mut Fighter,
    enemy: &mut Enemy,
    roll: &mut dyn Roll,
    source: &mut dyn ActionSource,
) -> EncounterOutcome {
    loop {
        let start = begin_round(fighter, enemy, roll);
        source.on_events(&start.events);
        if start.outcome == Some(RoundOutcome::Won) {
            return EncounterOutcome::Won;
        }

        let mut rejected: Option<ActionError> = None;
        let outcome = loop {
            let action = source.choose_action(fighter, enemy, rejected.as_ref());
            match take_action(fighter, enemy, &action, roll) {
                Ok(resolution) => {
                    source.on_events(&resolution.events);
                    break resolution.outcome;
                }
                Err(err) => rejected = Some(err),
            }
        };

        match outcome {
            RoundOutcome::Won => return EncounterOutcome::Won,
            RoundOutcome::Lost => return EncounterOutcome::Lost,
            RoundOutcome::Continue | RoundOutcome::Stunned => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{duel, ScriptedActions, ScriptedRolls};
    use crate::{EnemyKind, RaceKind, WeaponKind};

    #[test]
    fn test_attrition_win() {
        let (mut fighter, mut enemy) = duel(RaceKind::Ork, WeaponKind::Axe, EnemyKind::Boar);
        let mut roll = ScriptedRolls::misses();
        let mut actions = ScriptedActions::repeat_attack();

        // Ork + Axe: floor(30 / 1.1) = 27 per round; boar falls on round 4.
        let outcome = run_encounter(&mut fighter, &mut enemy, &mut roll, &mut actions);

        assert_eq!(outcome, EncounterOutcome::Won);
        assert_eq!(enemy.hp, 0);
        // Three counter-attacks of floor(25 / 1.8) = 13 landed.
        assert_eq!(fighter.race.hp, 2200 - 3 * 13);
    }

    #[test]
    fn test_loss_ends_encounter_immediately() {
        let (mut fighter, mut enemy) = duel(RaceKind::Goblin, WeaponKind::Sword, EnemyKind::Boar);
        fighter.race.hp = 19; // one boar counter-attack (19 dmg at 1.3 def) kills
        let mut roll = ScriptedRolls::misses();
        let mut actions = ScriptedActions::repeat_attack();

        let outcome = run_encounter(&mut fighter, &mut enemy, &mut roll, &mut actions);

        assert_eq!(outcome, EncounterOutcome::Lost);
        assert_eq!(fighter.race.hp, 0);
        // The enemy took exactly one hit before the fight ended:
        // floor((15 + 15) / 1.1) = 27.
        assert_eq!(enemy.hp, 100 - 27);
    }

    #[test]
    fn test_rejected_action_is_rechosen_without_new_round() {
        let (mut fighter, mut enemy) = duel(RaceKind::Ork, WeaponKind::Sword, EnemyKind::Boar);
        fighter.weapon.ability.current_cooldown = 100; // stays on cooldown after one tick
        enemy.hp = 20; // one basic attack finishes it
        let mut roll = ScriptedRolls::misses();
        let mut actions = ScriptedActions::new([Action::UseAbility, Action::Attack]);

        let outcome = run_encounter(&mut fighter, &mut enemy, &mut roll, &mut actions);

        assert_eq!(outcome, EncounterOutcome::Won);
        let rejections = actions.rejections();
        assert_eq!(rejections.len(), 1);
        assert!(matches!(
            rejections[0],
            ActionError::AbilityOnCooldown { .. }
        ));
        // The cooldown ticked once for the single round that ran.
        assert_eq!(fighter.weapon.ability.current_cooldown, 99);
    }

    #[test]
    fn test_stun_round_skips_to_next_round() {
        let (mut fighter, mut enemy) = duel(RaceKind::Ork, WeaponKind::Axe, EnemyKind::Bear);
        let mut roll = ScriptedRolls::misses();
        let mut actions = ScriptedActions::new([Action::UseAbility, Action::Attack]);

        enemy.hp = 50; // Axerang: floor(35/1.2)=29, then attack floor(30/1.2)=25
        let outcome = run_encounter(&mut fighter, &mut enemy, &mut roll, &mut actions);

        assert_eq!(outcome, EncounterOutcome::Won);
        // Round 1 ended in a stun, so only the round-2 counter-attack was
        // ever rolled, and the enemy died before making it.
        assert_eq!(fighter.race.hp, fighter.race.max_hp);
    }

    #[test]
    fn test_dot_finish_needs_no_action() {
        let (mut fighter, mut enemy) = duel(RaceKind::Human, WeaponKind::Bow, EnemyKind::Boar);
        enemy.hp = 4;
        enemy.dot = 5;
        enemy.dot_rounds = 3;
        let mut roll = ScriptedRolls::misses();
        let mut actions = ScriptedActions::new([]);

        let outcome = run_encounter(&mut fighter, &mut enemy, &mut roll, &mut actions);

        assert_eq!(outcome, EncounterOutcome::Won);
        assert!(actions.is_untouched());
    }
}
