//! Deterministic test support: scripted rolls and scripted actions.
//!
//! Combat outcomes hinge on percentage rolls; these helpers replace the
//! RNG and the interactive action menu with fixed scripts so tests can
//! force exact paths through the engine.

use crate::combat::{Action, ActionError, Roll};
use crate::enemies::{Enemy, EnemyKind};
use crate::encounter::ActionSource;
use crate::fighter::{Fighter, Gender};
use crate::races::RaceKind;
use crate::weapons::WeaponKind;
use std::collections::VecDeque;

/// A [`Roll`] that replays a fixed script.
///
/// Exhausted percent rolls return 99, which misses every chance in the
/// game (including the 50% idle-noise roll), so a test only scripts the
/// rolls it wants to force.
#[derive(Debug, Default)]
pub struct ScriptedRolls {
    rolls: VecDeque<u32>,
    picks: VecDeque<usize>,
}

impl ScriptedRolls {
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            picks: VecDeque::new(),
        }
    }

    /// No scripted rolls at all: every chance misses.
    pub fn misses() -> Self {
        Self::default()
    }

    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks = picks.into_iter().collect();
        self
    }
}

impl Roll for ScriptedRolls {
    fn percent(&mut self) -> u32 {
        self.rolls.pop_front().unwrap_or(99)
    }

    fn pick(&mut self, n: usize) -> usize {
        self.picks.pop_front().unwrap_or(0).min(n.saturating_sub(1))
    }
}

/// An [`ActionSource`] that replays a fixed action script.
///
/// Rejections are recorded for assertion; an exhausted script falls back
/// to attacking.
#[derive(Debug)]
pub struct ScriptedActions {
    actions: VecDeque<Action>,
    rejections: Vec<ActionError>,
    asked: bool,
}

impl ScriptedActions {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            rejections: Vec::new(),
            asked: false,
        }
    }

    /// An empty script: attack every round.
    pub fn repeat_attack() -> Self {
        Self::new([])
    }

    /// Every rejection the driver reported back, in order.
    pub fn rejections(&self) -> &[ActionError] {
        &self.rejections
    }

    /// True when the driver never asked for an action.
    pub fn is_untouched(&self) -> bool {
        !self.asked
    }
}

impl ActionSource for ScriptedActions {
    fn choose_action(
        &mut self,
        _fighter: &Fighter,
        _enemy: &Enemy,
        rejected: Option<&ActionError>,
    ) -> Action {
        self.asked = true;
        if let Some(err) = rejected {
            self.rejections.push(err.clone());
        }
        self.actions.pop_front().unwrap_or(Action::Attack)
    }
}

/// A fresh fighter/enemy pair ready for scripted rounds.
pub fn duel(race: RaceKind, weapon: WeaponKind, enemy: EnemyKind) -> (Fighter, Enemy) {
    (
        Fighter::new("Tester", Gender::Male, race, weapon),
        Enemy::new(enemy),
    )
}
