//! Turn-based combat engine for the Fellwood text adventure.
//!
//! A fighter built from a race/weapon pair battles a scripted sequence of
//! enemies through a small action menu (attack, defend, ability, item).
//! The engine is synchronous and I/O-free: it consumes already-validated
//! [`combat::Action`] values, draws randomness through the [`combat::Roll`]
//! seam, and reports every state change as [`combat::CombatEvent`]s for the
//! caller to render.
//!
//! # Quick Start
//!
//! ```
//! use fellwood_core::{
//!     combat, run_encounter, EncounterOutcome, Enemy, EnemyKind, Fighter,
//!     Gender, RaceKind, WeaponKind,
//! };
//! use fellwood_core::testing::ScriptedActions;
//!
//! let mut fighter = Fighter::new("Aldric", Gender::Male, RaceKind::Ork, WeaponKind::Axe);
//! let mut enemy = Enemy::new(EnemyKind::Boar);
//! let mut roll = combat::thread_roll();
//! let mut actions = ScriptedActions::repeat_attack();
//!
//! match run_encounter(&mut fighter, &mut enemy, &mut roll, &mut actions) {
//!     EncounterOutcome::Won => {}
//!     EncounterOutcome::Lost => {}
//! }
//! ```

pub mod abilities;
pub mod combat;
pub mod encounter;
pub mod enemies;
pub mod fighter;
pub mod inventory;
pub mod items;
pub mod races;
pub mod testing;
pub mod weapons;

// Primary public API
pub use abilities::Ability;
pub use combat::{Action, ActionError, CombatEvent, RoundOutcome};
pub use encounter::{run_encounter, ActionSource, EncounterOutcome};
pub use enemies::{Enemy, EnemyKind};
pub use fighter::{Buff, BuffKind, Fighter, Gender, Mercy};
pub use inventory::{Inventory, InventoryError};
pub use items::{Item, ItemEffect};
pub use races::{Race, RaceKind};
pub use weapons::{Weapon, WeaponKind};
