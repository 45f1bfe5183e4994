//! Interactive combat session: the action menu, event rendering,
//! character creation and the post-fight mercy decisions.

use crate::narrative::Pacing;
use crate::prompt::{ask, read_line, yes_no};
use fellwood_core::{
    Action, ActionError, ActionSource, CombatEvent, Enemy, Fighter, Gender, ItemEffect, Mercy,
    RaceKind, WeaponKind,
};

/// An [`ActionSource`] backed by the interactive combat menu.
pub struct MenuSource {
    pacing: Pacing,
}

impl MenuSource {
    pub fn new(pacing: Pacing) -> Self {
        Self { pacing }
    }

    fn show_backpack(fighter: &Fighter) {
        if fighter.inventory.is_empty() {
            println!("Backpack is empty!");
            return;
        }
        println!("Backpack contains: ");
        for item in fighter.inventory.items() {
            println!("  - {} : {}", item.name, item.description);
        }
    }

    fn render(&self, event: &CombatEvent) {
        match event {
            CombatEvent::EnemyNoise(noise) => println!("{noise}"),
            CombatEvent::DotTick { damage, enemy_hp } => {
                println!("Enemy is suffering, They lost {damage} hp, Their hp is now {enemy_hp}");
                self.pacing.pause(1.0);
            }
            CombatEvent::BuffExpired(_) => {
                println!("Your buff just ended!");
                self.pacing.pause(1.0);
            }
            CombatEvent::Defended => {
                println!("You decided to defend Yourself against your opponents attack. Great choice!");
                self.pacing.pause(2.0);
            }
            CombatEvent::EnemyDodged => {
                println!("ENEMY dodged the attack");
                self.pacing.pause(2.0);
            }
            CombatEvent::FighterCritical => {
                println!("YOU CRITICALLY HIT THE ENEMY");
                self.pacing.pause(2.0);
            }
            CombatEvent::FighterHit { damage, enemy_hp } => {
                println!("You hit the enemy with {damage} DMG, enemy hp left: {enemy_hp}");
                self.pacing.pause(2.0);
            }
            CombatEvent::AbilityUsed { name } => {
                println!("You chose to use {name}");
                self.pacing.pause(1.0);
            }
            CombatEvent::AbilityHit { damage, enemy_hp } => {
                println!("You hit the enemy for {damage} damage, their hp is now {enemy_hp}");
                self.pacing.pause(1.0);
            }
            CombatEvent::EnemyWeakened { reduction, .. } => {
                println!("Your ability reduces enemy dmg! It's now {reduction} less");
                self.pacing.pause(1.0);
            }
            CombatEvent::EnemyStunned => println!("Your enemy is stunned!"),
            CombatEvent::ItemUsed { item } => {
                match item.effect {
                    ItemEffect::Heal { amount } => {
                        println!("You just used {}, you restored {amount} hp!", item.name);
                    }
                    ItemEffect::AttackBuff { amount, .. } => {
                        println!(
                            "You just used {}, your Attack is now enlarged by {amount}",
                            item.name
                        );
                    }
                    ItemEffect::DefenceBuff { amount, .. } => {
                        println!(
                            "You just used {}, your Defence is now enlarged by {amount}",
                            item.name
                        );
                    }
                }
                self.pacing.pause(1.0);
            }
            CombatEvent::EnemyCritical => {
                println!("Your enemy hits you with a critical!");
                self.pacing.pause(1.0);
            }
            CombatEvent::EnemyHit { damage, fighter_hp } => {
                println!("They hit you with {damage} dmg, Your hp is now {fighter_hp}.");
                self.pacing.pause(1.0);
            }
        }
    }
}

impl ActionSource for MenuSource {
    fn choose_action(
        &mut self,
        fighter: &Fighter,
        _enemy: &Enemy,
        rejected: Option<&ActionError>,
    ) -> Action {
        if let Some(err) = rejected {
            println!("{err}");
        }
        loop {
            let choice = read_line("Attack  /  Defend  /  Ability  /  Item ");
            match choice.to_lowercase().as_str() {
                "attack" => return Action::Attack,
                "defend" => return Action::Defend,
                "ability" => {
                    let ability = &fighter.weapon.ability;
                    if !ability.is_ready() {
                        println!(
                            "The {} ability is on cooldown, You need to wait {} turns to use it",
                            ability.name,
                            ability.remaining_cooldown()
                        );
                        continue;
                    }
                    println!("{ability}");
                    self.pacing.pause(2.0);
                    if ask(
                        "Do you want to use this ability? (Yes/No)  ",
                        "Yes/No",
                        yes_no,
                    ) {
                        return Action::UseAbility;
                    }
                }
                "item" => {
                    Self::show_backpack(fighter);
                    let pick = read_line(
                        "Type your item of choice, or 'No' if you don't want to use any item (Item name/No) ",
                    );
                    if pick.eq_ignore_ascii_case("no") {
                        continue;
                    }
                    if fighter.inventory.get(&pick).is_some() {
                        return Action::UseItem(pick);
                    }
                    println!("{pick} - You don't have this item!");
                }
                _ => println!("Wrong input, please input correctly one of the options."),
            }
        }
    }

    fn on_events(&mut self, events: &[CombatEvent]) {
        for event in events {
            self.render(event);
        }
    }
}

/// Run the character creation dialogue; answering "No" at the final
/// confirmation starts over.
pub fn create_fighter(pacing: &Pacing) -> Fighter {
    loop {
        pacing.typewriter("Welcome to the magical world! Choose your statistics!");
        let name = read_line("But first, what is Your name: ");
        let gender = ask("What's your gender? (M/F) ", "M/F", Gender::from_token);
        let race = ask(
            "Now, what race are You? (Ork/Goblin/Elf/Human) ",
            "Ork/Goblin/Elf/Human",
            RaceKind::from_token,
        );
        let weapon = ask(
            "Lastly, what weapon will You choose? (Sword/Bow/Axe/Slingshot) ",
            "Sword/Bow/Axe/Slingshot",
            WeaponKind::from_token,
        );
        println!("Name = {name}, Gender = {gender}, Race = {race}, Weapon = {weapon}.");
        if ask("Is this correct? (Yes/No) ", "Yes/No", yes_no) {
            let fighter = Fighter::new(name, gender, race, weapon);
            println!("{}", fighter.race);
            return fighter;
        }
    }
}

/// The post-victory decision over a beaten enemy.
pub fn spare_or_kill(fighter: &mut Fighter) {
    let mercy = ask(
        "Would you like to SPARE Their life, or KILL them for all the harm They've done? ",
        "Spare/Kill",
        Mercy::from_token,
    );
    fighter.record_mercy(mercy);
    match mercy {
        Mercy::Spare => println!("You decided to walk further, Your enemy thanks you."),
        Mercy::Kill => println!("YOUR VIOLENCE SCORE IS NOW {}", fighter.violence),
    }
}

/// The execution scene a fully violent run unlocks: one forced blow per
/// dying voice, no combat rolls at all.
pub fn worst_fight(enemy: &Enemy, pacing: &Pacing) {
    for voice in enemy.dying_voices() {
        read_line("ATTACK ");
        println!("YOU ARE DOING THE RIGHT THING.");
        pacing.pause(1.0);
        println!("{voice}");
        pacing.pause(2.0);
    }
    println!("AS YOU DEALT THE FINAL BLOW, YOU FEEL MORE PEACEFUL.");
    pacing.pause(3.0);
}
