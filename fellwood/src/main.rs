//! Fellwood: a short text adventure built on the `fellwood-core` combat
//! engine.
//!
//! Four encounters stand between the player and the end of the story; how
//! much mercy they show along the way decides which ending they get.
//!
//! Set `FELLWOOD_FAST` to skip the typewriter delays.

mod narrative;
mod prompt;
mod session;

use fellwood_core::combat::{self, Roll};
use fellwood_core::items::find_item;
use fellwood_core::{run_encounter, EncounterOutcome, Enemy, EnemyKind, Fighter};
use narrative::Pacing;
use session::{create_fighter, spare_or_kill, worst_fight, MenuSource};
use std::process;

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let pacing = if std::env::var_os("FELLWOOD_FAST").is_some() {
        Pacing::none()
    } else {
        Pacing::standard()
    };

    let mut fighter = create_fighter(&pacing);
    let mut roll = combat::thread_roll();

    // The enemies live for the whole session; damage dealt to them and
    // debuffs put on them persist between story beats.
    let mut boar = Enemy::new(EnemyKind::Boar);
    let mut bear = Enemy::new(EnemyKind::Bear);
    let mut zombie = Enemy::new(EnemyKind::Zombie);
    let mut werewolf = Enemy::new(EnemyKind::Werewolf);

    pacing.typewriter("You are on a mission, Your goal is to retrieve something that is Yours. ");
    pacing.typewriter("You land in a forest, surrounded by silence.");
    pacing.typewriter("You look around and suddenly hear a strange noise. YOU HAVE TO FIGHT!");
    pacing.typewriter("YOUR ENEMY IS A BOAR");
    pacing.boxed("TUTORIAL: Few options will show on your screen, choose one.");

    grant_item(&mut fighter, "Small Health Potion");
    grant_item(&mut fighter, "Big Attack Potion");

    every_fight(&mut fighter, &mut boar, &mut roll, &pacing);

    pacing.typewriter("When you are walking, You notice on the floor a similar bracelet to Yours,");
    pacing.typewriter("'I know I'm close', You say to Yourself.");
    pacing.typewriter("While walking You find a Big Health Potion!");

    grant_item(&mut fighter, "Big Health Potion");

    pacing.typewriter("Suddenly, You hear a loud Growl. YOU HAVE TO FIGHT");
    pacing.typewriter("YOUR ENEMY IS A BEAR");

    every_fight(&mut fighter, &mut bear, &mut roll, &pacing);

    if fighter.violence == 2 {
        pacing.typewriter("THE SILENCE IS OVERWHELMING. I WILL NOT STOP.");
        pacing.pause(2.0);
    }

    pacing.typewriter("You notice a smoke not far from here.");
    pacing.typewriter("'He must be there'");
    pacing.typewriter("You walk towards it, but in your way you see someone, who NEEDS to be hurt.");
    pacing.typewriter("YOUR ENEMY IS A ZOMBIE");

    every_fight(&mut fighter, &mut zombie, &mut roll, &pacing);

    if fighter.violence == 3 {
        println!("YOU CUT OF HIS LIMBS. NOW ONLY HEAD REMAINS. FINISH HIM.");
        worst_fight(&zombie, &pacing);
    }

    pacing.typewriter("You finally arrived to the source of the smoke.");
    pacing.typewriter("It's a small house.");
    pacing.typewriter("As you go inside, You see something you never wished to.");
    pacing.typewriter("YOUR ENEMY IS A WEREWOLF");

    every_fight(&mut fighter, &mut werewolf, &mut roll, &pacing);

    if fighter.violence == 4 {
        pacing.typewriter("THE WEREWOLF LOSES HIS POWER. HE TURNS INTO A HUMAN.");
        pacing.pause(4.0);
        pacing.typewriter("FINISH HIM, AS YOU DID THE REST.");
        pacing.pause(4.0);
        worst_fight(&werewolf, &pacing);
        pacing.typewriter("I HAVE KILLED THEM ALL.");
        pacing.pause(2.0);
    }

    ending(&fighter, &pacing);
}

/// Pull a named item from the catalogue into the backpack. A full
/// backpack drops the pickup silently, matching the five-slot cap.
fn grant_item(fighter: &mut Fighter, name: &str) {
    if let Some(item) = find_item(name) {
        fighter.inventory.add(item);
    }
}

/// One story encounter: fight to the end, then decide the enemy's fate.
/// A loss ends the program.
fn every_fight(fighter: &mut Fighter, enemy: &mut Enemy, roll: &mut dyn Roll, pacing: &Pacing) {
    pacing.pause(2.0);
    let mut menu = MenuSource::new(*pacing);
    match run_encounter(fighter, enemy, roll, &mut menu) {
        EncounterOutcome::Won => {
            println!("YOU WON!");
            pacing.pause(2.0);
            spare_or_kill(fighter);
        }
        EncounterOutcome::Lost => {
            println!("YOU LOST");
            pacing.pause(2.0);
            process::exit(0);
        }
    }
}

fn ending(fighter: &Fighter, pacing: &Pacing) {
    pacing.typewriter("You did It.");
    pacing.pause(2.0);
    pacing.typewriter("You finally managed to find Him.");
    pacing.pause(3.0);
    pacing.typewriter("As You look at Him, You know it's Your SON.");
    pacing.pause(3.0);

    if fighter.violence == 4 {
        pacing.typewriter("BUT. YOU DON'T. RECOGNIZE. YOURSELF.");
        pacing.pause(3.0);
    }

    pacing.typewriter("As You walk forward to Hug him.");
    pacing.pause(3.0);

    if fighter.violence == 4 {
        pacing.typewriter("You feel a sting.");
        pacing.pause(2.0);
        pacing.say_slow("YOU. HAVE. JUST. BEEN. STABBED.");
        pacing.pause(2.0);
        pacing.say_slow("BY. YOUR. OWN. SON.");
        pacing.pause(2.0);
        pacing.typewriter("WAS. IT. WORTH. IT.");
        pacing.pause(3.0);
        pacing.typewriter("As You bleed out. Your Son says to you: ");
        pacing.pause(2.0);
        pacing.typewriter("I. HATE. YOU.");
        pacing.pause(2.0);
        pacing.typewriter("GAME. OVER.");
        pacing.pause(2.0);
        pacing.typewriter("BAD ENDING");
        process::exit(0);
    }

    pacing.typewriter("He hugs you back.");
    pacing.pause(1.0);
    pacing.typewriter("You were finally reunited.");
    pacing.pause(2.0);
    pacing.typewriter("It was worth it.");
    pacing.pause(4.0);
    pacing.typewriter("GOOD ENDING");
}
