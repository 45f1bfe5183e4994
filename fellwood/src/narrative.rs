//! Typewriter pacing for narrative output.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Delays applied to narrative text. [`Pacing::none`] turns every delay
/// off so scripted runs finish instantly.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    char_delay: Duration,
    enabled: bool,
}

impl Pacing {
    pub fn standard() -> Self {
        Self {
            char_delay: Duration::from_millis(40),
            enabled: true,
        }
    }

    pub fn none() -> Self {
        Self {
            char_delay: Duration::ZERO,
            enabled: false,
        }
    }

    /// Print a line one character at a time.
    pub fn typewriter(&self, text: &str) {
        self.typewriter_at(text, self.char_delay);
    }

    /// Slower variant for the dramatic lines.
    pub fn say_slow(&self, text: &str) {
        self.typewriter_at(text, Duration::from_millis(200));
    }

    /// Sleep between story beats.
    pub fn pause(&self, secs: f64) {
        if self.enabled {
            thread::sleep(Duration::from_secs_f64(secs));
        }
    }

    /// Frame a message in a box of dashes.
    pub fn boxed(&self, msg: &str) {
        let bar = "-".repeat(msg.len() + 8);
        println!("{bar}");
        println!("|   {msg}   |");
        println!("{bar}");
    }

    fn typewriter_at(&self, text: &str, delay: Duration) {
        if !self.enabled {
            println!("{text}");
            return;
        }
        for ch in text.chars() {
            print!("{ch}");
            let _ = io::stdout().flush();
            thread::sleep(delay);
        }
        println!();
    }
}
