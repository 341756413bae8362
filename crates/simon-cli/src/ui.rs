use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use colored::{ColoredString, Colorize};
use simon_engine::{GameSnapshot, Pacer, Signal, SignalDisplay};

/// Renders the four pads on one stdout line, lighting one up at a time.
pub struct TerminalDisplay {
    hold: Duration,
}

impl TerminalDisplay {
    pub fn new(hold: Duration) -> Self {
        Self { hold }
    }

    fn pad(signal: Signal, lit: bool) -> ColoredString {
        let label = format!(" {} ", signal.id().to_uppercase());
        let base = match signal {
            Signal::Green => label.green(),
            Signal::Red => label.red(),
            Signal::Blue => label.blue(),
            Signal::Yellow => label.yellow(),
        };
        if lit {
            base.reversed().bold()
        } else {
            base
        }
    }

    fn draw_row(lit: Option<Signal>) {
        let row: Vec<String> = Signal::ALL
            .iter()
            .map(|&s| Self::pad(s, lit == Some(s)).to_string())
            .collect();
        print!("\r{}", row.join(" "));
        let _ = io::stdout().flush();
    }
}

impl SignalDisplay for TerminalDisplay {
    fn highlight(&mut self, signal: Signal) {
        Self::draw_row(Some(signal));
        thread::sleep(self.hold);
        Self::draw_row(None);
    }
}

/// Pacer that actually sleeps.
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

pub fn print_status(snapshot: &GameSnapshot) {
    println!();
    println!(
        "level: {}   best: {}",
        snapshot.level.to_string().bold(),
        snapshot.high_score.to_string().bold()
    );
    if !snapshot.achievements.is_empty() {
        println!("achievements:");
        for achievement in &snapshot.achievements {
            println!("  * {}", achievement.message.green());
        }
    }
}
