mod ui;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use simon_engine::{GameConfig, GameEngine, InputOutcome, Pacer, ScoreStore, Signal, SignalDisplay};
use simon_store::FileStore;

use ui::{print_status, SleepPacer, TerminalDisplay};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let store_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(default_store_path);
    log::debug!("high score file: {}", store_path.display());

    let config = load_config(args.next().map(PathBuf::from));
    let display = TerminalDisplay::new(config.highlight());
    let store = FileStore::new(store_path);
    let rng = ChaCha8Rng::from_entropy();
    let mut engine = GameEngine::new(display, store, SleepPacer, config, rng);

    println!("{}", "simon — repeat the sequence".bold());
    println!("commands: start, green/red/blue/yellow (or g/r/b/y), quit");
    print_status(&engine.snapshot());

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        match line.trim().to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => break,
            "start" | "s" => {
                if engine.start() {
                    println!("\nyour turn");
                } else {
                    println!("a game is already running");
                }
            }
            other => match other.parse::<Signal>() {
                Ok(signal) => handle_input(&mut engine, signal),
                Err(e) => println!("{e} (try green/red/blue/yellow or start/quit)"),
            },
        }
        print_status(&engine.snapshot());
    }
}

fn handle_input<D, S, P>(engine: &mut GameEngine<D, S, P>, signal: Signal)
where
    D: SignalDisplay,
    S: ScoreStore,
    P: Pacer,
{
    match engine.submit_input(signal) {
        InputOutcome::Ignored => println!("no game in progress — type start"),
        InputOutcome::Matched { position } => {
            println!("{} ({} so far)", "ok".green(), position + 1);
        }
        InputOutcome::RoundComplete {
            level,
            achievement,
            new_high_score,
        } => {
            println!("\n{} level {level}", "round complete!".bold().green());
            if let Some(unlocked) = achievement {
                println!("{}", unlocked.message.yellow().bold());
            }
            if new_high_score {
                println!("{}", "new high score!".cyan());
            }
            println!("your turn");
        }
        InputOutcome::Mismatch { expected, got } => {
            // Notify before the reset state is shown.
            println!(
                "\n{} expected {expected}, got {got} — try again",
                "wrong!".red().bold()
            );
        }
    }
}

fn default_store_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".simon-high-score.json")
}

/// Load the optional JSON config file; anything unusable falls back to the
/// defaults so a bad config never blocks a game.
fn load_config(path: Option<PathBuf>) -> GameConfig {
    let Some(path) = path else {
        return GameConfig::default();
    };
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("{}: config not readable, using defaults: {e}", path.display());
            return GameConfig::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}: bad config, using defaults: {e}", path.display());
            GameConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TempConfigFile {
        path: PathBuf,
    }

    impl TempConfigFile {
        fn new(name: &str, contents: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "simon-cli-{}-{name}.json",
                std::process::id()
            ));
            fs::write(&path, contents).unwrap();
            Self { path }
        }
    }

    impl Drop for TempConfigFile {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.path);
        }
    }

    #[test]
    fn test_no_config_path_uses_defaults() {
        let config = load_config(None);
        assert_eq!(config.playback_gap_ms, 800);
        assert_eq!(config.achievement_stride, 5);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let tmp = TempConfigFile::new(
            "custom",
            r#"{
                "playback_gap_ms": 300,
                "next_round_delay_ms": 400,
                "highlight_ms": 200,
                "achievement_stride": 2
            }"#,
        );
        let config = load_config(Some(tmp.path.clone()));
        assert_eq!(config.playback_gap_ms, 300);
        assert_eq!(config.next_round_delay_ms, 400);
        assert_eq!(config.achievement_stride, 2);
    }

    #[test]
    fn test_unreadable_or_bad_config_falls_back() {
        let missing = load_config(Some(PathBuf::from("/nonexistent/simon.json")));
        assert_eq!(missing.playback_gap_ms, 800);

        let tmp = TempConfigFile::new("corrupt", "{ not json");
        let corrupt = load_config(Some(tmp.path.clone()));
        assert_eq!(corrupt.playback_gap_ms, 800);
    }
}
