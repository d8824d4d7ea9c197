use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use syncd_core::{Alphabet, Difficulty, GameConfig, GameSession};
use web_time::Instant;

use crate::command::{Command, HELP};

mod command;
mod render;

const DEFAULT_PLAYER: &str = "Player";

#[derive(Parser, Debug)]
#[command(version, about = "Find every pair of matching cards", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Name shown in greetings
    #[arg(short, long, default_value = DEFAULT_PLAYER)]
    name: String,

    /// Starting difficulty: easy, medium or hard
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with `difficulty` and `symbols`
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Feeds whole elapsed seconds to the session, the core has no clock of its own.
struct Ticker {
    started: Instant,
    delivered: u64,
}

impl Ticker {
    fn new() -> Self {
        Self {
            started: Instant::now(),
            delivered: 0,
        }
    }

    fn restart(&mut self) {
        *self = Self::new();
    }

    fn catch_up(&mut self, session: &mut GameSession) {
        let elapsed = self.started.elapsed().as_secs();
        for _ in self.delivered..elapsed {
            session.tick();
        }
        self.delivered = elapsed;
    }
}

fn init_logging(filter: log::LevelFilter) {
    use tracing_subscriber::filter::LevelFilter;

    let level = match filter {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read config {}", path.display()))?;
    GameConfig::from_toml_str(&text).with_context(|| format!("Invalid config {}", path.display()))
}

fn player_name(raw: &str) -> &str {
    match raw.trim() {
        "" => DEFAULT_PLAYER,
        name => name,
    }
}

fn print_session(session: &GameSession) {
    let state = session.snapshot();
    print!("{}", render::board(&state));
    println!("{}", render::stats(&state));
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose.log_level_filter());

    let config = load_config(args.config.as_ref())?;
    let alphabet: Alphabet = config.alphabet().context("Invalid symbol alphabet")?;
    let difficulty = args.difficulty.unwrap_or(config.difficulty);
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let player = player_name(&args.name);
    let mut session = GameSession::new(difficulty, alphabet, seed)?;
    let mut ticker = Ticker::new();

    println!("Good luck, {player}! Type `help` for commands.");
    print_session(&session);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Could not read input")?;
        if line.trim().is_empty() {
            continue;
        }

        ticker.catch_up(&mut session);
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match command {
            Command::Flip(card_id) => {
                let was_idle = !session.is_active() && !session.is_complete();
                let outcome = match session.flip(card_id) {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                };
                if was_idle && session.is_active() {
                    ticker.restart();
                }
                let state = session.snapshot();
                if let Some(message) = render::outcome(outcome, &state, player) {
                    println!("{message}");
                }
                print_session(&session);
            }
            Command::Reset => {
                session.reset()?;
                ticker.restart();
                print_session(&session);
            }
            Command::Difficulty(difficulty) => {
                session.set_difficulty(difficulty)?;
                ticker.restart();
                print_session(&session);
            }
            Command::State => {
                println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    log::debug!("Bye");
    Ok(())
}
