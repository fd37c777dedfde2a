//! Binary entrypoint for the Treasure Hunt CLI.
//!
//! Commands:
//! - `play [--name <n>] [--mode <m>] [--seed <s>] [--json-summary]` - play a game in the terminal
//! - `init` - write a starter `config.toml`
//!
//! See the library crate docs for module-level details: `treasurehunt::`.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use treasurehunt::config::Config;
use treasurehunt::game::io::{ConsoleOutput, LineInput};
use treasurehunt::game::{Mode, Session, SessionOptions};

#[derive(Parser)]
#[command(name = "treasurehunt")]
#[command(about = "Hunt for treasure across randomly generated towns")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game
    Play {
        /// Hunter name (skips the prompt)
        #[arg(short, long)]
        name: Option<String>,

        /// Difficulty: easy, normal, hard, samurai or test (skips the prompt)
        #[arg(short, long)]
        mode: Option<Mode>,

        /// RNG seed for a reproducible game
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print a JSON summary of the game when it ends
        #[arg(long)]
        json_summary: bool,
    },
    /// Write a default configuration file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            name,
            mode,
            seed,
            json_summary,
        } => {
            let config = Config::load_or_default(&cli.config)?;
            init_logging(&Some(config.clone()), cli.verbose);
            info!("Starting treasurehunt v{}", env!("CARGO_PKG_VERSION"));

            // CLI overrides config; anything left unset is asked for interactively.
            let options = SessionOptions {
                hunter_name: name.or(config.game.hunter_name.clone()),
                mode: mode.or(config.game.mode),
            };
            let rng = match seed.or(config.game.seed) {
                Some(seed) => {
                    info!("Using fixed seed {}", seed);
                    StdRng::seed_from_u64(seed)
                }
                None => StdRng::from_entropy(),
            };

            let stdin = std::io::stdin();
            let mut session = Session::welcome(
                options,
                rng,
                LineInput::new(stdin.lock()),
                ConsoleOutput::new(config.game.color),
            )?;
            session.run()?;
            println!();

            if json_summary {
                println!("{}", serde_json::to_string_pretty(&session.summary())?);
            }
        }
        Commands::Init => {
            init_logging(&None, cli.verbose);
            Config::create_default(&cli.config)?;
            info!("Configuration file created at {}", cli.config);
            println!("Wrote {}", cli.config);
        }
    }

    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .map(|cfg| cfg.logging.level_filter())
            .unwrap_or(log::LevelFilter::Warn),
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config.as_ref().and_then(|cfg| cfg.logging.file.clone());
    match log_file.map(|path| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
    }) {
        Some(Ok(f)) => {
            let file = std::sync::Mutex::new(f);
            // The game owns the terminal; only mirror log lines to stderr when it is not redirected.
            let is_tty = atty::is(atty::Stream::Stderr);
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = file.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        }
        other => {
            if let Some(Err(e)) = other {
                eprintln!("Unable to open log file: {} (logging to stderr)", e);
            }
            builder.format(|fmt, record| {
                writeln!(
                    fmt,
                    "{} [{}] {}",
                    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                    record.level(),
                    record.args()
                )
            });
        }
    }
    let _ = builder.try_init();
}
