//! # Treasure Hunt - a small text adventure
//!
//! A hunter travels between randomly generated towns, trades at the local shop,
//! crosses the terrain around each town, digs for gold, picks fights and searches
//! for treasure. Collect the Crown, the Trophy and the Gem to win; let your purse
//! go negative and the game is over.
//!
//! ## Features
//!
//! - **Five difficulty modes**: easy, normal and hard, plus the samurai and test variants.
//! - **Single-letter menu**: `b s e m h l d x`, case-insensitive.
//! - **Pluggable I/O**: the game talks through [`game::io::InputSource`] and
//!   [`game::io::OutputSink`], so it runs equally on a terminal or a test script.
//! - **Reproducible games**: all randomness flows from one injected RNG; pass `--seed`
//!   to replay a game.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use treasurehunt::game::io::{ConsoleOutput, LineInput};
//! use treasurehunt::game::{Session, SessionOptions};
//!
//! fn main() -> anyhow::Result<()> {
//!     let stdin = std::io::stdin();
//!     let mut session = Session::welcome(
//!         SessionOptions::default(),
//!         StdRng::seed_from_u64(7),
//!         LineInput::new(stdin.lock()),
//!         ConsoleOutput::new(true),
//!     )?;
//!     session.run()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - hunter, shop, towns and the session loop
//! - [`config`] - configuration file handling
//! - [`errors`] - error types
//! - [`validation`] - hunter name validation

pub mod config;
pub mod errors;
pub mod game;
pub mod validation;
