//! # Treasure Hunt game core
//!
//! ## Components
//!
//! - [`hunter`] - the player's gold, kit and treasure collection
//! - [`shop`] - price list and the interactive buy/sell visit
//! - [`terrain`] - obstacles around each town and the item that crosses them
//! - [`town`] - per-town events: leaving, brawls, digging, treasure searches
//! - [`session`] - welcome, mode selection and the menu loop
//! - [`mode`] - difficulty modes and their tunables
//! - [`io`] - input/output surfaces the session talks through
//!
//! ## Ownership
//!
//! ```text
//! ┌─────────────────┐
//! │    Session      │ ← owns Hunter, RNG, input and output
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │     Town        │ ← rebuilt on every move
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │ Shop + Terrain  │
//! └─────────────────┘
//! ```

pub mod hunter;
pub mod io;
pub mod items;
pub mod mode;
pub mod session;
pub mod shop;
pub mod terrain;
pub mod town;

pub use hunter::{Hunter, TreasureFind};
pub use items::{Item, Treasure};
pub use mode::{Mode, ModeProfile};
pub use session::{Command, GameOutcome, GameSummary, Session, SessionOptions};
pub use shop::{Shop, ShopAction};
pub use terrain::Terrain;
pub use town::{BrawlOutcome, DigOutcome, Town};
