//! Game controller: welcome, mode selection and the menu loop.
//!
//! A [`Session`] owns everything a game needs: the hunter, the current town,
//! the random source and both I/O handles. One command is read and fully
//! applied before the next, and the loop ends on exit, end of input, a
//! negative purse or a full treasure collection.

use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::errors::{HuntError, Result};
use crate::game::hunter::{Hunter, TreasureFind};
use crate::game::io::{Emphasis, InputSource, OutputSink};
use crate::game::items::{Item, Treasure};
use crate::game::mode::Mode;
use crate::game::shop::{Shop, ShopAction};
use crate::game::town::{BrawlOutcome, DigOutcome, Town};
use crate::validation::{normalize_answer, validate_hunter_name};

const MENU: &str = "\n(B)uy something at the shop.\n\
(S)ell something at the shop.\n\
(E)xplore surrounding terrain.\n\
(M)ove on to a different town.\n\
(H)unt for treasure.\n\
(L)ook for trouble!\n\
(D)ig for gold.\n\
Give up the hunt and e(X)it.\n";

/// One-letter menu commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Buy,
    Sell,
    Explore,
    Move,
    Hunt,
    LookForTrouble,
    Dig,
    Exit,
}

impl Command {
    pub fn parse(raw: &str) -> Option<Command> {
        match normalize_answer(raw).as_str() {
            "b" => Some(Command::Buy),
            "s" => Some(Command::Sell),
            "e" => Some(Command::Explore),
            "m" => Some(Command::Move),
            "h" => Some(Command::Hunt),
            "l" => Some(Command::LookForTrouble),
            "d" => Some(Command::Dig),
            "x" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Won,
    Lost,
    Quit,
}

/// End-of-game report.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub hunter: String,
    pub mode: Mode,
    pub outcome: Option<GameOutcome>,
    pub gold: i32,
    pub kit: Vec<Item>,
    pub treasures: Vec<Treasure>,
    pub towns_visited: u32,
    pub turns: u32,
}

/// Answers that may be supplied up front instead of prompting.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub hunter_name: Option<String>,
    pub mode: Option<Mode>,
}

pub struct Session<R, I, O> {
    mode: Mode,
    hunter: Hunter,
    town: Town,
    rng: R,
    input: I,
    output: O,
    towns_visited: u32,
    turns: u32,
    outcome: Option<GameOutcome>,
}

impl<R: Rng, I: InputSource, O: OutputSink> Session<R, I, O> {
    /// Greet the player, settle name and mode, and enter the first town.
    pub fn welcome(options: SessionOptions, rng: R, mut input: I, mut output: O) -> Result<Self> {
        output.emit("Welcome to TREASURE HUNTER!\n", Emphasis::Banner);
        output.emit("Going hunting for the big treasure, eh?\n", Emphasis::Info);

        let name = match options.hunter_name {
            Some(name) => validate_hunter_name(&name)?,
            None => prompt_name(&mut input, &mut output)?,
        };
        let mode = match options.mode {
            Some(mode) => mode,
            None => {
                output.emit(
                    "\nEasy Mode(e), Normal Mode(n), or Hard Mode(h): ",
                    Emphasis::Prompt,
                );
                let answer = input
                    .next_line()?
                    .ok_or(HuntError::InputClosed("mode selection"))?;
                Mode::from_choice(&answer)
            }
        };
        info!("session: {} starts a {} game", name, mode);

        Ok(Session::start(Hunter::new(name, mode), mode, rng, input, output))
    }

    /// Begin a game for an already-built hunter in a fresh random town.
    pub fn start(hunter: Hunter, mode: Mode, mut rng: R, input: I, output: O) -> Self {
        let town = Town::new(Shop::new(mode), mode.profile().toughness, &mut rng);
        Session::from_parts(hunter, town, mode, rng, input, output)
    }

    /// Assemble a session around a given town; the hunter arrives immediately.
    pub fn from_parts(hunter: Hunter, mut town: Town, mode: Mode, rng: R, input: I, output: O) -> Self {
        town.hunter_arrives(&hunter);
        Session {
            mode,
            hunter,
            town,
            rng,
            input,
            output,
            towns_visited: 1,
            turns: 0,
            outcome: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn hunter(&self) -> &Hunter {
        &self.hunter
    }

    pub fn hunter_mut(&mut self) -> &mut Hunter {
        &mut self.hunter
    }

    pub fn town(&self) -> &Town {
        &self.town
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Show the menu and process commands until the game ends.
    pub fn run(&mut self) -> Result<GameOutcome> {
        while self.outcome.is_none() {
            self.show_menu();
            let choice = match self.input.next_line()? {
                Some(line) => line,
                None => {
                    debug!("session: input exhausted, leaving");
                    "x".to_string()
                }
            };
            self.process_choice(&choice)?;
        }
        let outcome = self.outcome.unwrap_or(GameOutcome::Quit);
        info!(
            "session: {} finished ({:?}) with {} gold after {} turns in {} towns",
            self.hunter.name(),
            outcome,
            self.hunter.gold(),
            self.turns,
            self.towns_visited
        );
        Ok(outcome)
    }

    /// Apply one menu choice and check for the end of the game.
    pub fn process_choice(&mut self, choice: &str) -> Result<Option<GameOutcome>> {
        self.turns = self.turns.saturating_add(1);
        match Command::parse(choice) {
            Some(Command::Buy) => self.shop(ShopAction::Buy)?,
            Some(Command::Sell) => self.shop(ShopAction::Sell)?,
            Some(Command::Explore) => {
                let text = format!("\n{}", self.town.terrain().info_string());
                self.output.emit(&text, Emphasis::Success);
            }
            Some(Command::Move) => self.move_on(),
            Some(Command::Hunt) => self.hunt(),
            Some(Command::LookForTrouble) => self.brawl(),
            Some(Command::Dig) => {
                let outcome = self.town.dig_for_gold(&mut self.hunter, &mut self.rng);
                debug!("session: dig {:?}", outcome);
                if outcome == DigOutcome::AlreadyDug {
                    let text = format!("\n{}", self.town.latest_news());
                    self.output.emit(&text, Emphasis::Warning);
                }
            }
            Some(Command::Exit) => {
                let text = format!("\nFare thee well, {}!", self.hunter.name());
                self.output.emit(&text, Emphasis::Warning);
                self.outcome = Some(GameOutcome::Quit);
                return Ok(self.outcome);
            }
            None => {
                self.output.emit(
                    "\nYikes! That's an invalid option! Try again.",
                    Emphasis::Warning,
                );
            }
        }
        self.check_terminal();
        Ok(self.outcome)
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            hunter: self.hunter.name().to_string(),
            mode: self.mode,
            outcome: self.outcome,
            gold: self.hunter.gold(),
            kit: self.hunter.kit().to_vec(),
            treasures: self.hunter.treasures().to_vec(),
            towns_visited: self.towns_visited,
            turns: self.turns,
        }
    }

    fn show_menu(&mut self) {
        self.output.clear();
        let news = format!("\n{}", self.town.latest_news());
        self.output.emit(&news, Emphasis::Info);
        self.output.emit("\n***", Emphasis::Info);
        let line = format!("\n{}", self.hunter.info_string());
        self.output.emit(&line, Emphasis::Info);
        let line = format!("\n{}", self.hunter.treasure_info());
        self.output.emit(&line, Emphasis::Treasure);
        let line = format!("\n{}", self.town.info_string());
        self.output.emit(&line, Emphasis::Success);
        self.output.emit(MENU, Emphasis::Plain);
        self.output.emit("What's your next move?: ", Emphasis::Prompt);
    }

    fn shop(&mut self, action: ShopAction) -> Result<()> {
        self.town
            .enter_shop(&mut self.hunter, action, &mut self.input, &mut self.output)?;
        Ok(())
    }

    fn move_on(&mut self) {
        let items_break = self.mode.profile().items_break;
        if self
            .town
            .leave_town(&mut self.hunter, items_break, &mut self.rng)
        {
            // The old town's news is lost with it, so show it now.
            let text = format!("\n{}", self.town.latest_news());
            self.output.emit(&text, Emphasis::Info);
            self.enter_town();
            self.hunter.set_searched_current_town(false);
        }
    }

    fn enter_town(&mut self) {
        let profile = self.mode.profile();
        self.town = Town::new(Shop::new(self.mode), profile.toughness, &mut self.rng);
        self.town.hunter_arrives(&self.hunter);
        self.towns_visited = self.towns_visited.saturating_add(1);
        debug!("session: entered town #{}", self.towns_visited);
    }

    fn hunt(&mut self) {
        match self.town.hunt_for_treasure(&mut self.hunter, &mut self.rng) {
            None => self
                .output
                .emit("\nYou have already searched this town.", Emphasis::Warning),
            Some(TreasureFind::Found(t)) => {
                self.output
                    .emit(&format!("\nYou found a {}!", t), Emphasis::Treasure);
            }
            Some(TreasureFind::Dust) => {
                let text = format!("\nYou found a {}!", Treasure::Dust);
                self.output.emit(&text, Emphasis::Treasure);
            }
            Some(TreasureFind::Duplicate(t)) => {
                let text = format!(
                    "\nYou already have {} in your collection so you don't collect it.",
                    t
                );
                self.output.emit(&text, Emphasis::Warning);
            }
        }
    }

    fn brawl(&mut self) {
        let outcome = self.town.look_for_trouble(&mut self.hunter, &mut self.rng);
        if outcome == BrawlOutcome::NoTrouble {
            self.output
                .emit("\nYou couldn't find any trouble", Emphasis::Muted);
            return;
        }
        self.output.emit(
            "\nYou want trouble, stranger! You got it!\nOof! Umph! Ow!\n",
            Emphasis::Warning,
        );
        match outcome {
            BrawlOutcome::Won { gold, by_sword } => {
                let taunt = if by_sword {
                    "\nThe brawler, seeing your sword, realizes he picked a losing fight and gives you his gold"
                } else {
                    "\nOkay, stranger! You proved yer mettle. Here, take my gold."
                };
                self.output.emit(taunt, Emphasis::Success);
                let text = format!("\nYou won the brawl and receive {} gold.", gold);
                self.output.emit(&text, Emphasis::Success);
            }
            BrawlOutcome::Lost { gold } => {
                self.output.emit(
                    "\nThat'll teach you to go lookin' fer trouble in MY town! Now pay up!",
                    Emphasis::Warning,
                );
                let text = format!("\nYou lost the brawl and pay {} gold.", gold);
                self.output.emit(&text, Emphasis::Warning);
            }
            BrawlOutcome::NoTrouble => {}
        }
    }

    fn check_terminal(&mut self) {
        if self.hunter.is_gold_negative() {
            let text = format!("\n{}", self.town.latest_news());
            self.output.emit(&text, Emphasis::Warning);
            self.output.emit("\nGame Over!", Emphasis::Warning);
            self.outcome = Some(GameOutcome::Lost);
        } else if self.hunter.has_found_all_treasures() {
            self.output.emit(
                "\nCongratulations, you have found the last of the three treasures, you win!",
                Emphasis::Success,
            );
            self.outcome = Some(GameOutcome::Won);
        }
    }
}

fn prompt_name<I: InputSource, O: OutputSink>(input: &mut I, output: &mut O) -> Result<String> {
    loop {
        output.emit("What's your name, Hunter?: ", Emphasis::Prompt);
        let raw = input
            .next_line()?
            .ok_or(HuntError::InputClosed("name entry"))?;
        match validate_hunter_name(&raw) {
            Ok(name) => return Ok(name),
            Err(e) => output.emit(&format!("{}\n", e), Emphasis::Warning),
        }
    }
}
