//! Difficulty modes and the tunables each one carries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseModeError;
use crate::game::items::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Easy,
    #[default]
    Normal,
    Hard,
    /// Unlocks the free sword; once carried, every later purchase is free.
    Samurai,
    /// Starts rich with a full kit.
    Test,
}

/// Per-mode configuration, fixed for the whole game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeProfile {
    pub starting_gold: i32,
    /// Fraction of the buy price paid back when selling.
    pub markdown: f64,
    /// Chance that a freshly generated town is a tough one.
    pub toughness: f64,
    pub kit_capacity: usize,
    pub starting_kit: &'static [Item],
    pub sword_for_sale: bool,
    /// Whether crossing terrain can wear out the item used.
    pub items_break: bool,
}

impl Mode {
    pub const ALL: [Mode; 5] = [Mode::Easy, Mode::Normal, Mode::Hard, Mode::Samurai, Mode::Test];

    pub const fn profile(self) -> ModeProfile {
        match self {
            Mode::Easy => ModeProfile {
                starting_gold: 40,
                markdown: 1.0,
                toughness: 0.1,
                kit_capacity: 7,
                starting_kit: &[],
                sword_for_sale: false,
                items_break: false,
            },
            Mode::Normal => ModeProfile {
                starting_gold: 20,
                markdown: 0.5,
                toughness: 0.4,
                kit_capacity: 7,
                starting_kit: &[],
                sword_for_sale: false,
                items_break: true,
            },
            Mode::Hard => ModeProfile {
                starting_gold: 20,
                markdown: 0.25,
                toughness: 0.75,
                kit_capacity: 7,
                starting_kit: &[],
                sword_for_sale: false,
                items_break: true,
            },
            Mode::Samurai => ModeProfile {
                starting_gold: 20,
                markdown: 0.5,
                toughness: 0.4,
                kit_capacity: 8,
                starting_kit: &[],
                sword_for_sale: true,
                items_break: true,
            },
            Mode::Test => ModeProfile {
                starting_gold: 100,
                markdown: 0.5,
                toughness: 0.4,
                kit_capacity: 7,
                starting_kit: &Item::STANDARD,
                sword_for_sale: false,
                items_break: true,
            },
        }
    }

    /// Interpret the answer to the in-game mode prompt. Anything unrecognised
    /// falls back to normal.
    pub fn from_choice(answer: &str) -> Mode {
        match answer.trim().to_lowercase().as_str() {
            "e" => Mode::Easy,
            "h" => Mode::Hard,
            "s" => Mode::Samurai,
            "test" => Mode::Test,
            _ => Mode::Normal,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Easy => "easy",
            Mode::Normal => "normal",
            Mode::Hard => "hard",
            Mode::Samurai => "samurai",
            Mode::Test => "test",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strict parsing used by the CLI and config file; accepts full names and the
/// single-letter prompt answers.
impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" => Ok(Mode::Easy),
            "normal" | "n" => Ok(Mode::Normal),
            "hard" | "h" => Ok(Mode::Hard),
            "samurai" | "s" => Ok(Mode::Samurai),
            "test" => Ok(Mode::Test),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_answers_fall_back_to_normal() {
        assert_eq!(Mode::from_choice("H"), Mode::Hard);
        assert_eq!(Mode::from_choice("e"), Mode::Easy);
        assert_eq!(Mode::from_choice("s"), Mode::Samurai);
        assert_eq!(Mode::from_choice("TEST"), Mode::Test);
        assert_eq!(Mode::from_choice("n"), Mode::Normal);
        assert_eq!(Mode::from_choice("whatever"), Mode::Normal);
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        assert_eq!("Samurai".parse::<Mode>().unwrap(), Mode::Samurai);
        assert!("legendary".parse::<Mode>().is_err());
        for mode in Mode::ALL {
            assert_eq!(mode.name().parse::<Mode>(), Ok(mode));
            assert_eq!(mode.to_string(), mode.name());
        }
    }

    #[test]
    fn profiles_match_difficulty() {
        let easy = Mode::Easy.profile();
        let hard = Mode::Hard.profile();
        assert!(easy.markdown > hard.markdown);
        assert!(easy.toughness < hard.toughness);
        assert!(!easy.items_break);
        assert!(Mode::Samurai.profile().sword_for_sale);
        assert_eq!(Mode::Samurai.profile().kit_capacity, 8);
        assert_eq!(Mode::Test.profile().starting_kit.len(), 7);
        assert_eq!(Mode::Test.profile().starting_gold, 100);
    }
}
