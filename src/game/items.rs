//! Shop goods and treasures.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::ParseItemError;

/// Everything a hunter can carry in their kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Item {
    Water,
    Rope,
    Machete,
    Shovel,
    Boots,
    Horse,
    Boat,
    Sword,
}

impl Item {
    /// Goods stocked by every shop, cheapest first.
    pub const STANDARD: [Item; 7] = [
        Item::Water,
        Item::Rope,
        Item::Machete,
        Item::Shovel,
        Item::Boots,
        Item::Horse,
        Item::Boat,
    ];

    /// Lowercase name as typed by the player and shown in the kit.
    pub fn name(self) -> &'static str {
        match self {
            Item::Water => "water",
            Item::Rope => "rope",
            Item::Machete => "machete",
            Item::Shovel => "shovel",
            Item::Boots => "boots",
            Item::Horse => "horse",
            Item::Boat => "boat",
            Item::Sword => "sword",
        }
    }

    /// Capitalised name for price lists and terrain messages.
    pub fn label(self) -> &'static str {
        match self {
            Item::Water => "Water",
            Item::Rope => "Rope",
            Item::Machete => "Machete",
            Item::Shovel => "Shovel",
            Item::Boots => "Boots",
            Item::Horse => "Horse",
            Item::Boat => "Boat",
            Item::Sword => "Sword",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Item {
    type Err = ParseItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Item::STANDARD
            .iter()
            .chain(std::iter::once(&Item::Sword))
            .copied()
            .find(|item| item.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseItemError(wanted.to_string()))
    }
}

/// What a treasure search can turn up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Treasure {
    Crown,
    Trophy,
    Gem,
    Dust,
}

impl Treasure {
    pub const ALL: [Treasure; 4] = [
        Treasure::Crown,
        Treasure::Trophy,
        Treasure::Gem,
        Treasure::Dust,
    ];

    /// Dust is found but never kept.
    pub fn is_collectible(self) -> bool {
        !matches!(self, Treasure::Dust)
    }

    /// Draw one treasure uniformly at random.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Treasure {
        Treasure::ALL[rng.gen_range(0..Treasure::ALL.len())]
    }
}

impl fmt::Display for Treasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Treasure::Crown => "Crown",
            Treasure::Trophy => "Trophy",
            Treasure::Gem => "Gem",
            Treasure::Dust => "Dust",
        };
        f.write_str(s)
    }
}
