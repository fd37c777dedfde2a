//! The player's persistent state: gold, kit and treasure collection.

use rand::Rng;

use crate::game::items::{Item, Treasure};
use crate::game::mode::Mode;

/// Treasure collection size that wins the game.
pub const TREASURES_TO_WIN: usize = 3;

/// Result of a treasure search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreasureFind {
    /// New treasure added to the collection.
    Found(Treasure),
    /// Dust turned up; nothing is stored.
    Dust,
    /// Already in the collection, so it was left behind.
    Duplicate(Treasure),
}

#[derive(Debug, Clone)]
pub struct Hunter {
    name: String,
    gold: i32,
    kit: Vec<Item>,
    kit_capacity: usize,
    treasures: Vec<Treasure>,
    samurai: bool,
    has_sword: bool,
    searched_current_town: bool,
    gold_negative: bool,
    found_all_treasures: bool,
}

impl Hunter {
    /// Create a hunter equipped according to `mode`.
    pub fn new(name: impl Into<String>, mode: Mode) -> Self {
        let profile = mode.profile();
        let mut hunter = Hunter {
            name: name.into(),
            gold: profile.starting_gold,
            kit: Vec::with_capacity(profile.kit_capacity),
            kit_capacity: profile.kit_capacity,
            treasures: Vec::with_capacity(TREASURES_TO_WIN),
            samurai: mode == Mode::Samurai,
            has_sword: false,
            searched_current_town: false,
            gold_negative: false,
            found_all_treasures: false,
        };
        for &item in profile.starting_kit {
            hunter.add_item(item);
        }
        hunter
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    pub fn kit(&self) -> &[Item] {
        &self.kit
    }

    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }

    pub fn has_sword(&self) -> bool {
        self.has_sword
    }

    pub fn is_gold_negative(&self) -> bool {
        self.gold_negative
    }

    pub fn has_found_all_treasures(&self) -> bool {
        self.found_all_treasures
    }

    pub fn has_searched_current_town(&self) -> bool {
        self.searched_current_town
    }

    pub fn set_searched_current_town(&mut self, searched: bool) {
        self.searched_current_town = searched;
    }

    pub fn has_item(&self, item: Item) -> bool {
        self.kit.contains(&item)
    }

    pub fn has_treasure(&self, treasure: Treasure) -> bool {
        self.treasures.contains(&treasure)
    }

    /// Add `delta` to the purse; a negative balance marks the game as lost.
    pub fn change_gold(&mut self, delta: i32) {
        self.gold += delta;
        if self.gold < 0 {
            self.gold_negative = true;
        }
    }

    /// Buy `item` for `cost` gold.
    ///
    /// Refused when the item is already owned, the kit is full, the goods are
    /// unpriced, or the purse is short. In samurai mode the sword is free, and
    /// once carried every later item is handed over for nothing.
    pub fn buy_item(&mut self, item: Item, cost: i32) -> bool {
        if self.has_item(item) || self.kit.len() >= self.kit_capacity {
            return false;
        }
        if item == Item::Sword {
            if !self.samurai {
                return false;
            }
            self.has_sword = true;
            return self.add_item(item);
        }
        if cost <= 0 {
            return false;
        }
        if self.has_sword {
            return self.add_item(item);
        }
        if self.gold < cost {
            return false;
        }
        self.gold -= cost;
        self.add_item(item)
    }

    /// Sell `item` for `price` gold. Fails if it is not in the kit or the shop
    /// offers nothing for it.
    pub fn sell_item(&mut self, item: Item, price: i32) -> bool {
        if price <= 0 || !self.has_item(item) {
            return false;
        }
        self.gold += price;
        self.remove_item(item)
    }

    /// Remove `item` from the kit, returning whether it was there.
    pub fn remove_item(&mut self, item: Item) -> bool {
        match self.kit.iter().position(|&owned| owned == item) {
            Some(idx) => {
                self.kit.remove(idx);
                true
            }
            None => false,
        }
    }

    fn add_item(&mut self, item: Item) -> bool {
        if self.has_item(item) || self.kit.len() >= self.kit_capacity {
            return false;
        }
        self.kit.push(item);
        true
    }

    /// Search the current town: marks it searched and draws one treasure.
    pub fn add_treasure<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TreasureFind {
        let drawn = Treasure::draw(rng);
        self.searched_current_town = true;
        self.record_treasure(drawn)
    }

    /// Apply a drawn treasure to the collection.
    pub fn record_treasure(&mut self, treasure: Treasure) -> TreasureFind {
        let find = if !treasure.is_collectible() {
            TreasureFind::Dust
        } else if self.has_treasure(treasure) {
            TreasureFind::Duplicate(treasure)
        } else {
            self.treasures.push(treasure);
            TreasureFind::Found(treasure)
        };
        if self.treasures.len() >= TREASURES_TO_WIN {
            self.found_all_treasures = true;
        }
        find
    }

    /// Space-separated kit listing.
    pub fn inventory(&self) -> String {
        self.kit
            .iter()
            .map(|item| item.name())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn info_string(&self) -> String {
        let mut s = format!("{} has {} gold", self.name, self.gold);
        if !self.kit.is_empty() {
            s.push_str(" and ");
            s.push_str(&self.inventory());
        }
        s
    }

    pub fn treasure_info(&self) -> String {
        if self.treasures.is_empty() {
            "Treasures found: none".to_string()
        } else {
            let list = self
                .treasures
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            format!("Treasures found: {}", list)
        }
    }
}
