//! A single town and the things a hunter can do there.
//!
//! Towns are throwaway: each move builds a fresh one with its own terrain,
//! toughness and shop, and the per-town flags (dug, news) go with it.

use std::io;

use log::debug;
use rand::Rng;

use crate::game::hunter::{Hunter, TreasureFind};
use crate::game::io::{InputSource, OutputSink};
use crate::game::items::Item;
use crate::game::shop::{Shop, ShopAction};
use crate::game::terrain::Terrain;

/// Brawl threshold in a tough town.
pub const TOUGH_TROUBLE_THRESHOLD: f64 = 0.66;
/// Brawl threshold in a quiet town.
pub const MILD_TROUBLE_THRESHOLD: f64 = 0.33;
/// Chance that the item used to cross terrain wears out.
pub const ITEM_BREAK_CHANCE: f64 = 0.5;
/// Chance that a dig turns up gold.
pub const DIG_SUCCESS_CHANCE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrawlOutcome {
    NoTrouble,
    Won { gold: i32, by_sword: bool },
    Lost { gold: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigOutcome {
    AlreadyDug,
    NoShovel,
    Struck(i32),
    Dirt,
}

#[derive(Debug, Clone)]
pub struct Town {
    shop: Shop,
    terrain: Terrain,
    tough: bool,
    dug: bool,
    latest_news: String,
}

impl Town {
    /// Build a town with random terrain; `toughness` is the chance it is a rough one.
    pub fn new<R: Rng + ?Sized>(shop: Shop, toughness: f64, rng: &mut R) -> Self {
        let terrain = Terrain::random(rng);
        let tough = rng.gen::<f64>() < toughness;
        debug!("town: terrain={} tough={}", terrain.name(), tough);
        Town::with_terrain(shop, terrain, tough)
    }

    pub fn with_terrain(shop: Shop, terrain: Terrain, tough: bool) -> Self {
        Town {
            shop,
            terrain,
            tough,
            dug: false,
            latest_news: String::new(),
        }
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn is_tough(&self) -> bool {
        self.tough
    }

    pub fn has_dug(&self) -> bool {
        self.dug
    }

    pub fn latest_news(&self) -> &str {
        &self.latest_news
    }

    pub fn hunter_arrives(&mut self, hunter: &Hunter) {
        let mood = if self.tough {
            "It's pretty rough around here, so watch yourself."
        } else {
            "We're just a sleepy little town with mild mannered folk."
        };
        self.latest_news = format!("Welcome to town, {}.\n{}", hunter.name(), mood);
    }

    /// Try to cross the surrounding terrain. Outside easy mode the item used
    /// may wear out on the way.
    pub fn leave_town<R: Rng + ?Sized>(&mut self, hunter: &mut Hunter, items_break: bool, rng: &mut R) -> bool {
        let item = self.terrain.needed_item();
        if !self.terrain.can_cross(hunter) {
            self.latest_news = format!(
                "You can't leave town, {}. You don't have a {}.",
                hunter.name(),
                item.label()
            );
            return false;
        }
        self.latest_news = format!(
            "You used your {} to cross the {}.",
            item.name(),
            self.terrain.name()
        );
        if items_break && rng.gen::<f64>() < ITEM_BREAK_CHANCE {
            hunter.remove_item(item);
            debug!("town: {} lost their {} crossing the {}", hunter.name(), item, self.terrain.name());
            self.latest_news
                .push_str(&format!("\nUnfortunately, you lost your {}", item.name()));
        }
        true
    }

    pub fn enter_shop<I, O>(
        &mut self,
        hunter: &mut Hunter,
        action: ShopAction,
        input: &mut I,
        output: &mut O,
    ) -> io::Result<()>
    where
        I: InputSource + ?Sized,
        O: OutputSink + ?Sized,
    {
        self.latest_news = self.shop.enter(hunter, action, input, output)?;
        Ok(())
    }

    /// Search the town once. Returns `None` if it was already searched.
    pub fn hunt_for_treasure<R: Rng + ?Sized>(&mut self, hunter: &mut Hunter, rng: &mut R) -> Option<TreasureFind> {
        if hunter.has_searched_current_town() {
            return None;
        }
        Some(hunter.add_treasure(rng))
    }

    /// Pick a fight. Tough towns raise the bar for both finding trouble and
    /// winning it; a sword always wins.
    pub fn look_for_trouble<R: Rng + ?Sized>(&mut self, hunter: &mut Hunter, rng: &mut R) -> BrawlOutcome {
        let threshold = if self.tough {
            TOUGH_TROUBLE_THRESHOLD
        } else {
            MILD_TROUBLE_THRESHOLD
        };
        if rng.gen::<f64>() < threshold {
            return BrawlOutcome::NoTrouble;
        }
        let stake = rng.gen_range(1..=10);
        let won = rng.gen::<f64>() > threshold;
        let outcome = if hunter.has_sword() || won {
            self.latest_news = "You won a brawl".to_string();
            hunter.change_gold(stake);
            BrawlOutcome::Won {
                gold: stake,
                by_sword: hunter.has_sword(),
            }
        } else {
            self.latest_news = "You lost a brawl".to_string();
            hunter.change_gold(-stake);
            BrawlOutcome::Lost { gold: stake }
        };
        debug!("town: brawl {:?}, {} has {} gold", outcome, hunter.name(), hunter.gold());
        outcome
    }

    /// Dig once per town with a shovel.
    pub fn dig_for_gold<R: Rng + ?Sized>(&mut self, hunter: &mut Hunter, rng: &mut R) -> DigOutcome {
        let outcome = if self.dug {
            DigOutcome::AlreadyDug
        } else if !hunter.has_item(Item::Shovel) {
            DigOutcome::NoShovel
        } else {
            self.dug = true;
            if rng.gen_bool(DIG_SUCCESS_CHANCE) {
                let amount = rng.gen_range(1..=20);
                hunter.change_gold(amount);
                DigOutcome::Struck(amount)
            } else {
                DigOutcome::Dirt
            }
        };
        self.latest_news = match outcome {
            DigOutcome::AlreadyDug => "You already dug for gold in this town.".to_string(),
            DigOutcome::NoShovel => "You can't dig for gold without a shovel.".to_string(),
            DigOutcome::Struck(amount) => format!("You dug up {} gold!", amount),
            DigOutcome::Dirt => "You dug but only found dirt.".to_string(),
        };
        outcome
    }

    pub fn info_string(&self) -> String {
        format!(
            "This nice little town is surrounded by {}.",
            self.terrain.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::mode::Mode;
    use crate::game::terrain::TERRAINS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn town(tough: bool) -> Town {
        // Mountains: rope to cross
        Town::with_terrain(Shop::new(Mode::Normal), TERRAINS[0], tough)
    }

    #[test]
    fn arrival_news_reflects_toughness() {
        let hunter = Hunter::new("Ahab", Mode::Normal);
        let mut rough = town(true);
        rough.hunter_arrives(&hunter);
        assert!(rough.latest_news().starts_with("Welcome to town, Ahab."));
        assert!(rough.latest_news().contains("pretty rough"));
        let mut sleepy = town(false);
        sleepy.hunter_arrives(&hunter);
        assert!(sleepy.latest_news().contains("sleepy little town"));
        assert_eq!(
            sleepy.info_string(),
            "This nice little town is surrounded by Mountains."
        );
    }

    #[test]
    fn leaving_requires_the_terrain_item() {
        let mut t = town(false);
        let mut hunter = Hunter::new("Ahab", Mode::Normal);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(!t.leave_town(&mut hunter, true, &mut rng));
        assert!(t.latest_news().contains("You don't have a Rope"));
        hunter.buy_item(Item::Rope, 4);
        assert!(t.leave_town(&mut hunter, false, &mut rng));
        assert!(hunter.has_item(Item::Rope), "easy crossings never break items");
    }

    #[test]
    fn item_breaks_exactly_when_roll_is_below_half() {
        for seed in 0..200u64 {
            let expected_break = StdRng::seed_from_u64(seed).gen::<f64>() < ITEM_BREAK_CHANCE;
            let mut t = town(false);
            let mut hunter = Hunter::new("Ahab", Mode::Normal);
            hunter.buy_item(Item::Rope, 4);
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(t.leave_town(&mut hunter, true, &mut rng));
            assert_eq!(!hunter.has_item(Item::Rope), expected_break, "seed {}", seed);
            assert_eq!(t.latest_news().contains("lost your rope"), expected_break);
        }
    }

    #[test]
    fn treasure_search_once_per_town() {
        let mut t = town(false);
        let mut hunter = Hunter::new("Ahab", Mode::Normal);
        let mut rng = StdRng::seed_from_u64(8);
        assert!(t.hunt_for_treasure(&mut hunter, &mut rng).is_some());
        let size = hunter.treasures().len();
        assert!(t.hunt_for_treasure(&mut hunter, &mut rng).is_none());
        assert_eq!(hunter.treasures().len(), size);
    }

    #[test]
    fn brawls_move_gold_by_the_stake() {
        for seed in 0..300u64 {
            for tough in [true, false] {
                let mut t = town(tough);
                let mut hunter = Hunter::new("Ahab", Mode::Normal);
                let mut rng = StdRng::seed_from_u64(seed);
                match t.look_for_trouble(&mut hunter, &mut rng) {
                    BrawlOutcome::NoTrouble => assert_eq!(hunter.gold(), 20),
                    BrawlOutcome::Won { gold, by_sword } => {
                        assert!((1..=10).contains(&gold));
                        assert!(!by_sword);
                        assert_eq!(hunter.gold(), 20 + gold);
                        assert_eq!(t.latest_news(), "You won a brawl");
                    }
                    BrawlOutcome::Lost { gold } => {
                        assert!((1..=10).contains(&gold));
                        assert_eq!(hunter.gold(), 20 - gold);
                        assert_eq!(t.latest_news(), "You lost a brawl");
                    }
                }
            }
        }
    }

    #[test]
    fn no_trouble_when_first_roll_below_threshold() {
        for seed in 0..200u64 {
            let first = StdRng::seed_from_u64(seed).gen::<f64>();
            let mut t = town(true);
            let mut hunter = Hunter::new("Ahab", Mode::Normal);
            let outcome = t.look_for_trouble(&mut hunter, &mut StdRng::seed_from_u64(seed));
            assert_eq!(
                outcome == BrawlOutcome::NoTrouble,
                first < TOUGH_TROUBLE_THRESHOLD,
                "seed {}",
                seed
            );
        }
    }

    #[test]
    fn sword_always_wins() {
        for seed in 0..100u64 {
            let mut t = town(true);
            let mut hunter = Hunter::new("Musashi", Mode::Samurai);
            hunter.buy_item(Item::Sword, 0);
            let outcome = t.look_for_trouble(&mut hunter, &mut StdRng::seed_from_u64(seed));
            assert!(!matches!(outcome, BrawlOutcome::Lost { .. }));
            if let BrawlOutcome::Won { by_sword, .. } = outcome {
                assert!(by_sword);
            }
        }
    }

    #[test]
    fn dig_twice_in_one_town() {
        let mut t = town(false);
        let mut hunter = Hunter::new("Ahab", Mode::Normal);
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(t.dig_for_gold(&mut hunter, &mut rng), DigOutcome::NoShovel);
        assert!(!t.has_dug());

        hunter.buy_item(Item::Shovel, 8);
        let gold_before = hunter.gold();
        match t.dig_for_gold(&mut hunter, &mut rng) {
            DigOutcome::Struck(amount) => {
                assert!((1..=20).contains(&amount));
                assert_eq!(hunter.gold(), gold_before + amount);
            }
            DigOutcome::Dirt => assert_eq!(hunter.gold(), gold_before),
            other => panic!("unexpected first dig: {:?}", other),
        }
        assert!(t.has_dug());

        let gold_after = hunter.gold();
        assert_eq!(t.dig_for_gold(&mut hunter, &mut rng), DigOutcome::AlreadyDug);
        assert_eq!(hunter.gold(), gold_after);
        assert_eq!(t.latest_news(), "You already dug for gold in this town.");
    }

    #[test]
    fn new_town_uses_toughness() {
        let mut rng = StdRng::seed_from_u64(10);
        let always = Town::new(Shop::new(Mode::Normal), 1.0, &mut rng);
        assert!(always.is_tough());
        let never = Town::new(Shop::new(Mode::Normal), 0.0, &mut rng);
        assert!(!never.is_tough());
    }
}
