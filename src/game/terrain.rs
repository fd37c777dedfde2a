//! Terrain surrounding a town and the item needed to cross it.

use rand::Rng;

use crate::game::hunter::Hunter;
use crate::game::items::Item;

/// The obstacle around a town and the item needed to get past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terrain {
    name: &'static str,
    needed_item: Item,
}

/// Every terrain a town can be surrounded by; drawn uniformly.
pub const TERRAINS: [Terrain; 6] = [
    Terrain::new("Mountains", Item::Rope),
    Terrain::new("Ocean", Item::Boat),
    Terrain::new("Plains", Item::Horse),
    Terrain::new("Desert", Item::Water),
    Terrain::new("Jungle", Item::Machete),
    Terrain::new("Marsh", Item::Boots),
];

impl Terrain {
    pub const fn new(name: &'static str, needed_item: Item) -> Self {
        Terrain { name, needed_item }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Terrain {
        TERRAINS[rng.gen_range(0..TERRAINS.len())]
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn needed_item(&self) -> Item {
        self.needed_item
    }

    pub fn can_cross(&self, hunter: &Hunter) -> bool {
        hunter.has_item(self.needed_item)
    }

    pub fn info_string(&self) -> String {
        format!(
            "To cross the {} you'll need a {}.",
            self.name,
            self.needed_item.label()
        )
    }
}
