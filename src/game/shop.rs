//! The town shop: fixed prices, mode-dependent markdown and stock.
//!
//! Every town has its own shop but all of them share one price list. The
//! markdown (what fraction of the price is paid back on a sale) and whether
//! the sword is stocked come from the difficulty [`Mode`].

use std::io;

use log::debug;

use crate::game::hunter::Hunter;
use crate::game::io::{Emphasis, InputSource, OutputSink};
use crate::game::items::Item;
use crate::game::mode::Mode;
use crate::validation::normalize_answer;

/// Buy price of every item, in display order.
const PRICE_LIST: [(Item, i32); 8] = [
    (Item::Water, 2),
    (Item::Rope, 4),
    (Item::Machete, 6),
    (Item::Shovel, 8),
    (Item::Boots, 10),
    (Item::Horse, 12),
    (Item::Boat, 20),
    (Item::Sword, 0),
];

/// News line left behind after any visit.
pub const LEFT_SHOP: &str = "You left the shop";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopAction {
    Buy,
    Sell,
}

#[derive(Debug, Clone)]
pub struct Shop {
    markdown: f64,
    sword_for_sale: bool,
    /// Purchases made here while the hunter carried the sword.
    free_handouts: u32,
}

impl Shop {
    pub fn new(mode: Mode) -> Self {
        let profile = mode.profile();
        Shop {
            markdown: profile.markdown,
            sword_for_sale: profile.sword_for_sale,
            free_handouts: 0,
        }
    }

    pub fn markdown(&self) -> f64 {
        self.markdown
    }

    /// List price of an item.
    pub fn price(item: Item) -> i32 {
        PRICE_LIST
            .iter()
            .find(|(i, _)| *i == item)
            .map(|(_, cost)| *cost)
            .unwrap_or(0)
    }

    /// Price of the named item, or 0 if the name is not something we sell.
    pub fn get_cost_of_item(&self, name: &str) -> i32 {
        name.parse::<Item>().map(Shop::price).unwrap_or(0)
    }

    /// What the shop pays for the named item: list price times markdown, floored.
    pub fn get_buy_back_cost(&self, name: &str) -> i32 {
        (self.get_cost_of_item(name) as f64 * self.markdown).floor() as i32
    }

    /// Whether the named item is stocked in this mode.
    pub fn valid_item(&self, name: &str) -> bool {
        match name.parse::<Item>() {
            Ok(Item::Sword) => self.sword_for_sale,
            Ok(_) => true,
            Err(_) => false,
        }
    }

    /// Price listing, one item per line.
    pub fn inventory(&self) -> String {
        PRICE_LIST
            .iter()
            .filter(|(item, _)| *item != Item::Sword || self.sword_for_sale)
            .map(|(item, cost)| format!("{}: {} gold\n", item.label(), cost))
            .collect()
    }

    /// Run one interactive buy or sell visit. Returns the news line for the town.
    pub fn enter<I, O>(
        &mut self,
        hunter: &mut Hunter,
        action: ShopAction,
        input: &mut I,
        output: &mut O,
    ) -> io::Result<String>
    where
        I: InputSource + ?Sized,
        O: OutputSink + ?Sized,
    {
        match action {
            ShopAction::Buy => self.buy_visit(hunter, input, output)?,
            ShopAction::Sell => self.sell_visit(hunter, input, output)?,
        }
        Ok(LEFT_SHOP.to_string())
    }

    fn buy_visit<I, O>(&mut self, hunter: &mut Hunter, input: &mut I, output: &mut O) -> io::Result<()>
    where
        I: InputSource + ?Sized,
        O: OutputSink + ?Sized,
    {
        output.emit(
            "\nWelcome to the shop! We have the finest wares in town.",
            Emphasis::Plain,
        );
        output.emit("\nCurrently we have the following items: ", Emphasis::Plain);
        output.emit(&format!("\n{}", self.inventory()), Emphasis::Plain);
        let wanted = ask(input, output, "\nWhat're you lookin' to buy?: ")?;

        let item = match wanted.parse::<Item>() {
            Ok(item) if self.valid_item(&wanted) => item,
            _ => {
                output.emit("\nWe ain't got none of those.", Emphasis::Warning);
                return Ok(());
            }
        };

        // A sword-carrying hunter is not asked to pay.
        if hunter.has_sword() {
            self.buy_item(hunter, item, output);
            return Ok(());
        }
        let cost = Shop::price(item);
        let prompt = format!("\nIt'll cost you {} gold. Buy it (y/n)?: ", cost);
        if ask(input, output, &prompt)? == "y" {
            self.buy_item(hunter, item, output);
        }
        Ok(())
    }

    fn sell_visit<I, O>(&mut self, hunter: &mut Hunter, input: &mut I, output: &mut O) -> io::Result<()>
    where
        I: InputSource + ?Sized,
        O: OutputSink + ?Sized,
    {
        output.emit("What're you lookin' to sell? ", Emphasis::Plain);
        let prompt = format!(
            "\nYou currently have the following items: {}",
            hunter.inventory()
        );
        let offered = ask(input, output, &prompt)?;
        let price = self.get_buy_back_cost(&offered);
        let item = match offered.parse::<Item>() {
            Ok(item) if price > 0 => item,
            _ => {
                output.emit("\nWe don't want none of those.", Emphasis::Warning);
                return Ok(());
            }
        };
        let prompt = format!("\nIt'll get you {} gold. Sell it (y/n)?: ", price);
        if ask(input, output, &prompt)? == "y" {
            self.sell_item(hunter, item, output);
        }
        Ok(())
    }

    /// Hand `item` to the hunter at list price, reporting the result.
    pub fn buy_item<O: OutputSink + ?Sized>(&mut self, hunter: &mut Hunter, item: Item, output: &mut O) -> bool {
        let cost = Shop::price(item);
        if !hunter.buy_item(item, cost) {
            output.emit(
                "\nHmm, either you don't have enough gold or you've already got one of those!",
                Emphasis::Warning,
            );
            return false;
        }
        debug!("shop: {} bought {} (gold now {})", hunter.name(), item, hunter.gold());
        // The shopkeeper only notices the sword after the first sale in each shop.
        if hunter.has_sword() && self.free_handouts >= 1 {
            output.emit(
                "\nThe sword intimidates the shopkeeper and he gives you the item freely",
                Emphasis::Success,
            );
        } else {
            if hunter.has_sword() {
                self.free_handouts += 1;
            }
            output.emit(
                &format!("\nYe' got yerself a {}. Come again soon.", item),
                Emphasis::Success,
            );
        }
        true
    }

    /// Buy `item` back from the hunter at the marked-down price.
    pub fn sell_item<O: OutputSink + ?Sized>(&mut self, hunter: &mut Hunter, item: Item, output: &mut O) -> bool {
        let price = self.get_buy_back_cost(item.name());
        if hunter.sell_item(item, price) {
            debug!("shop: {} sold {} for {}", hunter.name(), item, price);
            output.emit("\nPleasure doin' business with you.", Emphasis::Plain);
            true
        } else {
            output.emit("\nStop stringin' me along!", Emphasis::Plain);
            false
        }
    }
}

/// Prompt and read one normalised answer; end of input reads as empty.
fn ask<I, O>(input: &mut I, output: &mut O, prompt: &str) -> io::Result<String>
where
    I: InputSource + ?Sized,
    O: OutputSink + ?Sized,
{
    output.emit(prompt, Emphasis::Prompt);
    Ok(input
        .next_line()?
        .map(|line| normalize_answer(&line))
        .unwrap_or_default())
}
