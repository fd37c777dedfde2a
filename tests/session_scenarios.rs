mod common;

use common::{find_seed, ocean_town, session_with};
use treasurehunt::game::{BrawlOutcome, GameOutcome, Hunter, Item, Mode, Treasure};

#[test]
fn losing_a_brawl_into_debt_ends_the_game() {
    let mode = Mode::Normal;
    let mut broke = Hunter::new("Ahab", mode);
    broke.change_gold(-20);
    assert_eq!(broke.gold(), 0);

    // Find a seed where the brawl is lost for exactly one gold.
    let seed = find_seed(50_000, |rng| {
        let mut town = ocean_town(mode, false);
        let mut hunter = broke.clone();
        town.look_for_trouble(&mut hunter, rng) == BrawlOutcome::Lost { gold: 1 }
    });

    let mut session = session_with(broke, ocean_town(mode, false), mode, seed, &["l", "x"]);
    assert_eq!(session.run().unwrap(), GameOutcome::Lost);
    assert_eq!(session.hunter().gold(), -1);
    assert!(session.output().contains("You lost the brawl and pay 1 gold."));
    assert!(session.output().contains("Game Over!"));
    // The loop stopped before reading the exit command.
    assert!(!session.output().contains("Fare thee well"));
    assert_eq!(session.summary().outcome, Some(GameOutcome::Lost));
}

#[test]
fn completing_the_collection_wins() {
    let mode = Mode::Normal;
    let mut hunter = Hunter::new("Ahab", mode);
    hunter.record_treasure(Treasure::Crown);
    hunter.record_treasure(Treasure::Trophy);

    let seed = find_seed(1_000, |rng| Treasure::draw(rng) == Treasure::Gem);

    let mut session = session_with(hunter, ocean_town(mode, false), mode, seed, &["h", "x"]);
    assert_eq!(session.run().unwrap(), GameOutcome::Won);
    assert!(session.output().contains("You found a Gem!"));
    assert!(session
        .output()
        .contains("you have found the last of the three treasures, you win!"));
    assert_eq!(
        session.hunter().treasures(),
        &[Treasure::Crown, Treasure::Trophy, Treasure::Gem]
    );
    assert!(!session.output().contains("Fare thee well"));
}

#[test]
fn duplicate_treasure_is_left_behind() {
    let mode = Mode::Normal;
    let mut hunter = Hunter::new("Ahab", mode);
    hunter.record_treasure(Treasure::Crown);

    let seed = find_seed(1_000, |rng| Treasure::draw(rng) == Treasure::Crown);
    let mut session = session_with(hunter, ocean_town(mode, false), mode, seed, &["h", "h", "x"]);
    assert_eq!(session.run().unwrap(), GameOutcome::Quit);
    assert!(session
        .output()
        .contains("You already have Crown in your collection so you don't collect it."));
    assert!(session.output().contains("You have already searched this town."));
    assert_eq!(session.hunter().treasures().len(), 1);
}

#[test]
fn digging_twice_in_one_town() {
    let mode = Mode::Normal;
    let mut hunter = Hunter::new("Ahab", mode);
    assert!(hunter.buy_item(Item::Shovel, 8));

    let mut session = session_with(hunter, ocean_town(mode, false), mode, 21, &["d", "d", "x"]);
    session.process_choice("d").unwrap();
    assert!(session.town().has_dug());
    let gold = session.hunter().gold();
    assert!(gold == 12 || (13..=32).contains(&gold));

    session.process_choice("d").unwrap();
    assert_eq!(session.hunter().gold(), gold);
    assert_eq!(
        session.town().latest_news(),
        "You already dug for gold in this town."
    );
    assert!(session.output().contains("You already dug for gold in this town."));
}

#[test]
fn crossing_outside_easy_mode_can_break_the_boat() {
    let mode = Mode::Hard;
    let mut hunter = Hunter::new("Ahab", mode);
    assert!(hunter.buy_item(Item::Boat, 20));

    let breaking = find_seed(1_000, |rng| rand::Rng::gen::<f64>(rng) < 0.5);
    let mut session = session_with(hunter.clone(), ocean_town(mode, false), mode, breaking, &[]);
    session.process_choice("m").unwrap();
    assert!(!session.hunter().has_item(Item::Boat));
    assert!(session.output().contains("Unfortunately, you lost your boat"));
    assert_eq!(session.summary().towns_visited, 2);

    let holding = find_seed(1_000, |rng| rand::Rng::gen::<f64>(rng) >= 0.5);
    let mut session = session_with(hunter, ocean_town(mode, false), mode, holding, &[]);
    session.process_choice("m").unwrap();
    assert!(session.hunter().has_item(Item::Boat));
}

#[test]
fn buying_and_selling_through_the_menu() {
    let mode = Mode::Normal;
    let mut session = session_with(
        Hunter::new("Ahab", mode),
        ocean_town(mode, false),
        mode,
        3,
        &["B", "boat", "y", "b", "boat", "y", "s", "boat", "y", "x"],
    );
    assert_eq!(session.run().unwrap(), GameOutcome::Quit);
    let text = session.output().text();
    assert!(text.contains("Ye' got yerself a boat. Come again soon."));
    assert!(text.contains("either you don't have enough gold or you've already got one of those!"));
    assert!(text.contains("It'll get you 10 gold. Sell it (y/n)?: "));
    assert!(text.contains("You left the shop"));
    assert_eq!(session.hunter().gold(), 10);
    assert!(session.hunter().kit().is_empty());
}

#[test]
fn summary_serializes_to_json() {
    let mode = Mode::Test;
    let mut session = session_with(
        Hunter::new("Tester", mode),
        ocean_town(mode, false),
        mode,
        9,
        &["x"],
    );
    session.run().unwrap();
    let json = serde_json::to_value(session.summary()).unwrap();
    assert_eq!(json["hunter"], "Tester");
    assert_eq!(json["mode"], "test");
    assert_eq!(json["outcome"], "quit");
    assert_eq!(json["gold"], 100);
    assert_eq!(json["kit"].as_array().unwrap().len(), 7);
    assert_eq!(json["towns_visited"], 1);
}
