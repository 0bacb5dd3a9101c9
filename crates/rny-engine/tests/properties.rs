//! Properties that hold for any sequence of player commands.

use proptest::prelude::*;
use std::collections::BTreeSet;

use rny_engine::{EngineConfig, ItemId, LocationId, Session};

const COMMANDS: &[&str] = &[
    "",
    "look",
    "inventory",
    "north",
    "south",
    "east",
    "west",
    "up",
    "down",
    "out",
    "enter store",
    "enter dark tunnel",
    "enter scrapyard",
    "enter bunker",
    "go store",
    "take bicycle",
    "take cheez-ees",
    "take book",
    "take crank",
    "take motor",
    "take car battery",
    "take drive belt",
    "take jumper cables",
    "take wires",
    "drop bicycle",
    "drop cheez-ees",
    "drop book",
    "ride bicycle",
    "search shelves",
    "kick machine",
    "open can",
    "drink can",
    "trade",
    "throw cheez-ees",
    "yes",
    "no",
    "build generator",
    "attach motor to bicycle",
    "pedal bike",
    "turn on computer",
    "insert floppy",
    "save",
    "score",
    "hint",
    "dance",
];

fn commands() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(COMMANDS), 0..80)
}

/// Items carried or lying somewhere on the map.
fn placed_items(session: &Session) -> BTreeSet<ItemId> {
    let mut items = session.player().inventory.clone();
    for location in session.world().locations() {
        items.extend(location.items.iter().copied());
    }
    items
}

proptest! {
    #[test]
    fn items_are_never_in_two_places(commands in commands()) {
        let mut session = Session::new(EngineConfig::default()).unwrap();
        for command in commands {
            session.process_command(command);
            prop_assert!(session.world().validate_items(&session.player().inventory).is_ok());
        }
    }

    #[test]
    fn items_only_leave_play_when_consumed(commands in commands()) {
        let mut session = Session::new(EngineConfig::default()).unwrap();
        let mut seen: BTreeSet<ItemId> = placed_items(&session);
        for command in commands {
            session.process_command(command);
            seen.extend(placed_items(&session));

            let placed = placed_items(&session);
            let flags = session.player().flags;
            for item in &seen {
                let consumed = match item {
                    ItemId::CheezEes => flags.rat_people_distracted,
                    ItemId::EnergyDrink => flags.floppy_disk,
                    _ => false,
                };
                prop_assert!(placed.contains(item) || consumed, "{item} vanished");
            }
        }
    }

    #[test]
    fn score_only_grows_and_matches_its_log(commands in commands()) {
        let mut session = Session::new(EngineConfig::default()).unwrap();
        for command in commands {
            let before = session.score().clone();
            session.process_command(command);
            let after = session.score();

            prop_assert!(after.total() >= before.total());
            prop_assert!(after.log().len() >= before.log().len());
            prop_assert_eq!(
                after.total() > before.total(),
                after.log().len() > before.log().len()
            );
            let sum: u32 = after.log().iter().map(|e| e.delta).sum();
            prop_assert_eq!(sum, after.total());
        }
    }

    #[test]
    fn every_command_is_one_turn(commands in commands(), max_turns in 1u32..40) {
        let mut session =
            Session::new(EngineConfig::default().with_max_turns(max_turns)).unwrap();
        for command in commands {
            let before = session.turns();
            let was_over = session.is_game_over();
            session.process_command(command);

            let expected = if was_over || command.trim().is_empty() {
                before
            } else {
                before + 1
            };
            prop_assert_eq!(session.turns(), expected);
            prop_assert!(session.turns() <= max_turns);
        }
    }

    #[test]
    fn dark_tunnel_needs_protection(commands in commands()) {
        let mut session = Session::new(EngineConfig::default()).unwrap();
        for command in commands {
            let from = session.player().location;
            session.process_command(command);
            let player = session.player();
            if player.location == LocationId::DarkTunnel && from != LocationId::DarkTunnel {
                prop_assert!(
                    player.flags.riding_bicycle || player.flags.rat_people_distracted
                );
            }
        }
    }

    #[test]
    fn describe_never_changes_state(commands in commands()) {
        let mut session = Session::new(EngineConfig::default()).unwrap();
        for command in commands {
            session.process_command(command);
        }
        let before = session.snapshot();
        let first = session.describe();
        prop_assert_eq!(first, session.describe());
        prop_assert_eq!(before, session.snapshot());
    }
}
