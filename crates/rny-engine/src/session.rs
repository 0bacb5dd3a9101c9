//! Adventure session management.
//!
//! A [`Session`] is one player's play-through. Every command goes through
//! [`Session::process_command`], which counts the turn, enforces the turn
//! limit, and runs the phase state machine:
//!
//! ```text
//! Exploring --(dark tunnel, unprotected, has cheez-ees)--> Encounter
//! Encounter --(throw cheez-ees)--> Exploring
//! Encounter --(anything else)--> GameOver
//! Exploring --(win / quit / turn limit / overwhelmed)--> GameOver
//! ```

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::item::ItemId;
use crate::location::{Location, LocationId};
use crate::parser::{Command, ExitMatch, Verb, parse_command, resolve_exit, suggest_verb};
use crate::player::PlayerState;
use crate::response::{Response, ResponseKind};
use crate::score::Score;
use crate::world::{START, World};

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    /// The computer booted.
    Won,
    /// The player quit.
    Quit,
    /// The turn limit was reached.
    TimeUp,
    /// The rat people got the player.
    Overwhelmed,
}

/// Where the session is in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Free exploration.
    Exploring,
    /// Surrounded by rat people on the way into `destination`.
    Encounter {
        /// Where the player was heading.
        destination: LocationId,
    },
    /// Terminal.
    GameOver(Ending),
}

/// Serializable copy of a session, produced after the `save` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveGame {
    /// Engine configuration.
    pub config: EngineConfig,
    /// Map state.
    pub world: World,
    /// Player state.
    pub player: PlayerState,
    /// Score and its log.
    pub score: Score,
    /// Turns taken.
    pub turns: u32,
    /// State machine phase.
    pub phase: Phase,
}

/// An interactive adventure session.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) config: EngineConfig,
    pub(crate) world: World,
    pub(crate) player: PlayerState,
    pub(crate) score: Score,
    turns: u32,
    pub(crate) phase: Phase,
    pub(crate) save_requested: bool,
}

impl Session {
    /// Create a new session with every location at its initial contents.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        Self::with_world(World::ruins_of_new_york()?, config)
    }

    /// Create a session on a custom map, starting at the ruins.
    pub fn with_world(world: World, config: EngineConfig) -> EngineResult<Self> {
        if !world.contains(START) {
            return Err(EngineError::LocationNotFound(START));
        }
        world.validate_items(&Default::default())?;
        log::info!("new session, max {} turns", config.max_turns);
        Ok(Self {
            config,
            world,
            player: PlayerState::new(START),
            score: Score::new(),
            turns: 0,
            phase: Phase::Exploring,
            save_requested: false,
        })
    }

    /// Rebuild a session from a save, validating the map, item placement and
    /// the generator.
    ///
    /// The save penalty sticks: a restored session always counts as saved.
    pub fn restore(save: SaveGame) -> EngineResult<Self> {
        save.world.validate()?;
        if !save.world.contains(save.player.location) {
            return Err(EngineError::LocationNotFound(save.player.location));
        }
        if let Phase::Encounter { destination } = save.phase {
            if !save.world.contains(destination) {
                return Err(EngineError::LocationNotFound(destination));
            }
        }
        save.world.validate_items(&save.player.inventory)?;
        let generator = &save.player.generator;
        if generator.is_built() && !generator.is_complete() {
            return Err(EngineError::IncompleteGenerator {
                missing: generator.missing(),
            });
        }

        let mut player = save.player;
        player.flags.save_used = true;
        log::info!("restored session at turn {}", save.turns);
        Ok(Self {
            config: save.config,
            world: save.world,
            player,
            score: save.score,
            turns: save.turns,
            phase: save.phase,
            save_requested: false,
        })
    }

    /// Copy the session into a serializable save.
    pub fn snapshot(&self) -> SaveGame {
        SaveGame {
            config: self.config,
            world: self.world.clone(),
            player: self.player.clone(),
            score: self.score.clone(),
            turns: self.turns,
            phase: self.phase,
        }
    }

    /// Snapshot to persist if the last command was `save`.
    pub fn take_save_request(&mut self) -> Option<SaveGame> {
        if std::mem::take(&mut self.save_requested) {
            Some(self.snapshot())
        } else {
            None
        }
    }

    /// The map.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// The score and its log.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Turns taken so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the game has ended.
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// How the game ended, once it has.
    pub fn ending(&self) -> Option<Ending> {
        match self.phase {
            Phase::GameOver(ending) => Some(ending),
            _ => None,
        }
    }

    /// Welcome text followed by the starting location.
    pub fn intro(&self) -> Response {
        let describe = self.describe();
        Response::ok(format!(
            "Welcome to the Ruins of New York!\n\
             In this post-apocalyptic adventure, you'll navigate through dangerous terrain,\n\
             solve puzzles, and uncover the secrets of the old world.\n\
             Type 'help' at any time for a list of commands.\n\n{}",
            describe.text
        ))
        .with_image(describe.image)
    }

    /// Describe the current location. Never changes state.
    pub fn describe(&self) -> Response {
        let here = self.here();
        let items = if here.items.is_empty() {
            "nothing".to_string()
        } else {
            here.items
                .iter()
                .map(|i| i.key())
                .collect::<Vec<_>>()
                .join(", ")
        };
        Response::ok(format!(
            "You are in the {}.\n{}\nYou see: {items}\nExits: {}",
            here.id.name(),
            here.description,
            here.exit_keywords().join(", ")
        ))
        .with_image(here.image.clone())
    }

    /// Process a player command and return a response.
    pub fn process_command(&mut self, input: &str) -> Response {
        let command = parse_command(input);
        if command == Command::Empty {
            return Response::invalid("Please enter a command.");
        }
        if self.is_game_over() {
            return Response::with_kind(
                ResponseKind::GameOver,
                format!("The game is over. Your final score: {}", self.score.total()),
            );
        }

        self.turns += 1;
        log::debug!("turn {}: {command:?}", self.turns);
        if self.turns >= self.config.max_turns {
            self.end(Ending::TimeUp);
            return Response::with_kind(
                ResponseKind::TurnLimitReached,
                format!(
                    "Time's up! The sun sets over the ruins and the scavengers come out.\n\
                     Game Over! Your final score: {}",
                    self.score.total()
                ),
            );
        }

        match self.phase {
            Phase::Encounter { destination } => self.resolve_encounter(command, destination),
            _ => self.dispatch(command),
        }
    }

    fn dispatch(&mut self, command: Command) -> Response {
        match command {
            Command::Act { verb, object } => self.act(verb, object.as_deref()),
            Command::Incomplete { question, .. } => Response::invalid(question),
            Command::Unrecognized { token, input } => {
                // An exit keyword typed on its own is a move.
                if self.here().exit(&token).is_some() {
                    return self.go(&token);
                }
                if self.here().exit(&input).is_some() {
                    return self.go(&input);
                }
                let mut text =
                    "I don't understand that command. Type 'help' for a list of commands."
                        .to_string();
                if let Some(verb) = suggest_verb(&token) {
                    text.push_str(&format!(" Did you mean '{verb}'?"));
                }
                Response::invalid(text)
            }
            Command::Empty => Response::invalid("Please enter a command."),
        }
    }

    pub(crate) fn act(&mut self, verb: Verb, object: Option<&str>) -> Response {
        let object = object.unwrap_or("");
        match verb {
            Verb::Go => self.go(object),
            Verb::Look => self.describe(),
            Verb::Inventory => self.inventory(),
            Verb::Take => self.take(object),
            Verb::Examine => self.examine(object),
            Verb::Ride => self.ride(object),
            Verb::Read => self.read(object),
            Verb::Strike => self.strike(object),
            Verb::Open => self.open(object),
            Verb::Drink => self.drink(object),
            Verb::Talk => self.talk(object),
            Verb::Trade => self.trade(object),
            Verb::Build => self.build(object),
            Verb::Attach => self.attach(object),
            Verb::Pedal => self.pedal(object),
            Verb::TurnOn => self.turn_on(object),
            Verb::Insert => self.insert(object),
            Verb::Consult => self.consult(object),
            Verb::Throw => self.throw(object),
            Verb::Use => self.use_item(object),
            Verb::Drop => self.drop_item(object),
            Verb::Save => self.save(),
            Verb::Score => Response::ok(format!(
                "{}\nTurn {} of {}.",
                self.score.summary(),
                self.turns,
                self.config.max_turns
            )),
            Verb::Map => Response::ok(
                self.world
                    .render_map(&self.player.visited, self.player.location),
            ),
            Verb::Hint => self.hint(),
            Verb::Help => Response::ok(HELP),
            Verb::Quit => {
                self.end(Ending::Quit);
                Response::with_kind(
                    ResponseKind::GameOver,
                    format!(
                        "You have quit the game. Your final score: {}",
                        self.score.total()
                    ),
                )
            }
            Verb::Yes | Verb::No => Response::invalid("There's nothing to answer."),
        }
    }

    pub(crate) fn here(&self) -> &Location {
        self.world.location(self.player.location)
    }

    pub(crate) fn here_mut(&mut self) -> &mut Location {
        self.world.location_mut(self.player.location)
    }

    pub(crate) fn end(&mut self, ending: Ending) {
        log::info!(
            "game over ({ending:?}) after {} turns, score {}",
            self.turns,
            self.score.total()
        );
        self.phase = Phase::GameOver(ending);
    }

    /// Award points, returning the sentence that announces them.
    pub(crate) fn award(&mut self, reason: &str, delta: u32) -> String {
        if self.score.award(reason, delta) {
            format!(" Your score increased by {delta} points.")
        } else {
            String::new()
        }
    }

    /// Move through the exit matching `direction`.
    pub(crate) fn go(&mut self, direction: &str) -> Response {
        if direction.is_empty() {
            return Response::invalid("Go where?");
        }
        match resolve_exit(self.here(), direction) {
            ExitMatch::Found { to, .. } => self.enter(to),
            ExitMatch::NoMatch { valid } => {
                log::warn!("no exit '{direction}' from {}", self.player.location);
                Response::invalid(format!(
                    "You can't go '{direction}'. Valid exits are: {}",
                    valid.join(", ")
                ))
            }
            ExitMatch::Ambiguous { candidates } => Response::invalid(format!(
                "Did you mean one of these: {}?",
                candidates.join(", ")
            )),
        }
    }

    fn enter(&mut self, to: LocationId) -> Response {
        let guarded = self.world.location(to).features.rat_people;
        let flags = self.player.flags;
        if guarded && !flags.riding_bicycle && !flags.rat_people_distracted {
            log::info!("blocked from {to}: rat people");
            return self.encounter(to);
        }

        self.player.move_to(to);
        log::info!("moved to {to}");
        let mut response = self.describe();
        if guarded && !flags.rat_people_distracted {
            response.text = format!(
                "Hunched figures scramble from the darkness, but you pedal hard and leave \
                 them chittering behind you.\n{}",
                response.text
            );
        }
        response
    }

    fn encounter(&mut self, destination: LocationId) -> Response {
        let ambush = "Suddenly, several hunched humanoid figures scramble from the darkness. \
                      You find yourself surrounded.";
        if self.player.has_item(ItemId::CheezEes) {
            self.phase = Phase::Encounter { destination };
            Response::refused(format!(
                "{ambush}\nDo you want to throw the CHEEZ-EEs? (yes/no)"
            ))
        } else {
            self.overwhelmed(ambush)
        }
    }

    fn resolve_encounter(&mut self, command: Command, destination: LocationId) -> Response {
        match command {
            Command::Act {
                verb: Verb::Yes, ..
            } => self.distract(destination),
            Command::Act {
                verb: Verb::Throw,
                object,
            } if object
                .as_deref()
                .is_none_or(|o| ItemId::parse(o) == Some(ItemId::CheezEes)) =>
            {
                self.distract(destination)
            }
            Command::Act { verb, object } if verb.is_read_only() => {
                self.act(verb, object.as_deref())
            }
            _ => self.overwhelmed("You hesitate."),
        }
    }

    /// Feed the rat people and slip past them into `destination`.
    pub(crate) fn distract(&mut self, destination: LocationId) -> Response {
        self.player.inventory.remove(&ItemId::CheezEes);
        self.player.flags.rat_people_distracted = true;
        self.phase = Phase::Exploring;
        let bonus = self.award("Distracted the rat people", 5);
        self.player.move_to(destination);
        log::info!("rat people distracted, moved to {destination}");
        let describe = self.describe();
        Response::ok(format!(
            "You hurl the bag of CHEEZ-EEs into the darkness. The rat people shriek and fight \
             over the crackers while you slip past.{bonus}\n\n{}",
            describe.text
        ))
        .with_image(describe.image)
    }

    fn overwhelmed(&mut self, lead: &str) -> Response {
        self.end(Ending::Overwhelmed);
        Response::with_kind(
            ResponseKind::GameOver,
            format!(
                "{lead}\nThe rat people advance, their chittering growing louder...\n\
                 You've been overwhelmed by the rat people.\n\
                 Game Over! Your final score: {}",
                self.score.total()
            ),
        )
    }

    fn save(&mut self) -> Response {
        self.player.flags.save_used = true;
        self.save_requested = true;
        Response::ok(format!(
            "Game saved. Saving costs {} points of the final bonus.",
            self.config.save_penalty
        ))
    }
}

const HELP: &str = "Available commands:
look - Examine your surroundings
inventory - Check your inventory
take [item] - Pick up an item
drop [item] - Put down an item
examine [item] - Look closely at an item
ride bicycle - Ride the bicycle if you have it
read book - Read the book if you have it
shake/punch/kick machine - Interact with the vending machine
open can - Open the energy drink
drink can - Drink the opened energy drink
talk to [person] - Talk to someone
trade - Attempt to trade with the mutant leader
build generator - Attempt to build a generator
attach [part] to [bicycle] - Attach a generator part
pedal bike - Pedal the bike to generate electricity
turn on computer - Try to turn on the computer
insert floppy - Insert the floppy disk into the computer
consult book about [part] - Consult the book about a specific part
throw cheez-ees - Throw the CHEEZ-EEs
use [item] - Use an item
go/move/walk/run [direction] - Move in a direction
[direction] - Move in a direction (e.g., 'north', 'out')
save - Save your progress (reduces the final bonus)
score - Show your score
map - Show the places you've explored
hint - Get a hint
quit - End the game";

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(EngineConfig::default()).unwrap()
    }

    fn play(session: &mut Session, commands: &[&str]) {
        for command in commands {
            session.process_command(command);
        }
    }

    #[test]
    fn create_session() {
        let session = session();
        assert_eq!(session.player().location, LocationId::Ruins);
        assert!(session.player().inventory.is_empty());
        assert_eq!(session.score().total(), 0);
        assert_eq!(session.turns(), 0);
        assert_eq!(session.phase(), Phase::Exploring);
        assert!(!session.is_game_over());
    }

    #[test]
    fn sessions_are_independent() {
        let mut first = session();
        let second = session();
        first.process_command("take bicycle");

        assert!(first.player().has_item(ItemId::Bicycle));
        assert!(
            second
                .world()
                .location(LocationId::Ruins)
                .items
                .contains(&ItemId::Bicycle)
        );
    }

    #[test]
    fn describe_location() {
        let session = session();
        let response = session.describe();

        assert!(response.text.starts_with("You are in the ruins."));
        assert!(response.text.contains("You see: bicycle"));
        assert!(response.text.contains("Exits: enter store, north"));
        assert_eq!(
            response.image.as_deref(),
            Some("ruins_of_new_york/ruins.png")
        );
    }

    #[test]
    fn describe_empty_location_says_nothing() {
        let mut session = session();
        session.process_command("north");
        assert!(session.describe().text.contains("You see: nothing"));
    }

    #[test]
    fn describe_is_idempotent() {
        let mut session = session();
        session.process_command("enter store");
        assert_eq!(session.describe(), session.describe());
    }

    #[test]
    fn empty_input_costs_nothing() {
        let mut session = session();
        let response = session.process_command("   ");
        assert_eq!(response.text, "Please enter a command.");
        assert_eq!(response.kind, ResponseKind::InvalidInput);
        assert_eq!(session.turns(), 0);
    }

    #[test]
    fn unknown_command_costs_a_turn() {
        let mut session = session();
        let response = session.process_command("dance");
        assert!(response.text.starts_with("I don't understand"));
        assert_eq!(session.turns(), 1);
    }

    #[test]
    fn unknown_command_suggests_verb() {
        let mut session = session();
        let response = session.process_command("invetory");
        assert!(response.text.contains("Did you mean 'inventory'?"));
    }

    #[test]
    fn missing_object_asks() {
        let mut session = session();
        let response = session.process_command("take");
        assert_eq!(response.text, "Take what?");
        assert_eq!(response.kind, ResponseKind::InvalidInput);
        assert_eq!(session.world().location(LocationId::Ruins).items.len(), 1);
    }

    #[test]
    fn exit_keyword_moves() {
        let mut session = session();
        let response = session.process_command("north");
        assert!(response.text.starts_with("You are in the tunnel entrance."));

        let response = session.process_command("south");
        assert!(response.text.starts_with("You are in the ruins."));

        session.process_command("enter store");
        let response = session.process_command("out");
        assert!(response.text.starts_with("You are in the ruins."));
    }

    #[test]
    fn partial_exit_resolves() {
        let mut session = session();
        let response = session.process_command("go store");
        assert!(response.text.starts_with("You are in the store."));
    }

    #[test]
    fn bad_direction_lists_exits() {
        let mut session = session();
        let response = session.process_command("go west");
        assert_eq!(
            response.text,
            "You can't go 'west'. Valid exits are: enter store, north"
        );
        assert_eq!(session.player().location, LocationId::Ruins);
    }

    #[test]
    fn riding_passes_the_rat_people() {
        let mut session = session();
        play(&mut session, &["take bicycle", "ride bicycle", "north"]);
        let response = session.process_command("enter dark tunnel");

        assert_eq!(session.player().location, LocationId::DarkTunnel);
        assert!(response.text.contains("pedal hard"));
        assert!(!session.is_game_over());
    }

    #[test]
    fn unprotected_without_cheez_ees_is_overwhelmed() {
        let mut session = session();
        session.process_command("north");
        let response = session.process_command("go dark tunnel");

        assert!(response.text.contains("overwhelmed"));
        assert!(session.is_game_over());
        assert_eq!(session.ending(), Some(Ending::Overwhelmed));
        assert_eq!(session.player().location, LocationId::TunnelEntrance);
    }

    #[test]
    fn cheez_ees_start_an_encounter() {
        let mut session = session();
        play(&mut session, &["enter store", "take cheez-ees", "out", "north"]);
        let response = session.process_command("enter dark tunnel");

        assert!(response.text.contains("throw the CHEEZ-EEs"));
        assert_eq!(
            session.phase(),
            Phase::Encounter {
                destination: LocationId::DarkTunnel
            }
        );
        assert_eq!(session.player().location, LocationId::TunnelEntrance);
    }

    #[test]
    fn throwing_cheez_ees_ends_the_encounter() {
        let mut session = session();
        play(
            &mut session,
            &["enter store", "take cheez-ees", "out", "north", "enter dark tunnel"],
        );
        let before = session.score().total();
        let response = session.process_command("yes");

        assert!(response.text.contains("slip past"));
        assert_eq!(session.phase(), Phase::Exploring);
        assert_eq!(session.player().location, LocationId::DarkTunnel);
        assert!(session.player().flags.rat_people_distracted);
        assert!(!session.player().has_item(ItemId::CheezEes));
        assert_eq!(session.score().total(), before + 5);

        // Distracted rat people stay distracted.
        play(&mut session, &["west", "enter dark tunnel"]);
        assert_eq!(session.player().location, LocationId::DarkTunnel);
    }

    #[test]
    fn read_only_commands_keep_the_encounter() {
        let mut session = session();
        play(
            &mut session,
            &["enter store", "take cheez-ees", "out", "north", "enter dark tunnel"],
        );
        let response = session.process_command("inventory");
        assert!(response.text.contains("cheez-ees"));
        assert!(matches!(session.phase(), Phase::Encounter { .. }));

        session.process_command("distract");
        assert_eq!(session.phase(), Phase::Exploring);
    }

    #[test]
    fn refusing_the_encounter_ends_the_game() {
        let mut session = session();
        play(
            &mut session,
            &["enter store", "take cheez-ees", "out", "north", "enter dark tunnel"],
        );
        let response = session.process_command("no");

        assert!(response.text.contains("overwhelmed"));
        assert_eq!(session.ending(), Some(Ending::Overwhelmed));
    }

    #[test]
    fn turn_limit_forces_game_over() {
        let mut session = Session::new(EngineConfig::default().with_max_turns(3)).unwrap();
        session.process_command("look");
        session.process_command("look");
        let response = session.process_command("take bicycle");

        assert_eq!(response.kind, ResponseKind::TurnLimitReached);
        assert!(response.text.contains("Time's up"));
        assert_eq!(session.ending(), Some(Ending::TimeUp));
        // The command that hit the limit was not carried out.
        assert!(!session.player().has_item(ItemId::Bicycle));
        assert_eq!(session.turns(), 3);
    }

    #[test]
    fn game_over_is_terminal() {
        let mut session = session();
        session.process_command("quit");
        assert_eq!(session.ending(), Some(Ending::Quit));

        let turns = session.turns();
        let response = session.process_command("take bicycle");
        assert_eq!(response.kind, ResponseKind::GameOver);
        assert!(response.text.contains("final score"));
        assert_eq!(session.turns(), turns);
        assert!(!session.player().has_item(ItemId::Bicycle));
    }

    #[test]
    fn yes_outside_encounter() {
        let mut session = session();
        let response = session.process_command("yes");
        assert_eq!(response.text, "There's nothing to answer.");
    }

    #[test]
    fn save_marks_penalty_and_requests_snapshot() {
        let mut session = session();
        assert!(session.take_save_request().is_none());

        session.process_command("save");
        assert!(session.player().flags.save_used);
        let save = session.take_save_request().unwrap();
        assert_eq!(save.turns, 1);
        assert!(session.take_save_request().is_none());
    }

    #[test]
    fn restore_round_trip() {
        let mut session = session();
        play(&mut session, &["take bicycle", "save"]);
        let save = session.take_save_request().unwrap();

        let json = serde_json::to_string(&save).unwrap();
        let restored = Session::restore(serde_json::from_str(&json).unwrap()).unwrap();

        assert!(restored.player().has_item(ItemId::Bicycle));
        assert!(restored.player().flags.save_used);
        assert_eq!(restored.turns(), 2);
    }

    #[test]
    fn restore_rejects_duplicated_items() {
        let mut save = session().snapshot();
        save.player.inventory.insert(ItemId::Bicycle);
        assert_eq!(
            Session::restore(save).unwrap_err(),
            EngineError::DuplicateItem {
                item: ItemId::Bicycle
            }
        );
    }

    #[test]
    fn restore_rejects_encounter_outside_the_map() {
        let world = World::new([
            Location::new(LocationId::Ruins, "Rubble.")
                .with_exit("enter store", LocationId::Store),
            Location::new(LocationId::Store, "Shelves.").with_exit("out", LocationId::Ruins),
        ])
        .unwrap();
        let mut save = Session::with_world(world, EngineConfig::default())
            .unwrap()
            .snapshot();
        save.phase = Phase::Encounter {
            destination: LocationId::DarkTunnel,
        };

        assert_eq!(
            Session::restore(save).unwrap_err(),
            EngineError::LocationNotFound(LocationId::DarkTunnel)
        );
    }

    #[test]
    fn restore_rejects_built_generator_without_parts() {
        let mut save = session().snapshot();
        save.player.generator = serde_json::from_str(r#"{"parts":{},"built":true}"#).unwrap();
        assert!(save.player.generator.is_built());

        match Session::restore(save).unwrap_err() {
            EngineError::IncompleteGenerator { missing } => assert_eq!(missing.len(), 6),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn intro_greets_and_describes() {
        let response = session().intro();
        assert!(response.text.starts_with("Welcome to the Ruins of New York!"));
        assert!(response.text.contains("You are in the ruins."));
    }
}
