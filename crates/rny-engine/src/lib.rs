//! Text-adventure engine for the Ruins of New York.
//!
//! A [`Session`] holds one play-through: a fixed map of nine locations, the
//! player's inventory and puzzle flags, the generator sub-assembly and the
//! score. Hosts feed it raw command lines and get a [`Response`] back; the
//! engine never does I/O itself.

mod actions;
/// Engine configuration.
pub mod config;
/// Error types for the engine.
pub mod error;
/// The bicycle generator sub-assembly.
pub mod generator;
/// Item identifiers.
pub mod item;
/// Locations of the map.
pub mod location;
/// Command parsing and exit resolution.
pub mod parser;
/// Player state management.
pub mod player;
/// Command responses.
pub mod response;
/// Score keeping.
pub mod score;
/// Adventure session management.
pub mod session;
/// The map.
pub mod world;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use item::ItemId;
pub use location::LocationId;
pub use parser::{Command, Verb, parse_command};
pub use player::PlayerState;
pub use response::{Response, ResponseKind};
pub use score::Score;
pub use session::{Ending, Phase, SaveGame, Session};
pub use world::World;
