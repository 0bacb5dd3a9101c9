//! Player state management.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::generator::Generator;
use crate::item::ItemId;
use crate::location::LocationId;

/// State of the energy drink can.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrinkState {
    /// Sealed; worth the most in trade.
    #[default]
    Closed,
    /// Popped but not drunk.
    Opened,
    /// Drunk; the empty can is still carried.
    Empty,
}

/// Puzzle progress flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    /// Riding the bicycle; lets the player outrun the rat people.
    pub riding_bicycle: bool,
    /// The generator charged the battery feeding the computer.
    pub computer_powered: bool,
    /// The mutant leader's floppy disk is held.
    pub floppy_disk: bool,
    /// The rat people were bribed with cheez-ees.
    pub rat_people_distracted: bool,
    /// State of the energy drink can.
    pub energy_drink: DrinkState,
    /// The store shelves were searched.
    pub shelves_examined: bool,
    /// The game was saved at least once.
    pub save_used: bool,
}

/// The player's current state in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Current location.
    pub location: LocationId,
    /// Items being carried.
    pub inventory: BTreeSet<ItemId>,
    /// Progress flags.
    pub flags: Flags,
    /// Generator sub-assembly.
    pub generator: Generator,
    /// Locations seen so far, for the map.
    pub visited: BTreeSet<LocationId>,
}

impl PlayerState {
    /// Create a new player at the given location.
    pub fn new(location: LocationId) -> Self {
        Self {
            location,
            inventory: BTreeSet::new(),
            flags: Flags::default(),
            generator: Generator::new(),
            visited: BTreeSet::from([location]),
        }
    }

    /// Check if the player has an item.
    pub fn has_item(&self, item: ItemId) -> bool {
        self.inventory.contains(&item)
    }

    /// Move to a location and remember it.
    pub fn move_to(&mut self, location: LocationId) {
        self.location = location;
        self.visited.insert(location);
    }
}
