//! The map: a fixed set of locations joined by named exits.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::item::ItemId;
use crate::location::{Features, Location, LocationId};

/// Where every session starts.
pub const START: LocationId = LocationId::Ruins;

/// All locations of a session, keyed by id.
///
/// Every exit of every location leads to a location in the map; this is
/// checked whenever a `World` is built, so any id reached by walking from a
/// validated start is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    locations: BTreeMap<LocationId, Location>,
}

impl World {
    /// Build a world from locations, validating every exit.
    pub fn new(locations: impl IntoIterator<Item = Location>) -> EngineResult<Self> {
        let world = Self {
            locations: locations.into_iter().map(|l| (l.id, l)).collect(),
        };
        world.validate()?;
        Ok(world)
    }

    /// The Ruins of New York, with every location at its initial contents.
    pub fn ruins_of_new_york() -> EngineResult<Self> {
        Self::new(initial_locations())
    }

    /// Check that every exit names a location in the map.
    pub fn validate(&self) -> EngineResult<()> {
        for location in self.locations.values() {
            for exit in &location.exits {
                if !self.locations.contains_key(&exit.to) {
                    return Err(EngineError::UnknownDestination {
                        from: location.id,
                        keyword: exit.keyword.clone(),
                        to: exit.to,
                    });
                }
            }
        }
        Ok(())
    }

    /// Check that no item is in two places, counting the inventory as one.
    pub fn validate_items(&self, inventory: &BTreeSet<ItemId>) -> EngineResult<()> {
        let mut seen: BTreeSet<ItemId> = inventory.clone();
        for location in self.locations.values() {
            for item in &location.items {
                if !seen.insert(*item) {
                    return Err(EngineError::DuplicateItem { item: *item });
                }
            }
        }
        Ok(())
    }

    /// Whether the map contains a location.
    pub fn contains(&self, id: LocationId) -> bool {
        self.locations.contains_key(&id)
    }

    /// Look up a location.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in the map. Ids obtained from exits or from a
    /// validated session position are always present.
    pub fn location(&self, id: LocationId) -> &Location {
        &self.locations[&id]
    }

    /// Look up a location for mutation.
    ///
    /// # Panics
    ///
    /// Same as [`World::location`].
    pub fn location_mut(&mut self, id: LocationId) -> &mut Location {
        self.locations
            .get_mut(&id)
            .unwrap_or_else(|| panic!("location {id} is not in the map"))
    }

    /// All locations in id order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Which location holds an item, if any.
    pub fn find_item(&self, item: ItemId) -> Option<LocationId> {
        self.locations
            .values()
            .find(|l| l.items.contains(&item))
            .map(|l| l.id)
    }

    /// ASCII map of the visited locations and their exits.
    pub fn render_map(&self, visited: &BTreeSet<LocationId>, current: LocationId) -> String {
        let mut out = String::from("Map of what you've explored:");
        for location in self.locations.values() {
            if !visited.contains(&location.id) {
                continue;
            }
            let marker = if location.id == current {
                " (you are here)"
            } else {
                ""
            };
            out.push_str(&format!("\n* {}{marker}", location.id.name()));
            for exit in &location.exits {
                let to = if visited.contains(&exit.to) {
                    exit.to.name()
                } else {
                    "???"
                };
                out.push_str(&format!("\n    {} -> {to}", exit.keyword));
            }
        }
        out
    }
}

fn initial_locations() -> Vec<Location> {
    vec![
        Location::new(
            LocationId::Ruins,
            "You stand amidst the RUINS OF NEW YORK: collapsed buildings, burned-out vehicles \
             and broken streets surround you. You see a store here with cracked windows and a \
             door that's still on its hinges. The street is mostly clear to the north.",
        )
        .with_exit("enter store", LocationId::Store)
        .with_exit("north", LocationId::TunnelEntrance)
        .with_item(ItemId::Bicycle)
        .with_image("ruins_of_new_york/ruins.png"),
        Location::new(
            LocationId::Store,
            "The store stocks mostly debris and detritus. Only a few toppled shelves remain.",
        )
        .with_exit("out", LocationId::Ruins)
        .with_item(ItemId::CheezEes)
        .with_item(ItemId::Book)
        .with_image("ruins_of_new_york/store.png"),
        Location::new(
            LocationId::TunnelEntrance,
            "You arrive at the mouth of a dark tunnel that threatens to swallow you whole.",
        )
        .with_exit("enter dark tunnel", LocationId::DarkTunnel)
        .with_exit("south", LocationId::Ruins)
        .with_image("ruins_of_new_york/tunnel_entrance.png"),
        Location::new(
            LocationId::DarkTunnel,
            "After traveling through the tunnel for what seems like forever, you reach a \
             junction. Hunched figures chitter somewhere in the darkness.",
        )
        .with_exit("east", LocationId::Platform)
        .with_exit("west", LocationId::TunnelEntrance)
        .with_features(Features {
            rat_people: true,
            ..Features::default()
        })
        .with_image("ruins_of_new_york/dark_tunnel.png"),
        Location::new(
            LocationId::Platform,
            "You are on a platform. There is a vending machine here. A stairway leads back up \
             to the surface. A wrecked bike lies on the floor of the tunnel below you.",
        )
        .with_exit("up", LocationId::BurningCanal)
        .with_exit("west", LocationId::DarkTunnel)
        .with_item(ItemId::WreckedBike)
        .with_features(Features {
            vending_machine: true,
            vending_stock: 1,
            ..Features::default()
        })
        .with_image("ruins_of_new_york/platform.png"),
        Location::new(
            LocationId::BurningCanal,
            "The water in the canal below the bridge is ruined and poisonous; flaming oil \
             slicks burn on its surface. A stairway leads back down to the underworld. The \
             bridge crosses over the canal to the south.",
        )
        .with_exit("south", LocationId::Market)
        .with_exit("down", LocationId::Platform)
        .with_image("ruins_of_new_york/burning_canal.png"),
        Location::new(
            LocationId::Market,
            "In the distance you see a gathering of mutants attending an open-air market. \
             Beyond the market is the entrance to a scrapyard. The bridge is back whence you \
             came.",
        )
        .with_exit("enter scrapyard", LocationId::Scrapyard)
        .with_exit("north", LocationId::BurningCanal)
        .with_features(Features {
            mutant_leader: true,
            ..Features::default()
        })
        .with_image("ruins_of_new_york/market.png"),
        Location::new(
            LocationId::Scrapyard,
            "You're surrounded by carefully sorted and stacked piles of junk. Metal cans, glass \
             bottles, plastic containers, bales of cardboard, discarded electronics, and junked \
             cars. There is an unsorted junk pile here. You see a concrete bunker.",
        )
        .with_exit("out", LocationId::Market)
        .with_exit("enter bunker", LocationId::Bunker)
        .with_item(ItemId::Motor)
        .with_item(ItemId::CarBattery)
        .with_item(ItemId::DriveBelt)
        .with_item(ItemId::JumperCables)
        .with_item(ItemId::Wires)
        .with_image("ruins_of_new_york/scrapyard.png"),
        Location::new(
            LocationId::Bunker,
            "The bunker seems like a shrine to the Old World: posters of long-dead celebrities \
             are on the walls and board games, plastic figurines and brightly colored boxes of \
             cereal line the shelves. On a desk in the corner is a dusty old computer, plugged \
             into a power inverter.",
        )
        .with_exit("out", LocationId::Scrapyard)
        .with_item(ItemId::Toolbox)
        .with_features(Features {
            computer: true,
            power_inverter: true,
            ..Features::default()
        })
        .with_image("ruins_of_new_york/bunker.png"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_world_is_valid() {
        let world = World::ruins_of_new_york().unwrap();
        for id in LocationId::ALL {
            assert!(world.contains(id), "{id} missing");
        }
        assert!(world.validate_items(&BTreeSet::new()).is_ok());
    }

    #[test]
    fn unknown_destination_is_rejected() {
        let result = World::new([
            Location::new(LocationId::Ruins, "Rubble.").with_exit("in", LocationId::Store)
        ]);
        assert_eq!(
            result.unwrap_err(),
            EngineError::UnknownDestination {
                from: LocationId::Ruins,
                keyword: "in".to_string(),
                to: LocationId::Store,
            }
        );
    }

    #[test]
    fn item_in_inventory_and_location_is_rejected() {
        let world = World::ruins_of_new_york().unwrap();
        let inventory = BTreeSet::from([ItemId::Bicycle]);
        assert_eq!(
            world.validate_items(&inventory).unwrap_err(),
            EngineError::DuplicateItem {
                item: ItemId::Bicycle
            }
        );
    }

    #[test]
    fn find_item() {
        let world = World::ruins_of_new_york().unwrap();
        assert_eq!(world.find_item(ItemId::Book), Some(LocationId::Store));
        assert_eq!(world.find_item(ItemId::Crank), None);
    }

    #[test]
    fn map_hides_unvisited() {
        let world = World::ruins_of_new_york().unwrap();
        let visited = BTreeSet::from([LocationId::Ruins]);
        let map = world.render_map(&visited, LocationId::Ruins);

        assert!(map.contains("* ruins (you are here)"));
        assert!(map.contains("enter store -> ???"));
        assert!(!map.contains("* store"));
    }

    #[test]
    fn only_the_dark_tunnel_has_rat_people() {
        let world = World::ruins_of_new_york().unwrap();
        let guarded: Vec<_> = world
            .locations()
            .filter(|l| l.features.rat_people)
            .map(|l| l.id)
            .collect();
        assert_eq!(guarded, vec![LocationId::DarkTunnel]);
    }
}
