//! Locations of the map.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::item::ItemId;

/// Every location on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationId {
    /// Starting point among the collapsed buildings.
    Ruins,
    /// Looted store next to the ruins.
    Store,
    /// Mouth of the dark tunnel.
    TunnelEntrance,
    /// The dangerous location, home of the rat people.
    DarkTunnel,
    /// Subway platform with the vending machine.
    Platform,
    /// Bridge over the burning canal.
    BurningCanal,
    /// Open-air market run by the mutant tribe.
    Market,
    /// Sorted junk piles; source of the generator parts.
    Scrapyard,
    /// Bunker with the old computer.
    Bunker,
}

impl LocationId {
    /// All locations, in map order.
    pub const ALL: [LocationId; 9] = [
        Self::Ruins,
        Self::Store,
        Self::TunnelEntrance,
        Self::DarkTunnel,
        Self::Platform,
        Self::BurningCanal,
        Self::Market,
        Self::Scrapyard,
        Self::Bunker,
    ];

    /// Stable key, e.g. `tunnel_entrance`.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Ruins => "ruins",
            Self::Store => "store",
            Self::TunnelEntrance => "tunnel_entrance",
            Self::DarkTunnel => "dark_tunnel",
            Self::Platform => "platform",
            Self::BurningCanal => "burning_canal",
            Self::Market => "market",
            Self::Scrapyard => "scrapyard",
            Self::Bunker => "bunker",
        }
    }

    /// Name used in prose ("You are in the tunnel entrance.").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ruins => "ruins",
            Self::Store => "store",
            Self::TunnelEntrance => "tunnel entrance",
            Self::DarkTunnel => "dark tunnel",
            Self::Platform => "platform",
            Self::BurningCanal => "burning canal",
            Self::Market => "market",
            Self::Scrapyard => "scrapyard",
            Self::Bunker => "bunker",
        }
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A named exit from one location to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    /// Keyword the player types, e.g. `enter store`.
    pub keyword: String,
    /// Where the exit leads.
    pub to: LocationId,
}

/// Optional features of a location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    /// A vending machine stands here.
    pub vending_machine: bool,
    /// Cans left in the vending machine.
    pub vending_stock: u32,
    /// Hostile rat people lurk here.
    pub rat_people: bool,
    /// The mutant leader is here and willing to trade.
    pub mutant_leader: bool,
    /// The old computer.
    pub computer: bool,
    /// A power inverter the generator can feed.
    pub power_inverter: bool,
}

/// A node of the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Which location this is.
    pub id: LocationId,
    /// Prose shown on arrival.
    pub description: String,
    /// Exits in display order.
    pub exits: Vec<Exit>,
    /// Items lying here.
    pub items: BTreeSet<ItemId>,
    /// Feature flags.
    pub features: Features,
    /// Image shown alongside the description.
    pub image: Option<String>,
}

impl Location {
    /// Create a location with no exits, items or features.
    pub fn new(id: LocationId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            exits: Vec::new(),
            items: BTreeSet::new(),
            features: Features::default(),
            image: None,
        }
    }

    /// Add an exit.
    pub fn with_exit(mut self, keyword: impl Into<String>, to: LocationId) -> Self {
        self.exits.push(Exit {
            keyword: keyword.into(),
            to,
        });
        self
    }

    /// Add an item.
    pub fn with_item(mut self, item: ItemId) -> Self {
        self.items.insert(item);
        self
    }

    /// Set the feature flags.
    pub fn with_features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Exit keywords in display order.
    pub fn exit_keywords(&self) -> Vec<&str> {
        self.exits.iter().map(|e| e.keyword.as_str()).collect()
    }

    /// Destination of the exit with exactly this keyword.
    pub fn exit(&self, keyword: &str) -> Option<LocationId> {
        self.exits
            .iter()
            .find(|e| e.keyword.eq_ignore_ascii_case(keyword))
            .map(|e| e.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let loc = Location::new(LocationId::Store, "Dusty.")
            .with_exit("out", LocationId::Ruins)
            .with_item(ItemId::Book)
            .with_image("store.png");

        assert_eq!(loc.exit_keywords(), vec!["out"]);
        assert_eq!(loc.exit("OUT"), Some(LocationId::Ruins));
        assert_eq!(loc.exit("in"), None);
        assert!(loc.items.contains(&ItemId::Book));
        assert_eq!(loc.image.as_deref(), Some("store.png"));
    }

    #[test]
    fn keys_and_names() {
        assert_eq!(LocationId::TunnelEntrance.key(), "tunnel_entrance");
        assert_eq!(LocationId::TunnelEntrance.name(), "tunnel entrance");
        assert_eq!(LocationId::DarkTunnel.to_string(), "dark_tunnel");
    }
}
